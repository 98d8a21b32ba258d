use crate::wire_struct;

use super::super::types::{ResetStatus, ResetType};

wire_struct! {
    pub struct ResetRequest : "resetRequest" {
        // `type` is reserved in Rust
        req kind("type"): ResetType,
    }
}

wire_struct! {
    pub struct ResetResponse : "resetResponse" {
        req status("status"): ResetStatus,
    }
}
