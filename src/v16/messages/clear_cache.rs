use crate::wire_struct;

use super::super::types::ClearCacheStatus;

wire_struct! {
    pub struct ClearCacheRequest : "clearCacheRequest" {}
}

wire_struct! {
    pub struct ClearCacheResponse : "clearCacheResponse" {
        req status("status"): ClearCacheStatus,
    }
}
