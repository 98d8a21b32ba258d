use crate::wire_struct;

use super::super::types::{AvailabilityStatus, AvailabilityType};

wire_struct! {
    pub struct ChangeAvailabilityRequest : "changeAvailabilityRequest" {
        req connector_id("connectorId"): usize,
        // `type` is reserved in Rust
        req kind("type"): AvailabilityType,
    }
}

wire_struct! {
    pub struct ChangeAvailabilityResponse : "changeAvailabilityResponse" {
        req status("status"): AvailabilityStatus,
    }
}
