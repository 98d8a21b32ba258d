use crate::wire_struct;

use super::super::types::{ChargingProfilePurposeType, ClearChargingProfileStatus};

wire_struct! {
    pub struct ClearChargingProfileRequest : "clearChargingProfileRequest" {
        opt id("id"): i32,
        opt connector_id("connectorId"): i32,
        opt charging_profile_purpose("chargingProfilePurpose"): ChargingProfilePurposeType,
        opt stack_level("stackLevel"): i32,
    }
}

wire_struct! {
    pub struct ClearChargingProfileResponse : "clearChargingProfileResponse" {
        req status("status"): ClearChargingProfileStatus,
    }
}
