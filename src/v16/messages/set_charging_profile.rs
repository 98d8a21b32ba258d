use crate::wire_struct;

use super::super::types::{ChargingProfile, ChargingProfileStatus};

wire_struct! {
    pub struct SetChargingProfileRequest : "setChargingProfileRequest" {
        req connector_id("connectorId"): usize,
        req cs_charging_profiles("csChargingProfiles"): ChargingProfile,
    }
}

wire_struct! {
    pub struct SetChargingProfileResponse : "setChargingProfileResponse" {
        req status("status"): ChargingProfileStatus,
    }
}
