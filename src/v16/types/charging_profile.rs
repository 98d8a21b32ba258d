use chrono::{DateTime, Utc};

use crate::wire_struct;

use super::{
    ChargingProfileKindType, ChargingProfilePurposeType, ChargingSchedule, RecurrencyKindType,
};

wire_struct! {
    pub struct ChargingProfile {
        req charging_profile_id("chargingProfileId"): i32,
        opt transaction_id("transactionId"): i32,
        req stack_level("stackLevel"): u32,
        req charging_profile_purpose("chargingProfilePurpose"): ChargingProfilePurposeType,
        req charging_profile_kind("chargingProfileKind"): ChargingProfileKindType,
        opt recurrency_kind("recurrencyKind"): RecurrencyKindType,
        opt valid_from("validFrom"): DateTime<Utc>,
        opt valid_to("validTo"): DateTime<Utc>,
        req charging_schedule("chargingSchedule"): ChargingSchedule,
    }
}
