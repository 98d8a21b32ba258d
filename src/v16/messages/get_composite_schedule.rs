use chrono::{DateTime, Utc};

use crate::codec::Seconds;
use crate::wire_struct;

use super::super::types::{ChargingRateUnitType, ChargingSchedule, GetCompositeScheduleStatus};

wire_struct! {
    pub struct GetCompositeScheduleRequest : "getCompositeScheduleRequest" {
        req connector_id("connectorId"): usize,
        req duration("duration"): Seconds,
        opt charging_rate_unit("chargingRateUnit"): ChargingRateUnitType,
    }
}

wire_struct! {
    pub struct GetCompositeScheduleResponse : "getCompositeScheduleResponse" {
        req status("status"): GetCompositeScheduleStatus,
        opt connector_id("connectorId"): usize,
        opt schedule_start("scheduleStart"): DateTime<Utc>,
        opt charging_schedule("chargingSchedule"): ChargingSchedule,
    }
}
