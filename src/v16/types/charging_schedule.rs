use chrono::{DateTime, Utc};

use crate::codec::Seconds;
use crate::wire_struct;

use super::{ChargingRateUnitType, ChargingSchedulePeriod};

wire_struct! {
    pub struct ChargingSchedule {
        opt duration("duration"): Seconds,
        opt start_schedule("startSchedule"): DateTime<Utc>,
        req charging_rate_unit("chargingRateUnit"): ChargingRateUnitType,
        req_list charging_schedule_period("chargingSchedulePeriod"): ChargingSchedulePeriod,
        opt min_charging_rate("minChargingRate"): f32,
    }
}
