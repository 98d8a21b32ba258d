use chrono::{DateTime, Utc};

use crate::wire_struct;

use super::SampledValue;

wire_struct! {
    pub struct MeterValue {
        req timestamp("timestamp"): DateTime<Utc>,
        req_list sampled_value("sampledValue"): SampledValue,
    }
}
