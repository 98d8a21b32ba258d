use crate::wire_struct;

use super::super::types::MeterValue;

wire_struct! {
    /// At least one sample is required: an empty `meterValue` array is a
    /// parse failure, not an empty message.
    pub struct MeterValuesRequest : "meterValuesRequest" {
        req connector_id("connectorId"): usize,
        opt transaction_id("transactionId"): i32,
        req_list meter_value("meterValue"): MeterValue,
    }
}

wire_struct! {
    pub struct MeterValuesResponse : "meterValuesResponse" {}
}
