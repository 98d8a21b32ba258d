use chrono::{DateTime, Utc};

use crate::wire_struct;

use super::super::types::{IdTagInfo, MeterValue, Reason};

wire_struct! {
    pub struct StopTransactionRequest : "stopTransactionRequest" {
        opt id_tag("idTag"): String,
        req meter_stop("meterStop"): u64,
        req timestamp("timestamp"): DateTime<Utc>,
        req transaction_id("transactionId"): i32,
        opt reason("reason"): Reason,
        opt_list transaction_data("transactionData"): MeterValue,
    }
}

wire_struct! {
    pub struct StopTransactionResponse : "stopTransactionResponse" {
        opt id_tag_info("idTagInfo"): IdTagInfo,
    }
}
