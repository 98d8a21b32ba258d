use chrono::{DateTime, Utc};

use crate::wire_struct;

use super::super::types::IdTagInfo;

wire_struct! {
    pub struct StartTransactionRequest : "startTransactionRequest" {
        req connector_id("connectorId"): usize,
        req id_tag("idTag"): String,
        req meter_start("meterStart"): u64,
        opt reservation_id("reservationId"): i32,
        req timestamp("timestamp"): DateTime<Utc>,
    }
}

wire_struct! {
    pub struct StartTransactionResponse : "startTransactionResponse" {
        req id_tag_info("idTagInfo"): IdTagInfo,
        req transaction_id("transactionId"): i32,
    }
}
