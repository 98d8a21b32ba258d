use chrono::{DateTime, Utc};

use crate::codec::Seconds;
use crate::wire_struct;

wire_struct! {
    pub struct UpdateFirmwareRequest : "updateFirmwareRequest" {
        req location("location"): String,
        opt retries("retries"): u64,
        req retrieve_date("retrieveDate"): DateTime<Utc>,
        opt retry_interval("retryInterval"): Seconds,
    }
}

wire_struct! {
    pub struct UpdateFirmwareResponse : "updateFirmwareResponse" {}
}
