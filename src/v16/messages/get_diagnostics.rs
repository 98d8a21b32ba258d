use chrono::{DateTime, Utc};

use crate::codec::Seconds;
use crate::wire_struct;

wire_struct! {
    pub struct GetDiagnosticsRequest : "getDiagnosticsRequest" {
        req location("location"): String,
        opt retries("retries"): u64,
        opt retry_interval("retryInterval"): Seconds,
        opt start_time("startTime"): DateTime<Utc>,
        opt stop_time("stopTime"): DateTime<Utc>,
    }
}

wire_struct! {
    pub struct GetDiagnosticsResponse : "getDiagnosticsResponse" {
        opt file_name("fileName"): String,
    }
}
