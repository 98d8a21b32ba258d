use chrono::{DateTime, Utc};

use crate::wire_struct;

wire_struct! {
    pub struct HeartbeatRequest : "heartbeatRequest" {}
}

wire_struct! {
    pub struct HeartbeatResponse : "heartbeatResponse" {
        req current_time("currentTime"): DateTime<Utc>,
    }
}
