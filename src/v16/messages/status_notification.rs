use chrono::{DateTime, Utc};

use crate::wire_struct;

use super::super::types::{ChargePointErrorCode, ChargePointStatus};

wire_struct! {
    /// `vendorErrorCode` stays an open string: a vendor extension point,
    /// not a closed vocabulary.
    pub struct StatusNotificationRequest : "statusNotificationRequest" {
        req connector_id("connectorId"): usize,
        req error_code("errorCode"): ChargePointErrorCode,
        opt info("info"): String,
        req status("status"): ChargePointStatus,
        opt timestamp("timestamp"): DateTime<Utc>,
        opt vendor_id("vendorId"): String,
        opt vendor_error_code("vendorErrorCode"): String,
    }
}

wire_struct! {
    pub struct StatusNotificationResponse : "statusNotificationResponse" {}
}
