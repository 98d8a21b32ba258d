use chrono::{DateTime, Utc};

use crate::codec::Seconds;
use crate::wire_struct;

use super::super::types::RegistrationStatus;

wire_struct! {
    pub struct BootNotificationRequest : "bootNotificationRequest" {
        opt charge_box_serial_number("chargeBoxSerialNumber"): String,
        req charge_point_model("chargePointModel"): String,
        opt charge_point_serial_number("chargePointSerialNumber"): String,
        req charge_point_vendor("chargePointVendor"): String,
        opt firmware_version("firmwareVersion"): String,
        opt iccid("iccid"): String,
        opt imsi("imsi"): String,
        opt meter_serial_number("meterSerialNumber"): String,
        opt meter_type("meterType"): String,
    }
}

wire_struct! {
    pub struct BootNotificationResponse : "bootNotificationResponse" {
        req current_time("currentTime"): DateTime<Utc>,
        req interval("interval"): Seconds,
        req status("status"): RegistrationStatus,
    }
}
