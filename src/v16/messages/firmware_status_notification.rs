use crate::wire_struct;

use super::super::types::FirmwareStatus;

wire_struct! {
    pub struct FirmwareStatusNotificationRequest : "firmwareStatusNotificationRequest" {
        req status("status"): FirmwareStatus,
    }
}

wire_struct! {
    pub struct FirmwareStatusNotificationResponse : "firmwareStatusNotificationResponse" {}
}
