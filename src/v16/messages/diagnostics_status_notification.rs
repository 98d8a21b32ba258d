use crate::wire_struct;

use super::super::types::DiagnosticsStatus;

wire_struct! {
    pub struct DiagnosticsStatusNotificationRequest : "diagnosticsStatusNotificationRequest" {
        req status("status"): DiagnosticsStatus,
    }
}

wire_struct! {
    pub struct DiagnosticsStatusNotificationResponse : "diagnosticsStatusNotificationResponse" {}
}
