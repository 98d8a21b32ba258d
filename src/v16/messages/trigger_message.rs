use crate::wire_struct;

use super::super::types::{MessageTrigger, TriggerMessageStatus};

wire_struct! {
    pub struct TriggerMessageRequest : "triggerMessageRequest" {
        req requested_message("requestedMessage"): MessageTrigger,
        opt connector_id("connectorId"): usize,
    }
}

wire_struct! {
    pub struct TriggerMessageResponse : "triggerMessageResponse" {
        req status("status"): TriggerMessageStatus,
    }
}
