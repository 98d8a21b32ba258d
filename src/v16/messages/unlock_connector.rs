use crate::wire_struct;

use super::super::types::UnlockStatus;

wire_struct! {
    pub struct UnlockConnectorRequest : "unlockConnectorRequest" {
        req connector_id("connectorId"): usize,
    }
}

wire_struct! {
    pub struct UnlockConnectorResponse : "unlockConnectorResponse" {
        req status("status"): UnlockStatus,
    }
}
