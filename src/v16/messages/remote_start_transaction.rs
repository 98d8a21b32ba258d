use crate::wire_struct;

use super::super::types::{ChargingProfile, RemoteStartStopStatus};

wire_struct! {
    pub struct RemoteStartTransactionRequest : "remoteStartTransactionRequest" {
        opt connector_id("connectorId"): usize,
        req id_tag("idTag"): String,
        opt charging_profile("chargingProfile"): ChargingProfile,
    }
}

wire_struct! {
    pub struct RemoteStartTransactionResponse : "remoteStartTransactionResponse" {
        req status("status"): RemoteStartStopStatus,
    }
}
