use crate::wire_struct;

use super::super::types::RemoteStartStopStatus;

wire_struct! {
    pub struct RemoteStopTransactionRequest : "remoteStopTransactionRequest" {
        req transaction_id("transactionId"): i32,
    }
}

wire_struct! {
    pub struct RemoteStopTransactionResponse : "remoteStopTransactionResponse" {
        req status("status"): RemoteStartStopStatus,
    }
}
