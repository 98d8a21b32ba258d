use crate::wire_struct;

use super::super::types::DataTransferStatus;

wire_struct! {
    /// Vendor ids, message ids and data stay open strings: vendor
    /// extension points, not closed vocabularies.
    pub struct DataTransferRequest : "dataTransferRequest" {
        req vendor_string("vendorId"): String,
        opt message_id("messageId"): String,
        opt data("data"): String,
    }
}

wire_struct! {
    pub struct DataTransferResponse : "dataTransferResponse" {
        req status("status"): DataTransferStatus,
        opt data("data"): String,
    }
}
