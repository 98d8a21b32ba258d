use serde_json::Value;

use crate::codec::{JsonEncode, WireMessage};

use super::envelope::MessageHeader;

#[derive(Debug, Clone)]
pub struct Call {
    pub unique_id: String,
    pub action: String,
    pub payload: Value,
}

impl Call {
    pub fn new(unique_id: String, action: impl Into<String>, payload: Value) -> Self {
        Self {
            unique_id,
            action: action.into(),
            payload,
        }
    }

    /// Build an outbound call for a request payload, correlated by the
    /// header's message id.
    pub fn from_header<T: WireMessage>(
        header: &MessageHeader,
        action: impl Into<String>,
        request: &T,
    ) -> Self {
        Self::new(header.message_id().to_owned(), action, request.to_json())
    }
}

#[derive(Debug, Clone)]
pub struct CallResult {
    pub unique_id: String,
    pub payload: Value,
}

impl CallResult {
    pub fn new<T: JsonEncode>(unique_id: String, payload: &T) -> Self {
        Self {
            unique_id,
            payload: payload.encode_json(),
        }
    }
}

/// `T` is the error-code vocabulary, [`ProtocolError`](crate::v16::ProtocolError)
/// for OCPP 1.6.
#[derive(Debug, Clone)]
pub struct CallError<T> {
    pub unique_id: String,
    pub error_code: T,
    pub error_description: String,
    pub error_details: Value,
}

impl<T> CallError<T> {
    pub fn new(unique_id: String, error_code: T) -> Self {
        Self {
            unique_id,
            error_code,
            error_description: String::new(),
            error_details: serde_json::json!({}),
        }
    }
}
