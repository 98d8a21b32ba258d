use tracing::debug;

use super::frame::{Call, CallError, CallResult};

/// A frame that could not be classified. Carries whatever unique id could
/// be recovered so the host can still answer with a protocol-level error
/// instead of dropping the exchange.
#[derive(Debug, Clone)]
pub struct Invalid {
    pub unique_id: Option<String>,
    pub message: String,
    pub err_msg: String,
}

#[derive(Debug, Clone)]
pub enum CallResponse<T> {
    CallResult(CallResult),
    CallError(CallError<T>),
}

/// One classified OCPP-J frame. A rejected frame becomes [`OcppMessage::Invalid`],
/// never a panic: the hosting process must survive any inbound bytes.
pub enum OcppMessage<T> {
    Call(Call),
    CallResponse(CallResponse<T>),
    Invalid(Invalid),
}

pub trait Encode {
    fn encode(&self) -> String;
}

impl<T> CallResponse<T> {
    pub fn unique_id(&self) -> &str {
        match self {
            CallResponse::CallResult(t) => &t.unique_id,
            CallResponse::CallError(t) => &t.unique_id,
        }
    }
}

impl<T: core::str::FromStr> OcppMessage<T> {
    /// Classify a raw frame: `[2, id, action, payload]`, `[3, id, payload]`
    /// or `[4, id, code, description, details]`.
    pub fn decode(message: String) -> OcppMessage<T> {
        let invalid = |unique_id: Option<String>, message: String, err_msg: &str| {
            debug!(err_msg, "rejected inbound frame");
            OcppMessage::Invalid(Invalid {
                unique_id,
                message,
                err_msg: err_msg.to_owned(),
            })
        };

        let raw: serde_json::Value = match serde_json::from_str(&message) {
            Ok(val) => val,
            Err(e) => {
                let err = format!("JSON parse error: {}", e);
                return invalid(None, message, &err);
            }
        };

        let arr = match raw {
            serde_json::Value::Array(arr) => arr,
            _ => return invalid(None, message, "expected a JSON array"),
        };

        match arr.first().and_then(|v| v.as_u64()) {
            Some(2) if arr.len() == 4 => {
                let unique_id = arr[1].as_str().map(|s| s.to_string());
                let action = arr[2].as_str().map(|s| s.to_string());
                let payload = arr[3].clone();

                if let (Some(unique_id), Some(action)) = (unique_id.clone(), action) {
                    OcppMessage::Call(Call {
                        unique_id,
                        action,
                        payload,
                    })
                } else {
                    invalid(unique_id, message, "invalid Call structure")
                }
            }

            Some(3) if arr.len() == 3 => {
                let unique_id = arr[1].as_str().map(|s| s.to_string());
                let payload = arr[2].clone();

                if let Some(unique_id) = unique_id {
                    OcppMessage::CallResponse(CallResponse::CallResult(CallResult {
                        unique_id,
                        payload,
                    }))
                } else {
                    invalid(None, message, "invalid CallResult structure")
                }
            }

            Some(4) if arr.len() == 5 => {
                let unique_id = arr[1].as_str().map(|s| s.to_string());
                let error_code = arr[2].as_str().and_then(|s| s.parse::<T>().ok());
                let error_description = arr[3].as_str().map(|s| s.to_string());
                let error_details = arr[4].clone();

                if let (Some(unique_id), Some(error_code), Some(error_description)) =
                    (unique_id.clone(), error_code, error_description)
                {
                    OcppMessage::CallResponse(CallResponse::CallError(CallError {
                        unique_id,
                        error_code,
                        error_description,
                        error_details,
                    }))
                } else {
                    invalid(unique_id, message, "invalid CallError structure")
                }
            }

            _ => invalid(None, message, "unknown or malformed frame"),
        }
    }
}

impl Encode for Call {
    fn encode(&self) -> String {
        serde_json::to_string(&(2, &self.unique_id, &self.action, &self.payload)).unwrap()
    }
}

impl Encode for CallResult {
    fn encode(&self) -> String {
        serde_json::to_string(&(3, &self.unique_id, &self.payload)).unwrap()
    }
}

impl<T: ToString> Encode for CallError<T> {
    fn encode(&self) -> String {
        serde_json::to_string(&(
            4,
            &self.unique_id,
            self.error_code.to_string(),
            &self.error_description,
            &self.error_details,
        ))
        .unwrap()
    }
}

impl<T: ToString> CallResponse<T> {
    pub fn encode(self) -> String {
        match self {
            CallResponse::CallResult(t) => t.encode(),
            CallResponse::CallError(t) => t.encode(),
        }
    }
}
