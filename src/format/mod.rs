//! OCPP-J framing and correlation metadata. The payload inside a frame is
//! an opaque `serde_json::Value` here; decoding it into a typed message is
//! the [`codec`](crate::codec) layer's job, keyed by the call's `action`.

mod envelope;
mod frame;
mod message;

pub use envelope::MessageHeader;
pub use frame::{Call, CallError, CallResult};
pub use message::{CallResponse, Encode, Invalid, OcppMessage};
