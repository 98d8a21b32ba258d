//! OCPP 1.6 message and value-type inventory. Each message is a thin
//! [`wire_struct!`](crate::wire_struct) declaration; the heavy lifting
//! lives in [`codec`](crate::codec).

pub mod messages;
mod protocol_error;
pub mod types;

pub use protocol_error::ProtocolError;
