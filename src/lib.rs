//! OCPP 1.6 message data model with dual JSON and SOAP/XML wire codecs.
//!
//! Every protocol message is an immutable payload struct declared once,
//! with its field list tagged mandatory/optional; both codecs, structural
//! equality and structural hashing derive from that one declaration. See
//! [`codec::WireMessage`] for the per-message operations and
//! [`format`] for the OCPP-J framing around payloads.
//!
//! ```
//! use ocpp_wire::codec::WireMessage;
//! use ocpp_wire::v16::messages::ChangeConfigurationRequest;
//!
//! let req = ChangeConfigurationRequest::from_wire(
//!     r#"{"key":"HeartbeatInterval","value":"300"}"#,
//! )?;
//! assert_eq!(req.key, "HeartbeatInterval");
//! # Ok::<(), ocpp_wire::codec::ParseError>(())
//! ```

pub mod codec;
pub mod format;
pub mod v16;
