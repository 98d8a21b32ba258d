//! The dual-format wire codec contract.
//!
//! Every OCPP value — scalar, enumeration, composite, message payload —
//! implements the same four traits: decode/encode for JSON and for XML.
//! Message payloads additionally implement [`WireMessage`], which adds the
//! text-level entry points (including the format-sniffing one) and the
//! serializer-override hook. The per-type implementations are generated
//! from a single field-metadata declaration by [`wire_struct!`](crate::wire_struct)
//! and [`wire_enum!`](crate::wire_enum), so equality, hashing and both
//! codecs cannot drift apart per type.
//!
//! Parsing never panics: every failure surfaces as a [`ParseError`].

pub mod error;
pub mod hash;
pub mod json;
mod macros;
pub mod scalar;
pub mod sniff;
pub mod xml;

pub use error::ParseError;
pub use hash::WireHash;
pub use scalar::Seconds;
pub use sniff::WireFormat;
pub use xml::Element;

use serde_json::Value;

pub trait JsonDecode: Sized {
    fn decode_json(v: &Value) -> Result<Self, ParseError>;
}

pub trait JsonEncode {
    /// Produce the JSON wire form. Absent optional fields are omitted
    /// entirely, never emitted as `null`.
    fn encode_json(&self) -> Value;
}

pub trait XmlDecode: Sized {
    fn decode_xml(el: &Element) -> Result<Self, ParseError>;
}

pub trait XmlEncode {
    /// Produce the XML wire form under the given element name.
    fn encode_xml(&self, tag: &str) -> Element;
}

/// The capability contract every message payload exposes: both codecs plus
/// the text-level operations.
pub trait WireMessage: JsonDecode + JsonEncode + XmlDecode + XmlEncode {
    /// Root element name of the XML wire form, e.g. `statusNotificationRequest`.
    const XML_TAG: &'static str;

    /// Generic entry point: sniff the format, dispatch to the matching
    /// parser. Callers that already know the format should use
    /// [`from_json_text`](Self::from_json_text) or
    /// [`from_xml_text`](Self::from_xml_text) directly.
    fn from_wire(raw: &str) -> Result<Self, ParseError> {
        match sniff::detect(raw) {
            WireFormat::Json => Self::from_json_text(raw),
            WireFormat::Xml => Self::from_xml_text(raw),
        }
    }

    fn from_json_text(raw: &str) -> Result<Self, ParseError> {
        let value: Value = serde_json::from_str(raw)
            .map_err(|e| ParseError::MalformedPayload(e.to_string()))?;
        Self::decode_json(&value)
    }

    /// Parse the document and decode the message root. The root may be
    /// wrapped (SOAP body); the first element matching
    /// [`XML_TAG`](Self::XML_TAG) is used.
    fn from_xml_text(raw: &str) -> Result<Self, ParseError> {
        let root = xml::parse(raw)?;
        let el = root.find(Self::XML_TAG).ok_or_else(|| {
            ParseError::MalformedPayload(format!("no <{}> element in document", Self::XML_TAG))
        })?;
        Self::decode_xml(el)
    }

    fn to_json(&self) -> Value {
        self.encode_json()
    }

    /// Serialize with a caller-supplied override: the hook receives the
    /// produced container and this message, and returns the container to
    /// use. Panics raised by the hook propagate to the caller unmodified.
    fn to_json_with<F>(&self, hook: F) -> Value
    where
        F: FnOnce(Value, &Self) -> Value,
    {
        hook(self.encode_json(), self)
    }

    fn to_xml(&self) -> Element {
        self.encode_xml(Self::XML_TAG)
    }

    fn to_xml_text(&self) -> String {
        self.to_xml().to_string()
    }
}
