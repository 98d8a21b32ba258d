//! Codec implementations for the leaf scalar types messages are built from.
//!
//! JSON carries numbers and strings natively; in XML every scalar is the
//! text content of its element. Timestamps are RFC 3339 with timezone,
//! normalized to UTC. Unknown or out-of-range raw values reject the field.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use super::{Element, JsonDecode, JsonEncode, ParseError, XmlDecode, XmlEncode};

/// A whole-second wire duration (heartbeat interval, schedule duration,
/// retry interval). Kept distinct from plain counters so the conversion to
/// an in-memory duration is explicit and lossless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Seconds(pub u32);

impl Seconds {
    pub fn as_duration(self) -> std::time::Duration {
        std::time::Duration::from_secs(u64::from(self.0))
    }
}

impl From<u32> for Seconds {
    fn from(secs: u32) -> Self {
        Seconds(secs)
    }
}

macro_rules! int_scalar {
    ($($ty:ty),*) => {$(
        impl JsonDecode for $ty {
            fn decode_json(v: &Value) -> Result<Self, ParseError> {
                v.as_i64()
                    .and_then(|n| <$ty>::try_from(n).ok())
                    .or_else(|| v.as_u64().and_then(|n| <$ty>::try_from(n).ok()))
                    .ok_or_else(|| ParseError::invalid_value(v))
            }
        }

        impl JsonEncode for $ty {
            fn encode_json(&self) -> Value {
                Value::from(*self)
            }
        }

        impl XmlDecode for $ty {
            fn decode_xml(el: &Element) -> Result<Self, ParseError> {
                el.text
                    .trim()
                    .parse()
                    .map_err(|_| ParseError::invalid_value(el.text.trim()))
            }
        }

        impl XmlEncode for $ty {
            fn encode_xml(&self, tag: &str) -> Element {
                Element::with_text(tag, self.to_string())
            }
        }
    )*};
}

int_scalar!(u32, u64, i32, i64, usize);

macro_rules! float_scalar {
    ($($ty:ty),*) => {$(
        impl JsonDecode for $ty {
            fn decode_json(v: &Value) -> Result<Self, ParseError> {
                v.as_f64()
                    .map(|n| n as $ty)
                    .ok_or_else(|| ParseError::invalid_value(v))
            }
        }

        impl JsonEncode for $ty {
            fn encode_json(&self) -> Value {
                Value::from(*self)
            }
        }

        impl XmlDecode for $ty {
            fn decode_xml(el: &Element) -> Result<Self, ParseError> {
                el.text
                    .trim()
                    .parse()
                    .map_err(|_| ParseError::invalid_value(el.text.trim()))
            }
        }

        impl XmlEncode for $ty {
            fn encode_xml(&self, tag: &str) -> Element {
                Element::with_text(tag, self.to_string())
            }
        }
    )*};
}

float_scalar!(f32, f64);

impl JsonDecode for bool {
    fn decode_json(v: &Value) -> Result<Self, ParseError> {
        v.as_bool().ok_or_else(|| ParseError::invalid_value(v))
    }
}

impl JsonEncode for bool {
    fn encode_json(&self) -> Value {
        Value::Bool(*self)
    }
}

impl XmlDecode for bool {
    fn decode_xml(el: &Element) -> Result<Self, ParseError> {
        match el.text.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(ParseError::invalid_value(other)),
        }
    }
}

impl XmlEncode for bool {
    fn encode_xml(&self, tag: &str) -> Element {
        Element::with_text(tag, if *self { "true" } else { "false" })
    }
}

impl JsonDecode for String {
    fn decode_json(v: &Value) -> Result<Self, ParseError> {
        v.as_str()
            .map(str::to_owned)
            .ok_or_else(|| ParseError::invalid_value(v))
    }
}

impl JsonEncode for String {
    fn encode_json(&self) -> Value {
        Value::String(self.clone())
    }
}

impl XmlDecode for String {
    fn decode_xml(el: &Element) -> Result<Self, ParseError> {
        Ok(el.text.clone())
    }
}

impl XmlEncode for String {
    fn encode_xml(&self, tag: &str) -> Element {
        Element::with_text(tag, self.clone())
    }
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, ParseError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| ParseError::invalid_value(raw))
}

fn format_timestamp(dt: &DateTime<Utc>) -> String {
    // AutoSi keeps whatever sub-second precision the value carries, so a
    // decoded timestamp re-encodes to the same instant.
    dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

impl JsonDecode for DateTime<Utc> {
    fn decode_json(v: &Value) -> Result<Self, ParseError> {
        let raw = v.as_str().ok_or_else(|| ParseError::invalid_value(v))?;
        parse_timestamp(raw)
    }
}

impl JsonEncode for DateTime<Utc> {
    fn encode_json(&self) -> Value {
        Value::String(format_timestamp(self))
    }
}

impl XmlDecode for DateTime<Utc> {
    fn decode_xml(el: &Element) -> Result<Self, ParseError> {
        parse_timestamp(el.text.trim())
    }
}

impl XmlEncode for DateTime<Utc> {
    fn encode_xml(&self, tag: &str) -> Element {
        Element::with_text(tag, format_timestamp(self))
    }
}

impl JsonDecode for Seconds {
    fn decode_json(v: &Value) -> Result<Self, ParseError> {
        u32::decode_json(v).map(Seconds)
    }
}

impl JsonEncode for Seconds {
    fn encode_json(&self) -> Value {
        Value::from(self.0)
    }
}

impl XmlDecode for Seconds {
    fn decode_xml(el: &Element) -> Result<Self, ParseError> {
        u32::decode_xml(el).map(Seconds)
    }
}

impl XmlEncode for Seconds {
    fn encode_xml(&self, tag: &str) -> Element {
        Element::with_text(tag, self.0.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn timestamps_normalize_to_utc_and_round_trip() {
        let v = json!("2017-02-01T20:53:32.486+01:00");
        let dt = <DateTime<Utc>>::decode_json(&v).unwrap();
        assert_eq!(dt.encode_json(), json!("2017-02-01T19:53:32.486Z"));
        assert_eq!(<DateTime<Utc>>::decode_json(&dt.encode_json()).unwrap(), dt);
    }

    #[test]
    fn unparsable_timestamp_is_rejected() {
        let err = <DateTime<Utc>>::decode_json(&json!("yesterday")).unwrap_err();
        assert!(matches!(err, ParseError::InvalidFieldValue { .. }));
    }

    #[test]
    fn integers_reject_fractions_and_wrong_types() {
        assert!(u32::decode_json(&json!(1.5)).is_err());
        assert!(u32::decode_json(&json!("1")).is_err());
        assert!(u32::decode_json(&json!(-1)).is_err());
        assert_eq!(u32::decode_json(&json!(300)).unwrap(), 300);
    }

    #[test]
    fn seconds_convert_losslessly() {
        let s = Seconds(600);
        assert_eq!(s.as_duration(), std::time::Duration::from_secs(600));
        assert_eq!(Seconds::decode_json(&s.encode_json()).unwrap(), s);
    }

    #[test]
    fn xml_scalars_trim_surrounding_whitespace() {
        let el = Element::with_text("connectorId", " 1 ");
        assert_eq!(u32::decode_xml(&el).unwrap(), 1);
    }
}
