//! Field extraction over a parsed JSON document.
//!
//! Mandatory-present-or-fail, optional-present-or-absent, and their
//! collection forms. All primitives take the already-parsed object map; the
//! text-level entry points live on [`WireMessage`](super::WireMessage).

use serde_json::{Map, Value};

use super::{JsonDecode, ParseError};

pub fn as_object(v: &Value) -> Result<&Map<String, Value>, ParseError> {
    v.as_object()
        .ok_or_else(|| ParseError::MalformedPayload("expected a JSON object".into()))
}

/// Mandatory field: absent (or `null`) fails the whole parse.
pub fn require<T: JsonDecode>(obj: &Map<String, Value>, name: &str) -> Result<T, ParseError> {
    match obj.get(name) {
        None | Some(Value::Null) => Err(ParseError::MissingMandatoryField(name.into())),
        Some(v) => T::decode_json(v).map_err(|e| e.at(name)),
    }
}

/// Optional field: absence (or `null`) is valid and reads back as `None`.
/// A present value must still be well-formed.
pub fn optional<T: JsonDecode>(
    obj: &Map<String, Value>,
    name: &str,
) -> Result<Option<T>, ParseError> {
    match obj.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => T::decode_json(v).map(Some).map_err(|e| e.at(name)),
    }
}

/// Mandatory non-empty collection. Absent and empty are distinct failures.
pub fn require_list<T: JsonDecode>(
    obj: &Map<String, Value>,
    name: &str,
) -> Result<Vec<T>, ParseError> {
    match obj.get(name) {
        None | Some(Value::Null) => Err(ParseError::MissingMandatoryField(name.into())),
        Some(v) => {
            let items = decode_array::<T>(v, name)?;
            if items.is_empty() {
                return Err(ParseError::EmptyMandatoryCollection(name.into()));
            }
            Ok(items)
        }
    }
}

/// Optional collection; an empty array is preserved as `Some(vec![])`.
pub fn optional_list<T: JsonDecode>(
    obj: &Map<String, Value>,
    name: &str,
) -> Result<Option<Vec<T>>, ParseError> {
    match obj.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => decode_array::<T>(v, name).map(Some),
    }
}

fn decode_array<T: JsonDecode>(v: &Value, name: &str) -> Result<Vec<T>, ParseError> {
    let arr = v.as_array().ok_or_else(|| ParseError::InvalidFieldValue {
        field: name.into(),
        raw: v.to_string(),
    })?;
    arr.iter()
        .map(|item| T::decode_json(item).map_err(|e| e.at(name)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: Value) -> Map<String, Value> {
        v.as_object().unwrap().clone()
    }

    #[test]
    fn require_reports_missing_field() {
        let o = obj(json!({"key": "HeartbeatInterval"}));
        let err = require::<String>(&o, "value").unwrap_err();
        assert_eq!(err, ParseError::MissingMandatoryField("value".into()));
    }

    #[test]
    fn null_counts_as_absent() {
        let o = obj(json!({"info": null}));
        assert_eq!(optional::<String>(&o, "info").unwrap(), None);
        assert_eq!(
            require::<String>(&o, "info").unwrap_err(),
            ParseError::MissingMandatoryField("info".into())
        );
    }

    #[test]
    fn present_but_malformed_optional_is_an_error() {
        let o = obj(json!({"connectorId": "one"}));
        let err = optional::<u32>(&o, "connectorId").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFieldValue { field, .. } if field == "connectorId"));
    }

    #[test]
    fn empty_mandatory_list_is_its_own_failure() {
        let o = obj(json!({"meterValue": []}));
        let err = require_list::<String>(&o, "meterValue").unwrap_err();
        assert_eq!(err, ParseError::EmptyMandatoryCollection("meterValue".into()));
    }

    #[test]
    fn optional_list_keeps_empty_arrays() {
        let o = obj(json!({"key": []}));
        assert_eq!(optional_list::<String>(&o, "key").unwrap(), Some(vec![]));
    }
}
