use std::fmt;

/// Why a payload was rejected. One taxonomy for both wire formats.
///
/// `TryParse`-style call sites match on the variant; fail-fast call sites
/// use `?` and let the error bubble with its `Display` text.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The raw text is not well-formed JSON/XML at all.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// A mandatory field is absent from an otherwise well-formed payload.
    #[error("missing mandatory field `{0}`")]
    MissingMandatoryField(String),

    /// A field is present but its value fails domain parsing.
    #[error("invalid value for field `{field}`: `{raw}`")]
    InvalidFieldValue { field: String, raw: String },

    /// A collection required to be non-empty is present but empty.
    #[error("mandatory collection `{0}` is empty")]
    EmptyMandatoryCollection(String),

    /// A nested structure failed to parse; the cause is preserved.
    #[error("in field `{field}`: {cause}")]
    Nested {
        field: String,
        cause: Box<ParseError>,
    },
}

impl ParseError {
    /// A value-level rejection with the field name not yet known.
    /// The extraction primitives fill the name in via [`ParseError::at`].
    pub fn invalid_value(raw: impl fmt::Display) -> Self {
        ParseError::InvalidFieldValue {
            field: String::new(),
            raw: raw.to_string(),
        }
    }

    /// Attach the field name under which this error was produced.
    ///
    /// An anonymous `InvalidFieldValue` takes the name directly; anything
    /// already located (a nested structure's own failure) is wrapped so the
    /// cause chain reads outermost-field-first.
    pub fn at(self, field: &str) -> Self {
        match self {
            ParseError::InvalidFieldValue { field: f, raw } if f.is_empty() => {
                ParseError::InvalidFieldValue {
                    field: field.into(),
                    raw,
                }
            }
            other => ParseError::Nested {
                field: field.into(),
                cause: Box::new(other),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_value_error_takes_field_name() {
        let err = ParseError::invalid_value("Chargin").at("status");
        assert_eq!(
            err,
            ParseError::InvalidFieldValue {
                field: "status".into(),
                raw: "Chargin".into()
            }
        );
    }

    #[test]
    fn located_errors_wrap_into_nested() {
        let inner = ParseError::MissingMandatoryField("status".into());
        let err = inner.clone().at("idTagInfo");
        assert_eq!(
            err,
            ParseError::Nested {
                field: "idTagInfo".into(),
                cause: Box::new(inner)
            }
        );
        assert_eq!(
            err.to_string(),
            "in field `idTagInfo`: missing mandatory field `status`"
        );
    }
}
