//! Wire-format sniffing.
//!
//! The check is purely syntactic: a payload whose first non-whitespace
//! character is `{` is treated as JSON, everything else as XML. A payload
//! that sniffs as one format but fails to parse reports a
//! [`MalformedPayload`](super::ParseError::MalformedPayload), it is never
//! retried as the other format.

use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireFormat {
    Json,
    Xml,
}

pub fn detect(raw: &str) -> WireFormat {
    let format = if raw.trim_start().starts_with('{') {
        WireFormat::Json
    } else {
        WireFormat::Xml
    };
    trace!(?format, len = raw.len(), "sniffed wire format");
    format
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brace_means_json() {
        assert_eq!(detect(r#"{"idTag":"ABC123"}"#), WireFormat::Json);
        assert_eq!(detect("  \n\t {\"idTag\":\"ABC123\"}"), WireFormat::Json);
    }

    #[test]
    fn everything_else_is_xml() {
        assert_eq!(detect("<authorizeRequest/>"), WireFormat::Xml);
        assert_eq!(detect(""), WireFormat::Xml);
    }
}
