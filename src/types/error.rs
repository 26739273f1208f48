//! Error types for the Nomentia transforms
//!
//! Every transform is all-or-nothing: any error below aborts the whole
//! invocation and no partial output is produced. Lookup misses are not
//! errors (they fall back to the raw value) and "no qualifying records" is
//! reported through [`crate::types::TransformOutcome`], not through this enum.
//!
//! # Error Categories
//!
//! - **Configuration errors**: malformed skip rule, missing or unparsable setting
//! - **Input errors**: XML that does not parse, documents missing required parts,
//!   fields that cannot be read as numbers or dates
//! - **I/O and codec errors**: file access, CSV value tables, base64, JSON

use thiserror::Error;

/// Main error type for the transforms
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    /// The `SkipRow` setting is not of the form `name=value1;value2;...`
    #[error("Table value 'SkipRow' has invalid format: '{rule}'")]
    InvalidSkipRule {
        /// The rejected rule text
        rule: String,
    },

    /// A required setting was not found in any partition
    #[error("Value '{name}' not found in partitions [{}]", partitions.join(", "))]
    MissingValue {
        /// Setting name
        name: String,
        /// Partitions that were searched, in order
        partitions: Vec<String>,
    },

    /// A setting or conversion value exists but cannot be read as the requested type
    #[error("Value '{name}' has invalid content '{value}'")]
    InvalidValue {
        /// Setting or conversion table name
        name: String,
        /// The raw stored value
        value: String,
    },

    /// The XML payload is not well-formed or does not match the expected schema
    #[error("XML error: {message}")]
    Xml {
        /// Description of the XML failure
        message: String,
    },

    /// The document parsed but is structurally unusable
    #[error("Invalid document: {message}")]
    InvalidDocument {
        /// Description of the structural problem
        message: String,
    },

    /// A record field could not be converted to its typed representation
    #[error("Invalid value '{value}' for field {field}")]
    InvalidField {
        /// Field (element or attribute) name
        field: String,
        /// The raw field text
        value: String,
    },

    /// I/O error occurred while reading or writing
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// A value table CSV file could not be read
    #[error("CSV error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Csv {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the CSV failure
        message: String,
    },

    /// The request envelope carried content that is not valid base64
    #[error("Base64 decode error: {message}")]
    Base64 {
        /// Description of the decoding failure
        message: String,
    },

    /// JSON envelope or output serialization failed
    #[error("JSON error: {message}")]
    Json {
        /// Description of the JSON failure
        message: String,
    },
}

impl From<std::io::Error> for TransformError {
    fn from(error: std::io::Error) -> Self {
        TransformError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for TransformError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        TransformError::Csv {
            line,
            message: error.to_string(),
        }
    }
}

impl From<quick_xml::Error> for TransformError {
    fn from(error: quick_xml::Error) -> Self {
        TransformError::xml(error)
    }
}

impl From<quick_xml::DeError> for TransformError {
    fn from(error: quick_xml::DeError) -> Self {
        TransformError::xml(error)
    }
}

impl From<base64::DecodeError> for TransformError {
    fn from(error: base64::DecodeError) -> Self {
        TransformError::Base64 {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for TransformError {
    fn from(error: serde_json::Error) -> Self {
        TransformError::Json {
            message: error.to_string(),
        }
    }
}

impl TransformError {
    /// Create an InvalidSkipRule error
    pub fn invalid_skip_rule(rule: &str) -> Self {
        TransformError::InvalidSkipRule {
            rule: rule.to_string(),
        }
    }

    /// Create a MissingValue error
    pub fn missing_value(name: &str, partitions: &[&str]) -> Self {
        TransformError::MissingValue {
            name: name.to_string(),
            partitions: partitions.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Create an InvalidValue error
    pub fn invalid_value(name: &str, value: &str) -> Self {
        TransformError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an Xml error from anything printable
    pub fn xml(error: impl std::fmt::Display) -> Self {
        TransformError::Xml {
            message: error.to_string(),
        }
    }

    /// Create an InvalidDocument error
    pub fn invalid_document(message: impl Into<String>) -> Self {
        TransformError::InvalidDocument {
            message: message.into(),
        }
    }

    /// Create an InvalidField error
    pub fn invalid_field(field: &str, value: &str) -> Self {
        TransformError::InvalidField {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::invalid_skip_rule(
        TransformError::InvalidSkipRule { rule: "A=B=C".to_string() },
        "Table value 'SkipRow' has invalid format: 'A=B=C'"
    )]
    #[case::missing_value(
        TransformError::missing_value("JournalName", &["FunctionBankStatement", "Nomentia"]),
        "Value 'JournalName' not found in partitions [FunctionBankStatement, Nomentia]"
    )]
    #[case::invalid_value(
        TransformError::InvalidValue { name: "LineLimit".to_string(), value: "many".to_string() },
        "Value 'LineLimit' has invalid content 'many'"
    )]
    #[case::xml(
        TransformError::Xml { message: "unexpected end".to_string() },
        "XML error: unexpected end"
    )]
    #[case::invalid_document(
        TransformError::InvalidDocument { message: "missing root".to_string() },
        "Invalid document: missing root"
    )]
    #[case::invalid_field(
        TransformError::InvalidField { field: "AMOUNTCUR".to_string(), value: "abc".to_string() },
        "Invalid value 'abc' for field AMOUNTCUR"
    )]
    #[case::csv_with_line(
        TransformError::Csv { line: Some(3), message: "bad record".to_string() },
        "CSV error at line 3: bad record"
    )]
    #[case::csv_without_line(
        TransformError::Csv { line: None, message: "bad record".to_string() },
        "CSV error: bad record"
    )]
    fn test_error_display(#[case] error: TransformError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::invalid_skip_rule(
        TransformError::invalid_skip_rule("A=B=C"),
        TransformError::InvalidSkipRule { rule: "A=B=C".to_string() }
    )]
    #[case::invalid_field(
        TransformError::invalid_field("RECID1", "x"),
        TransformError::InvalidField { field: "RECID1".to_string(), value: "x".to_string() }
    )]
    #[case::invalid_document(
        TransformError::invalid_document("empty"),
        TransformError::InvalidDocument { message: "empty".to_string() }
    )]
    fn test_helper_functions(#[case] result: TransformError, #[case] expected: TransformError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: TransformError = io_error.into();
        assert!(matches!(error, TransformError::Io { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: TransformError = json_error.into();
        assert!(matches!(error, TransformError::Json { .. }));
    }
}
