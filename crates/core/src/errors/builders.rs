//! Builder methods for creating errors with context

use super::types::Error;

impl Error {
    /// Create an invalid range expression error
    #[must_use]
    pub fn invalid_range_format(expression: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidRangeFormat {
            expression: expression.into(),
            message: message.into(),
        }
    }

    /// Create a non-numeric value error
    #[must_use]
    pub fn non_numeric_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Error::NonNumericValue {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a malformed rule error
    #[must_use]
    pub fn malformed_rule_spec(spec: impl Into<String>, message: impl Into<String>) -> Self {
        Error::MalformedRuleSpec {
            spec: spec.into(),
            message: message.into(),
        }
    }

    /// Create an HTTP status failure
    #[must_use]
    pub fn fetch_protocol(url: impl Into<String>, status: u16) -> Self {
        Error::FetchProtocol {
            url: url.into(),
            status,
        }
    }

    /// Create a connection-level failure
    #[must_use]
    pub fn fetch_transport(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::FetchTransport {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Create a malformed document error without an underlying parse error
    #[must_use]
    pub fn malformed_document(message: impl Into<String>) -> Self {
        Error::MalformedDocument {
            message: message.into(),
            source: None,
        }
    }

    /// Create a logging initialisation error
    #[must_use]
    pub fn logging(message: impl Into<String>) -> Self {
        Error::Logging {
            message: message.into(),
        }
    }

    /// Whether the error stems from the rule configuration rather than the
    /// checked document or the network
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::InvalidRangeFormat { .. } | Error::MalformedRuleSpec { .. }
        )
    }
}
