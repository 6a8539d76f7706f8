//! Display implementations for error types
//!
//! The fetch variants render the exact text Nagios operators already grep
//! their logs for.

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidRangeFormat {
                expression,
                message,
            } => {
                write!(f, "invalid range expression '{expression}': {message}")
            }
            Error::NonNumericValue { key, value } => {
                write!(f, "value of '{key}' is not an integer: {value}")
            }
            Error::MalformedRuleSpec { spec, message } => {
                write!(f, "malformed rule '{spec}': {message}")
            }
            Error::FetchProtocol { url, status } => {
                write!(f, "HTTPError[{status}], url:{url}")
            }
            Error::FetchTransport { url, reason } => {
                write!(f, "URLError[{reason}], url:{url}")
            }
            Error::MalformedDocument { message, .. } => {
                write!(f, "malformed JSON document: {message}")
            }
            Error::Logging { message } => {
                write!(f, "failed to initialise logging: {message}")
            }
        }
    }
}
