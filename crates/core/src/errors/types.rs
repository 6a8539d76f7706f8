//! Core error type definitions

/// Result type alias for check_json operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for check_json operations using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A threshold expression is not a recognised Nagios range
    InvalidRangeFormat { expression: String, message: String },

    /// A range rule matched a key whose value is not an integer
    NonNumericValue { key: String, value: String },

    /// A rule string could not be turned into a rule
    MalformedRuleSpec { spec: String, message: String },

    /// The endpoint answered with an HTTP error status
    FetchProtocol { url: String, status: u16 },

    /// The endpoint could not be reached or the body could not be read
    FetchTransport { url: String, reason: String },

    /// The fetched body is not a JSON object or array
    MalformedDocument {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// The tracing subscriber could not be installed
    Logging { message: String },
}
