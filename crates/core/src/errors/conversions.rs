//! Conversion implementations for error types

use super::types::Error;

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::MalformedDocument {
            message: error.to_string(),
            source: Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn json_errors_become_malformed_documents() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{not json")
            .expect_err("invalid JSON must not parse");
        let err = Error::from(parse_error);

        assert!(matches!(err, Error::MalformedDocument { .. }));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("malformed JSON document: "));
    }
}
