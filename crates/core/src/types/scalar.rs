use serde_json::{Number, Value};
use std::fmt;

/// A leaf of a flattened JSON document.
///
/// Arrays and objects never appear here; they are decomposed into paths by
/// the flattener.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

impl Scalar {
    /// Extract the scalar from a JSON value, `None` for containers
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(Scalar::Null),
            Value::Bool(b) => Some(Scalar::Bool(*b)),
            Value::Number(n) => Some(Scalar::Number(n.clone())),
            Value::String(s) => Some(Scalar::String(s.clone())),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => f.write_str("null"),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::String(value.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::String(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Number(value.into())
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn containers_are_not_scalars() {
        assert_eq!(Scalar::from_json(&json!([1, 2])), None);
        assert_eq!(Scalar::from_json(&json!({"a": 1})), None);
        assert_eq!(Scalar::from_json(&json!(null)), Some(Scalar::Null));
    }

    #[test]
    fn display_matches_raw_json_text() {
        assert_eq!(Scalar::from("ALARM").to_string(), "ALARM");
        assert_eq!(Scalar::from(15).to_string(), "15");
        assert_eq!(Scalar::from(true).to_string(), "true");
        assert_eq!(Scalar::Null.to_string(), "null");

        let float = Scalar::from_json(&json!(2.5)).unwrap();
        assert_eq!(float.to_string(), "2.5");
    }
}
