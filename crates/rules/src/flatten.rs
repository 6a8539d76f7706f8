//! Flattening of JSON documents into dotted property paths
//!
//! `{"category": {"foo": {"status": "ALARM"}}}` becomes
//! `category.foo.status=ALARM`. Array elements take an index segment, so
//! `{"modules": [{"id": 1}, 7]}` becomes `modules.[0].id=1` and
//! `modules.[1]=7`.

use check_json_core::{Error, PropertyMap, Result, Scalar, PATH_SEPARATOR};
use serde_json::{Map, Value};
use tracing::debug;

/// Flatten a document whose root is an object or an array.
///
/// Empty containers contribute no paths. A scalar root is rejected rather
/// than turned into a nameless property.
pub fn flatten(document: &Value) -> Result<PropertyMap> {
    let mut properties = PropertyMap::new();

    match document {
        Value::Object(entries) => flatten_object(entries, "", &mut properties),
        Value::Array(items) => flatten_array(items, "", &mut properties),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            return Err(Error::malformed_document(format!(
                "expected a JSON object or array at the document root, found {}",
                kind_name(document)
            )));
        }
    }

    Ok(properties)
}

fn flatten_object(entries: &Map<String, Value>, prefix: &str, properties: &mut PropertyMap) {
    for (key, value) in entries {
        flatten_value(value, join(prefix, key), properties);
    }
}

fn flatten_array(items: &[Value], prefix: &str, properties: &mut PropertyMap) {
    for (index, item) in items.iter().enumerate() {
        flatten_value(item, join(prefix, &format!("[{index}]")), properties);
    }
}

fn flatten_value(value: &Value, path: String, properties: &mut PropertyMap) {
    let leaf = match value {
        Value::Object(entries) => return flatten_object(entries, &path, properties),
        Value::Array(items) => return flatten_array(items, &path, properties),
        Value::Null => Scalar::Null,
        Value::Bool(b) => Scalar::Bool(*b),
        Value::Number(n) => Scalar::Number(n.clone()),
        Value::String(s) => Scalar::String(s.clone()),
    };

    if let Some(previous) = properties.insert(path.as_str(), leaf) {
        debug!(
            path = %path,
            previous = %previous,
            "flattened path written twice, keeping the later value"
        );
    }
}

fn join(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_owned()
    } else {
        format!("{prefix}{PATH_SEPARATOR}{segment}")
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
