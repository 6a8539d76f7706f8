//! Failure messages with neighbouring properties
//!
//! A failing `category.foo.status=ALARM` is more useful when it comes with
//! `category.foo.id=module1`. The context level says how many trailing path
//! segments to drop before looking for siblings.

use check_json_core::{PropertyMap, Scalar, PATH_SEPARATOR};

/// Build the message for `key`, listing every other property that shares the
/// parent prefix obtained by dropping `context_levels` trailing segments.
///
/// Sibling lookup is a plain string prefix test in map order. Dropping every
/// segment leaves an empty prefix, so every other property is listed.
#[must_use]
pub fn format_context(
    properties: &PropertyMap,
    key: &str,
    value: Option<&Scalar>,
    context_levels: usize,
) -> String {
    let segments: Vec<&str> = key.split(PATH_SEPARATOR).collect();
    let kept = segments.len().saturating_sub(context_levels);
    let separator = PATH_SEPARATOR.to_string();
    let parent = segments[..kept].join(separator.as_str());

    let mut message = match value {
        Some(value) => format!(" {key}={value}"),
        None => format!(" {key} Not Found"),
    };

    for (sibling, sibling_value) in properties {
        if sibling.starts_with(&parent) && sibling != key {
            message.push_str(&format!("; {sibling}={sibling_value}"));
        }
    }

    message
}
