//! JSON translation sources.
//!
//! Nested JSON documents are flattened into separator-joined keys
//! before hashing, so `{"common": {"hello": "Cześć"}}` registers the
//! original key `common.hello`. Arrays use `[i]` index notation. A JSON
//! `null` marks a key as present but untranslated.

use serde_json::Value;

/// The separator used when the caller does not choose one.
pub const DEFAULT_SEPARATOR: &str = ".";

/// Flattens a JSON document into original-key/value pairs.
///
/// Object keys nest with `separator`; array elements append `[i]` to
/// the parent key. String values are taken verbatim, `null` becomes the
/// untranslated state, and any other scalar renders with its JSON
/// representation.
#[must_use]
pub fn flatten(json: &Value, separator: &str) -> Vec<(String, Option<String>)> {
    let mut pairs = Vec::new();
    flatten_value(json, separator, None, &mut pairs);

    pairs
}

/// Recursive worker for [`flatten`].
fn flatten_value(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
    pairs: &mut Vec<(String, Option<String>)>,
) {
    match json {
        Value::Object(map) => {
            for (key, value) in map {
                let full_key =
                    prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
                flatten_value(value, separator, Some(&full_key), pairs);
            }
        }
        Value::Array(items) => {
            for (index, value) in items.iter().enumerate() {
                let full_key =
                    prefix.map_or_else(|| format!("[{index}]"), |p| format!("{p}[{index}]"));
                flatten_value(value, separator, Some(&full_key), pairs);
            }
        }
        Value::String(text) => {
            if let Some(key) = prefix {
                pairs.push((key.to_string(), Some(text.clone())));
            }
        }
        Value::Null => {
            if let Some(key) = prefix {
                pairs.push((key.to_string(), None));
            }
        }
        _ => {
            if let Some(key) = prefix {
                pairs.push((key.to_string(), Some(json.to_string())));
            }
        }
    }
}
