//! JSON decoding for response payloads.
//!
//! Typed decoding rewrites every object key from snake_case to camelCase
//! before handing the value to serde, so target types declare their fields
//! with `#[serde(rename_all = "camelCase")]` and only the fields they need.
//! Generic decoding returns the payload's top-level object untouched.

use std::borrow::Cow;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, Result};
use crate::http::JsonObject;

/// Decode `bytes` into `T`, mapping snake_case payload keys onto camelCase
/// fields. Unknown fields are ignored unless `T` says otherwise.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let value: Value = serde_json::from_slice(bytes).map_err(ApiError::decode)?;
    serde_json::from_value(camelize_keys(value)).map_err(ApiError::decode)
}

/// Decode `bytes` into a generic JSON object.
pub fn decode_object(bytes: &[u8]) -> Result<JsonObject> {
    match serde_json::from_slice::<Value>(bytes).map_err(ApiError::decode)? {
        Value::Object(map) => Ok(map),
        _ => Err(ApiError::NotAnObject),
    }
}

/// Apply `snake_to_camel` to the keys of every object in `value`, at any depth.
pub fn camelize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (snake_to_camel(&key).into_owned(), camelize_keys(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(camelize_keys).collect()),
        other => other,
    }
}

/// Convert a snake_case key to camelCase.
///
/// Leading and trailing underscores survive, empty segments are dropped, and
/// every segment after the first is capitalized with the rest lower-cased.
/// Keys without an underscore come back borrowed and unchanged.
pub fn snake_to_camel(key: &str) -> Cow<'_, str> {
    if !key.contains('_') {
        return Cow::Borrowed(key);
    }

    let inner = key.trim_matches('_');
    if inner.is_empty() {
        return Cow::Borrowed(key);
    }
    let leading = key.len() - key.trim_start_matches('_').len();
    let trailing = key.len() - key.trim_end_matches('_').len();

    let mut out = String::with_capacity(key.len());
    out.push_str(&key[..leading]);
    for (i, segment) in inner.split('_').filter(|s| !s.is_empty()).enumerate() {
        if i == 0 {
            out.push_str(segment);
        } else {
            let mut chars = segment.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(&chars.as_str().to_lowercase());
            }
        }
    }
    out.push_str(&key[key.len() - trailing..]);
    Cow::Owned(out)
}
