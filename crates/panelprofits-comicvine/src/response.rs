// SPDX-License-Identifier: GPL-3.0-or-later

//! Helpers over raw (untyped) API responses.
//!
//! These are auxiliary checks callers can apply to the output of
//! [`ComicVineClient::get_raw`](crate::ComicVineClient::get_raw); the client
//! never applies them automatically.

use serde_json::{Map, Value};

/// Check that a raw API response looks usable.
///
/// Returns false when the response is not a non-empty JSON object, when its
/// `error` field is present and not equal to "OK", or when it lacks a
/// `results` key.
pub fn validate_response(response: &Value) -> bool {
    let Some(object) = response.as_object() else {
        return false;
    };
    if object.is_empty() {
        return false;
    }
    match object.get("error") {
        None => {}
        Some(Value::String(error)) if error == "OK" => {}
        Some(_) => return false,
    }
    object.contains_key("results")
}

/// Restrict `data` to the entries named in `include_fields`.
///
/// The output key set is exactly the intersection of `include_fields` and the
/// keys of `data`. Non-object input yields an empty map.
pub fn format_response(data: &Value, include_fields: &[&str]) -> Map<String, Value> {
    let Some(object) = data.as_object() else {
        return Map::new();
    };
    include_fields
        .iter()
        .filter_map(|field| object.get_key_value(*field))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
