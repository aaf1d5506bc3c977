//! Shared utility functions for text handling and structured-value access.
//!
//! ## Structured Value Helpers
//!
//! Manifest and spec files are parsed into `serde_json::Value` or
//! `serde_yaml::Value`; `json_display` and `yaml_display` render strings
//! without quotes, and null and booleans as `None`, `True` and `False` in
//! both formats.

use std::fmt::Display;

// =============================================================================
// Structured Value Helpers
// =============================================================================

/// Render a JSON value for human-readable output.
///
/// Strings are emitted without surrounding quotes, null and booleans as
/// `None`/`True`/`False`; everything else uses its compact JSON form.
pub fn json_display(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Bool(b) => bool_display(*b).to_string(),
        serde_json::Value::Null => "None".to_string(),
        other => other.to_string(),
    }
}

/// Render a YAML value for human-readable output.
pub fn yaml_display(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::String(s) => s.clone(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Bool(b) => bool_display(*b).to_string(),
        serde_yaml::Value::Null => "None".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

fn bool_display(b: bool) -> &'static str {
    if b { "True" } else { "False" }
}

/// Keys of a JSON object in document order (requires `preserve_order`).
pub fn json_keys(value: &serde_json::Value) -> Option<Vec<String>> {
    value.as_object().map(|obj| obj.keys().cloned().collect())
}

// =============================================================================
// String Utilities
// =============================================================================

/// Title-case a token: first letter of every alphabetic run upper-cased,
/// the rest lower-cased.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// First `max_chars` characters of `s` (char boundary safe).
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Decode bytes as UTF-8, substituting invalid sequences.
pub fn decode_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

/// Filter an iterator of Results, logging errors at debug level before discarding.
///
/// Use this instead of `.filter_map(|r| r.ok())` when you want visibility into
/// what errors are being discarded.
pub fn log_filter_error<T, E: Display>(result: Result<T, E>, context: &str) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::debug!("{}: {}", context, e);
            None
        }
    }
}
