//! Field-by-field access to the raw configuration value.
//!
//! Responsibilities:
//! - Look up keys (with aliases) in raw JSON objects and build field paths.
//! - Enforce JSON types for individual fields.
//! - Report unknown keys at trace level.
//!
//! Does NOT handle:
//! - Semantic validation of field contents (see `validate.rs`).
//!
//! Invariants:
//! - Paths use the key actually present in the input, so diagnostics point at
//!   what the user wrote (`daisyui.themes[1]` vs `pluginOptions.themeList[1]`).
//! - Unknown keys are never an error.

use serde_json::{Map, Value};

use super::error::ConfigError;

/// Path shown for the root value itself.
pub(crate) const ROOT_PATH: &str = "<root>";

/// Join a parent path and a key.
pub(crate) fn join(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

/// Path of an array element.
pub(crate) fn index(parent: &str, i: usize) -> String {
    format!("{parent}[{i}]")
}

/// Find the first of `keys` present in `map`, returning its path and value.
pub(crate) fn lookup<'a>(
    map: &'a Map<String, Value>,
    parent: &str,
    keys: &[&str],
) -> Option<(String, &'a Value)> {
    keys.iter()
        .find_map(|key| map.get(*key).map(|value| (join(parent, key), value)))
}

/// Require an object.
pub(crate) fn expect_object<'a>(
    value: &'a Value,
    path: &str,
) -> Result<&'a Map<String, Value>, ConfigError> {
    value.as_object().ok_or_else(|| ConfigError::InvalidFieldType {
        path: display_path(path),
        expected: "an object",
    })
}

/// Require an array.
pub(crate) fn expect_array<'a>(
    value: &'a Value,
    path: &str,
    expected: &'static str,
) -> Result<&'a Vec<Value>, ConfigError> {
    value.as_array().ok_or_else(|| ConfigError::InvalidFieldType {
        path: path.to_string(),
        expected,
    })
}

/// Require a boolean.
pub(crate) fn expect_bool(value: &Value, path: &str) -> Result<bool, ConfigError> {
    value.as_bool().ok_or_else(|| ConfigError::InvalidFieldType {
        path: path.to_string(),
        expected: "a boolean",
    })
}

/// Require a string.
pub(crate) fn expect_str<'a>(value: &'a Value, path: &str) -> Result<&'a str, ConfigError> {
    value.as_str().ok_or_else(|| ConfigError::InvalidFieldType {
        path: path.to_string(),
        expected: "a string",
    })
}

/// Short description of a JSON value's type for diagnostics.
pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Emit a trace event for every key not in `known`.
pub(crate) fn trace_unknown_keys(map: &Map<String, Value>, parent: &str, known: &[&str]) {
    for key in map.keys().filter(|key| !known.contains(&key.as_str())) {
        tracing::trace!(field = %join(parent, key), "ignoring unknown configuration field");
    }
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        ROOT_PATH.to_string()
    } else {
        path.to_string()
    }
}
