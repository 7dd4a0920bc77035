//! Kind names for dynamic values crossing the configuration/plugin boundary.

use serde_json::Value;

/// Kind reported for a parameter that was not supplied at all.
pub const UNDEFINED: &str = "undefined";

/// Returns the kind name of a JSON value.
#[must_use]
pub const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Returns the kind name of an optional parameter (`undefined` when absent).
#[must_use]
pub const fn describe(value: Option<&Value>) -> &'static str {
    match value {
        Some(value) => value_kind(value),
        None => UNDEFINED,
    }
}
