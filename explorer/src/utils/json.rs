//! JSON utility functions

use serde_json::Value as JsonValue;

/// Pretty-print a string that may hold JSON; returns it unchanged if it does not parse
pub fn pretty_json_string(raw: &str) -> String {
    match serde_json::from_str::<JsonValue>(raw) {
        Ok(value) => pretty_json(&value),
        Err(_) => raw.to_string(),
    }
}

/// Two-space indented JSON
pub fn pretty_json(value: &JsonValue) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
