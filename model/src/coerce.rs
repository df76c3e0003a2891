//! FILENAME: model/src/coerce.rs
//! PURPOSE: Scalar coercion between string and integer category identifiers.
//! CONTEXT: Category ids may arrive as JSON numbers or strings depending on
//! the producer. JSON object keys are always strings, so every map built from
//! ids goes through `to_str`; `to_int` restores the numeric form where a JSON
//! value (not a key) carries the id.

use serde_json::Value;

/// Converts a raw identifier to a JSON integer if it parses as one,
/// otherwise keeps it as a string.
/// "2011" -> 2011, "region" -> "region"
pub fn to_int(raw: &str) -> Value {
    match raw.parse::<i64>() {
        Ok(n) => Value::from(n),
        Err(_) => Value::String(raw.to_string()),
    }
}

/// Converts a JSON scalar to its canonical string form.
/// Strings pass through unchanged; numbers (and other scalars) use their
/// JSON rendering, so 2011 and "2011" coerce to the same map key.
pub fn to_str(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
