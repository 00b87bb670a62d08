//! Coercion of loosely typed variables

use crate::error::VariableError;
use serde_json::Value;

/// Coerce a number or decimal string into an integer `>= min`
pub(crate) fn integer(name: &'static str, value: &Value, min: u64) -> Result<u64, VariableError> {
    let parsed = match value {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse::<u64>().ok(),
        _ => None,
    };
    match parsed {
        Some(n) if n >= min => Ok(n),
        _ => Err(VariableError::new(name, format!(">= {min}"), value)),
    }
}

pub(crate) fn boolean(name: &'static str, value: &Value) -> Result<bool, VariableError> {
    match value {
        Value::Bool(flag) => Ok(*flag),
        Value::String(text) if text == "true" => Ok(true),
        Value::String(text) if text == "false" => Ok(false),
        _ => Err(VariableError::new(name, "to be a boolean", value)),
    }
}

pub(crate) fn string(name: &'static str, value: &Value) -> Result<String, VariableError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| VariableError::new(name, "to be a string", value))
}
