//! # Boolean Coercion
//!
//! The single conversion policy for boolean-like input:
//!
//! 1. a JSON boolean is returned unchanged;
//! 2. a JSON string is `true` only when it is exactly `"true"`; every other
//!    string, including `"TRUE"`, `"1"` and `""`, is `false`;
//! 3. numbers, null, arrays and objects are rejected.
//!
//! Truthiness is never consulted, so `"false"` can never become `true`.

use super::errors::CoercionError;
use serde_json::Value;

/// The only string that converts to `true`.
pub const TRUE_LITERAL: &str = "true";

/// Convert a raw JSON value into a canonical boolean.
pub fn coerce_bool(value: &Value) -> Result<bool, CoercionError> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::String(s) => Ok(s == TRUE_LITERAL),
        other => Err(CoercionError::TypeMismatch {
            found: json_type_name(other),
        }),
    }
}

/// Name of a JSON value's type, for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
