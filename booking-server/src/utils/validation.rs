//! Request payload helpers
//!
//! Write endpoints receive `{ "data": { ... } }` and validate the inner object
//! key by key before anything is typed, so the raw map is kept as [`Payload`].

use serde_json::Value;
use shared::error::{AppError, AppResult};

pub type Payload = serde_json::Map<String, Value>;

/// Why a value could not be read as an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerError {
    NotANumber,
    NotAnInteger,
}

/// Reject any key outside `allowed`; the message lists every offending key.
pub fn reject_unknown_fields(payload: &Payload, allowed: &[&str]) -> AppResult<()> {
    let invalid: Vec<&str> = payload
        .keys()
        .map(String::as_str)
        .filter(|key| !allowed.contains(key))
        .collect();

    if invalid.is_empty() {
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "Invalid field(s): {}",
            invalid.join(", ")
        )))
    }
}

/// Absent, null and blank strings all count as missing.
pub fn is_missing(payload: &Payload, field: &str) -> bool {
    match payload.get(field) {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

/// Fails on the first missing field, in the order given.
pub fn require_fields(payload: &Payload, fields: &[&str]) -> AppResult<()> {
    match fields.iter().find(|field| is_missing(payload, field)) {
        Some(field) => Err(AppError::validation(format!("Field required: {field}"))),
        None => Ok(()),
    }
}

/// Trimmed, non-empty string value of `field`
pub fn text_field<'a>(payload: &'a Payload, field: &str) -> AppResult<&'a str> {
    payload
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::validation(format!("{field} must be text")))
}

/// Read a JSON number or a numeric string as an integer.
pub fn integer_value(value: &Value) -> Result<i64, IntegerError> {
    match value {
        Value::Number(n) => n.as_i64().ok_or(IntegerError::NotAnInteger),
        Value::String(s) => {
            let s = s.trim();
            match s.parse::<i64>() {
                Ok(v) => Ok(v),
                Err(_) if s.parse::<f64>().is_ok() => Err(IntegerError::NotAnInteger),
                Err(_) => Err(IntegerError::NotANumber),
            }
        }
        _ => Err(IntegerError::NotANumber),
    }
}

/// `Some` only for values in `1..=i32::MAX`
pub fn positive_i32(value: i64) -> Option<i32> {
    if value > 0 {
        i32::try_from(value).ok()
    } else {
        None
    }
}
