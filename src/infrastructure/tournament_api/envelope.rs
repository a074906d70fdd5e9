//! Response envelope normalization
//!
//! The service answers list endpoints either with a bare array or with
//! `{ "data": [...] }`, and single resources either bare or wrapped the same
//! way. Everything past this module sees plain typed values.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::DomainError;

/// Extract the list of items from a list response
pub fn unwrap_list(body: Value) -> Result<Vec<Value>, DomainError> {
    match body {
        Value::Array(items) => Ok(items),
        Value::Null => Ok(Vec::new()),
        Value::Object(mut fields) => match fields.remove("data") {
            Some(Value::Array(items)) => Ok(items),
            Some(Value::Null) | None => Ok(Vec::new()),
            Some(other) => Err(DomainError::provider(
                "tournament-api",
                format!("Expected 'data' to be a list, got {}", kind(&other)),
            )),
        },
        other => Err(DomainError::provider(
            "tournament-api",
            format!("Expected a list response, got {}", kind(&other)),
        )),
    }
}

/// Extract a single resource from a possibly wrapped response
pub fn unwrap_item(body: Value) -> Value {
    match body {
        Value::Object(mut fields) if matches!(fields.get("data"), Some(Value::Object(_))) => {
            fields.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Decode every item of a list response into `T`.
///
/// One malformed item fails the whole list, naming its position.
pub fn decode_list<T: DeserializeOwned>(body: Value) -> Result<Vec<T>, DomainError> {
    unwrap_list(body)?
        .into_iter()
        .enumerate()
        .map(|(idx, item)| {
            serde_json::from_value(item).map_err(|e| {
                DomainError::provider(
                    "tournament-api",
                    format!("Malformed item at index {}: {}", idx, e),
                )
            })
        })
        .collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
