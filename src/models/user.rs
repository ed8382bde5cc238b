//! User records and decoding of user list payloads.
//!
//! Decoding is the only place malformed input is handled. Once a
//! `Vec<User>` exists, rendering cannot fail.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors while decoding a user list payload.
#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid user record at index {index}: {source}")]
    InvalidRecord {
        index: usize,
        source: serde_json::Error,
    },

    #[error("unexpected payload shape: {0}")]
    UnexpectedShape(String),

    #[error("users service reported failure: {0}")]
    Rejected(String),
}

/// A single user as delivered by the users service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct User {
    /// Unique identifier. Uniqueness is assumed, not enforced.
    pub id: u64,
    /// Display name, rendered as the row label. Missing or `null` decodes
    /// to an empty string.
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schemars(with = "Option<String>")]
    pub username: String,
    /// Contact address. Carried, never rendered.
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schemars(with = "Option<String>")]
    pub email: String,
    /// Whether the account is active. Carried, never rendered.
    #[serde(default = "default_active")]
    pub active: bool,
}

impl User {
    pub fn new(id: u64, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
            active: true,
        }
    }
}

fn default_active() -> bool {
    true
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a user list from JSON text.
///
/// Accepts `null`, a bare array, `{"users": [...]}`, and the service
/// envelope `{"status": "success", "data": {"users": [...]}}`.
pub fn parse_users(input: &str) -> Result<Vec<User>, PayloadError> {
    let value: Value = serde_json::from_str(input)?;
    users_from_value(value)
}

/// Decode a user list from an already-parsed JSON value.
pub fn users_from_value(value: Value) -> Result<Vec<User>, PayloadError> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(records) => decode_records(records),
        Value::Object(mut map) => {
            if let Some(status) = map.get("status").and_then(Value::as_str) {
                if status != "success" {
                    let message = map
                        .get("message")
                        .and_then(Value::as_str)
                        .unwrap_or(status)
                        .to_string();
                    return Err(PayloadError::Rejected(message));
                }
                return match map.remove("data") {
                    Some(data) => users_from_value(data),
                    None => Ok(Vec::new()),
                };
            }
            match map.remove("users") {
                Some(users) => users_from_value(users),
                None => Err(PayloadError::UnexpectedShape(
                    "object has neither a \"users\" nor a \"status\" field".to_string(),
                )),
            }
        }
        other => Err(PayloadError::UnexpectedShape(format!(
            "expected an array or object, got {}",
            json_kind(&other)
        ))),
    }
}

fn decode_records(records: Vec<Value>) -> Result<Vec<User>, PayloadError> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value(record)
                .map_err(|source| PayloadError::InvalidRecord { index, source })
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
