//! Response type definitions
//!
//! Defines the session envelope returned by the initiation endpoint and its
//! validation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Session initiation response envelope
///
/// Only `success` and `token` are read; other fields are ignored. `success`
/// is kept as raw JSON because the service is only required to send a truthy
/// value, not a boolean.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResponse {
    /// Whether the service accepted the request
    #[serde(default)]
    pub success: Value,

    /// Session token, present on success
    #[serde(default)]
    pub token: Option<String>,
}

/// Truthiness of a JSON value
///
/// `false`, `null`, any zero number and `""` are falsy. Everything else,
/// including empty arrays and objects, is truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl SessionResponse {
    /// Interpret an already parsed JSON body as an envelope
    ///
    /// A value that does not have the envelope's shape (not an object, or
    /// `token` present but not a string) is an invalid response.
    pub fn from_value(value: Value) -> crate::Result<Self> {
        serde_json::from_value(value).map_err(|e| {
            crate::Error::invalid_response(format!("Unexpected response shape: {}", e))
        })
    }

    /// Whether `success` is truthy
    pub fn succeeded(&self) -> bool {
        is_truthy(&self.success)
    }

    /// Extract the token, rejecting unusable envelopes
    pub fn into_token(self) -> crate::Result<String> {
        let succeeded = self.succeeded();
        match self.token {
            Some(token) if succeeded && !token.is_empty() => Ok(token),
            _ => Err(crate::Error::invalid_response(
                "Missing success or token fields.",
            )),
        }
    }
}
