//! Response envelope classification
//!
//! The backend wraps payloads three different ways depending on the
//! endpoint:
//!
//! ```text
//! { "success": true, "message": "...", "data": { "customerListDTO": [...] } }   Wrapped
//! { "successMessage": "...", "policyDTO": { ... } }                              Messaged
//! { "policyListDTO": [...] }                                                     Bare
//! ```
//!
//! `ResponseEnvelope::classify` decides which shape a body has, in that
//! precedence order, so every caller deals with one payload contract.

use serde_json::{Map, Value};

/// Key of the boolean flag on a generic envelope
pub const SUCCESS_KEY: &str = "success";
/// Key of the nested payload on a generic envelope
pub const DATA_KEY: &str = "data";
/// Key of the optional note on a generic envelope
pub const MESSAGE_KEY: &str = "message";
/// Key of the human-readable success note on message envelopes
pub const SUCCESS_MESSAGE_KEY: &str = "successMessage";
/// Key of the human-readable failure note
pub const FAILURE_MESSAGE_KEY: &str = "failureMessage";

/// A classified response body
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseEnvelope {
    /// Generic `{ success, message?, data }` wrapper
    Wrapped {
        success: bool,
        message: Option<String>,
        data: Value,
    },
    /// Object carrying a `successMessage` next to its payload fields
    Messaged(Map<String, Value>),
    /// Anything else; the body is the payload
    Bare(Value),
}

impl ResponseEnvelope {
    /// Classifies a body. Never fails.
    pub fn classify(body: Value) -> Self {
        match body {
            Value::Object(mut map) => {
                let wrapped = matches!(map.get(SUCCESS_KEY), Some(Value::Bool(_)))
                    && map.contains_key(DATA_KEY);
                if wrapped {
                    let success = map.get(SUCCESS_KEY).and_then(Value::as_bool).unwrap_or(false);
                    let message = non_empty_str(map.get(MESSAGE_KEY)).map(str::to_string);
                    let data = map.remove(DATA_KEY).unwrap_or(Value::Null);
                    ResponseEnvelope::Wrapped { success, message, data }
                } else if map.contains_key(SUCCESS_MESSAGE_KEY) {
                    ResponseEnvelope::Messaged(map)
                } else {
                    ResponseEnvelope::Bare(Value::Object(map))
                }
            }
            other => ResponseEnvelope::Bare(other),
        }
    }

    /// Returns the payload the caller should read its field from
    pub fn into_payload(self) -> Value {
        match self {
            ResponseEnvelope::Wrapped { data, .. } => data,
            ResponseEnvelope::Messaged(map) => Value::Object(map),
            ResponseEnvelope::Bare(body) => body,
        }
    }

    /// Returns the server's success note, if the envelope carries one
    pub fn success_message(&self) -> Option<&str> {
        match self {
            ResponseEnvelope::Wrapped { success: true, message, .. } => message.as_deref(),
            ResponseEnvelope::Messaged(map) => non_empty_str(map.get(SUCCESS_MESSAGE_KEY)),
            _ => None,
        }
    }

    /// Returns the business failure reported under a success status
    ///
    /// A `failureMessage` on the payload wins; a `Wrapped` envelope with
    /// `success == false` reports its `message` or a generic note.
    pub fn rejection(&self) -> Option<String> {
        match self {
            ResponseEnvelope::Wrapped { success, message, data } => {
                if let Some(msg) = failure_message_of(data) {
                    return Some(msg.to_string());
                }
                if *success {
                    None
                } else {
                    Some(
                        message
                            .clone()
                            .unwrap_or_else(|| "Request was not successful.".to_string()),
                    )
                }
            }
            ResponseEnvelope::Messaged(map) => {
                non_empty_str(map.get(FAILURE_MESSAGE_KEY)).map(str::to_string)
            }
            ResponseEnvelope::Bare(body) => failure_message_of(body).map(str::to_string),
        }
    }
}

/// Collapses any backend body to its payload
///
/// Returns `None` when there is no body (absent or JSON `null`).
pub fn normalize_response(body: Option<Value>) -> Option<Value> {
    match body {
        None | Some(Value::Null) => None,
        Some(body) => Some(ResponseEnvelope::classify(body).into_payload()),
    }
}

/// Decodes raw response text the way the backend's clients expect
///
/// Empty text has no body; JSON text is parsed; anything else is kept as
/// a JSON string so error bodies like "Internal Server Error" survive.
pub fn decode_body(text: &str) -> Option<Value> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Null) => None,
        Ok(value) => Some(value),
        Err(_) => Some(Value::String(text.to_string())),
    }
}

fn failure_message_of(value: &Value) -> Option<&str> {
    non_empty_str(value.get(FAILURE_MESSAGE_KEY))
}

pub(crate) fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.trim().is_empty())
}
