//! Failure normalization
//!
//! Any failed call (HTTP error status, no response, request that could
//! not be built) is reduced to one human-readable line.

use serde_json::Value;

use crate::envelope::{non_empty_str, FAILURE_MESSAGE_KEY, MESSAGE_KEY};

/// Shown when nothing more specific is known
pub const FALLBACK_MESSAGE: &str = "An unexpected error occurred.";

/// Transport note when the server never answered
pub const NO_RESPONSE_MESSAGE: &str =
    "Network Error: No response from server. Check if backend is running.";

/// Everything known about a failed call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestFailure {
    /// HTTP status, when a response arrived
    pub status: Option<u16>,
    /// Decoded response body, when a response arrived with one
    pub body: Option<Value>,
    /// Transport-level description of the failure
    pub transport_message: Option<String>,
}

impl RequestFailure {
    /// A response arrived with an error status
    pub fn from_response(status: u16, body: Option<Value>) -> Self {
        Self {
            status: Some(status),
            body,
            transport_message: Some(format!("Request failed with status code {}", status)),
        }
    }

    /// The request went out but nothing came back
    pub fn no_response() -> Self {
        Self {
            transport_message: Some(NO_RESPONSE_MESSAGE.to_string()),
            ..Default::default()
        }
    }

    /// The request could not be issued at all
    pub fn request_error(detail: impl std::fmt::Display) -> Self {
        Self {
            transport_message: Some(format!("Request Error: {}", detail)),
            ..Default::default()
        }
    }

    /// Reduces the failure to a single message
    ///
    /// Precedence: body `failureMessage`, body `message`, string body,
    /// transport message, fallback. Blank strings are skipped, so the
    /// result is never empty.
    pub fn message(&self) -> String {
        if let Some(body) = &self.body {
            if let Some(msg) = non_empty_str(body.get(FAILURE_MESSAGE_KEY)) {
                return msg.to_string();
            }
            if let Some(msg) = non_empty_str(body.get(MESSAGE_KEY)) {
                return msg.to_string();
            }
            if let Some(text) = non_empty_str(Some(body)) {
                return text.to_string();
            }
        }
        self.transport_message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(FALLBACK_MESSAGE)
            .to_string()
    }
}
