//! Transport port
//!
//! The client speaks to the backend through the `Transport` trait so the
//! HTTP adapter can be swapped for a recording mock in tests.
//!
//! ```text
//! SalesClient ──ApiRequest──▶ dyn Transport ──▶ HttpTransport (reqwest)
//!             ◀─RawResponse──               └─▶ MockTransport (tests)
//! ```

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

use crate::failure::RequestFailure;

/// HTTP methods used by the backend API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        };
        f.write_str(name)
    }
}

/// One outgoing request
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// Correlates log lines for this call; not sent to the server
    pub id: Uuid,
    pub method: HttpMethod,
    /// Absolute path, e.g. `/api/customers/5`
    pub path: String,
    /// JSON body for POST and PUT
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Creates a request with a fresh correlation id
    pub fn new(method: HttpMethod, path: impl Into<String>, body: Option<Value>) -> Self {
        Self {
            id: Uuid::now_v7(),
            method,
            path: path.into(),
            body,
        }
    }
}

/// A response as received, whatever its status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    /// Returns true for 2xx statuses
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failures below the HTTP layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request was sent (or attempted) but no response arrived
    #[error("No response from {url}: {message}")]
    NoResponse { url: String, message: String },

    /// The request could not be built
    #[error("Request could not be built: {message}")]
    Request { message: String },
}

impl TransportError {
    /// Converts to the failure shape the error normalizer reads
    pub fn to_failure(&self) -> RequestFailure {
        match self {
            TransportError::NoResponse { .. } => RequestFailure::no_response(),
            TransportError::Request { message } => RequestFailure::request_error(message),
        }
    }
}

/// A way of delivering requests to the backend
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Sends one request. Error statuses are returned as responses; only
    /// failures without a response are errors.
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::NO_RESPONSE_MESSAGE;

    #[test]
    fn test_success_range() {
        assert!(RawResponse { status: 201, body: String::new() }.is_success());
        assert!(!RawResponse { status: 302, body: String::new() }.is_success());
        assert!(!RawResponse { status: 500, body: String::new() }.is_success());
    }

    #[test]
    fn test_transport_error_to_failure() {
        let err = TransportError::NoResponse {
            url: "http://localhost:8080/api/customers".into(),
            message: "connection refused".into(),
        };
        assert_eq!(err.to_failure().message(), NO_RESPONSE_MESSAGE);

        let err = TransportError::Request { message: "bad url".into() };
        assert_eq!(err.to_failure().message(), "Request Error: bad url");
    }

    #[test]
    fn test_request_ids_are_unique() {
        let a = ApiRequest::new(HttpMethod::Get, "/api/cities", None);
        let b = ApiRequest::new(HttpMethod::Get, "/api/cities", None);
        assert_ne!(a.id, b.id);
    }
}
