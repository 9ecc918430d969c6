//! Sales API Client
//!
//! This crate talks to the insurance sales backend over REST and turns its
//! loosely shaped replies into typed records or a single displayable error.
//!
//! # Architecture
//!
//! The client is written against a `Transport` port. `HttpTransport`
//! implements it with reqwest; tests use the recording `MockTransport`
//! (feature `mock`).
//!
//! # Response Normalization
//!
//! The backend answers in one of three shapes:
//! - **Wrapped**: `{ "success": bool, "message": ..., "data": ... }`
//! - **Messaged**: `{ "successMessage": ..., <entityField>: ... }`
//! - **Bare**: the payload object itself
//!
//! Every endpoint accepts all three. The endpoint table decides which field
//! the record lives under and what a missing field means.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_api::{ClientConfig, SalesClient};
//!
//! let client = SalesClient::from_config(&ClientConfig::new("http://localhost:8080"))?;
//! let cities = client.list_cities().await?;
//! ```

pub mod config;
pub mod error;
pub mod envelope;
pub mod failure;
pub mod transport;
pub mod http;
pub mod endpoints;
pub mod client;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ClientError, ClientResult};
pub use envelope::{decode_body, normalize_response, ResponseEnvelope};
pub use failure::{RequestFailure, FALLBACK_MESSAGE, NO_RESPONSE_MESSAGE};
pub use transport::{ApiRequest, HttpMethod, RawResponse, Transport, TransportError};
pub use http::HttpTransport;
pub use endpoints::{Cardinality, Endpoint};
pub use client::{Created, SalesClient};

#[cfg(any(test, feature = "mock"))]
pub use mock::{MockReply, MockTransport};
