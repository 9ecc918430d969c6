//! reqwest-backed transport

use async_trait::async_trait;
use reqwest::Url;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::transport::{ApiRequest, HttpMethod, RawResponse, Transport, TransportError};

/// Sends requests over HTTP with a pooled reqwest client
///
/// No authentication headers are sent and nothing is retried.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Builds the transport, checking the base URL up front
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Configuration` if the base URL does not parse
    /// or the HTTP client cannot be initialised.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Url::parse(&config.base_url).map_err(|e| {
            ClientError::Configuration(format!("Invalid base URL {:?}: {}", config.base_url, e))
        })?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            ClientError::Configuration(format!("Failed to initialize HTTP client: {}", e))
        })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the backend address requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        let url = format!("{}{}", self.base_url, request.path);
        debug!(request_id = %request.id, method = %request.method, %url, "HTTP request");

        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
        };
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| classify(&url, e))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| classify(&url, e))?;

        debug!(request_id = %request.id, status, bytes = body.len(), "HTTP response");
        Ok(RawResponse { status, body })
    }
}

fn classify(url: &str, err: reqwest::Error) -> TransportError {
    if err.is_builder() {
        TransportError::Request {
            message: err.to_string(),
        }
    } else {
        TransportError::NoResponse {
            url: url.to_string(),
            message: err.to_string(),
        }
    }
}
