//! Client configuration

use std::time::Duration;

/// Backend address used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Connection settings for the sales API client
///
/// # Example
///
/// ```rust
/// use infra_api::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new("http://backend:8080/")
///     .timeout(Duration::from_secs(10));
/// assert_eq!(config.base_url, "http://backend:8080");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme, host and port; endpoint paths are appended to it
    pub base_url: String,
    /// Per-request timeout; `None` leaves the HTTP client default
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Creates a configuration for the given backend address
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    /// Sets a per-request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
