//! Console configuration

use std::time::Duration;

use serde::Deserialize;

use infra_api::{ClientConfig, DEFAULT_BASE_URL};

/// Console configuration, read from `SALES_*` environment variables
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Backend address
    pub api_base_url: String,
    /// Per-request timeout; unset means no timeout
    pub request_timeout_secs: Option<u64>,
    /// Log level: trace, debug, info, warn, error
    pub log_level: String,
    /// How long a form confirmation stays up before leaving the form
    pub confirmation_delay_ms: u64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: None,
            log_level: "info".to_string(),
            confirmation_delay_ms: 1500,
        }
    }
}

impl ConsoleConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("SALES"))
            .build()?
            .try_deserialize()
    }

    /// Settings for the API client
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(self.api_base_url.clone());
        match self.request_timeout_secs {
            Some(secs) => config.timeout(Duration::from_secs(secs)),
            None => config,
        }
    }

    pub fn confirmation_delay(&self) -> Duration {
        Duration::from_millis(self.confirmation_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConsoleConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.confirmation_delay(), Duration::from_millis(1500));
        assert_eq!(config.client_config().timeout, None);
    }

    #[test]
    fn test_timeout_reaches_client_config() {
        let config = ConsoleConfig {
            request_timeout_secs: Some(5),
            ..Default::default()
        };
        assert_eq!(config.client_config().timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_partial_source_keeps_defaults() {
        let config: ConsoleConfig = config::Config::builder()
            .set_override("api_base_url", "http://sales.internal:9000")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.api_base_url, "http://sales.internal:9000");
        assert_eq!(config.confirmation_delay_ms, 1500);
    }
}
