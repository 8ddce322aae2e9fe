//! Client configuration loaded from environment variables.

use std::env;
use std::time::Duration;
use storefront_rpc::{RpcClient, RpcError};

/// Endpoint used when `API_URL` is unset
pub const DEFAULT_API_URL: &str = "http://localhost:8000/";

/// Request timeout used when `API_TIMEOUT_SECS` is unset or invalid
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// RPC endpoint configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every operation is POSTed to
    pub api_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Missing or unparseable values fall back to their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            api_url: lookup("API_URL")
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            timeout_secs: lookup("API_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Per-request timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Build the HTTP transport for this configuration
    ///
    /// # Errors
    ///
    /// Returns `RpcError::RequestFailed` if the HTTP client cannot be built.
    pub fn rpc_client(&self) -> Result<RpcClient, RpcError> {
        RpcClient::with_timeout(self.api_url.clone(), self.timeout())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(ClientConfig::from_lookup(lookup(&[])), ClientConfig::default());
    }

    #[test]
    fn test_values_from_environment() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("API_URL", "https://shop.example.com/api"),
            ("API_TIMEOUT_SECS", "5"),
        ]));

        assert_eq!(config.api_url, "https://shop.example.com/api");
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = ClientConfig::from_lookup(lookup(&[("API_URL", "  "), ("API_TIMEOUT_SECS", "soon")]));

        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_builds_rpc_client() {
        let client = ClientConfig::default().rpc_client().unwrap();
        assert_eq!(client.endpoint(), DEFAULT_API_URL);
    }
}
