//! API endpoint configuration.

use std::env;

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "REKEY_API_URL";

/// Default API base URL used when the environment does not override it.
pub const DEFAULT_API_URL: &str = "http://localhost:3333";

/// Configuration for the HTTP API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL all request paths are resolved against.
    pub base_url: String,
}

impl ApiConfig {
    /// Creates a config with an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Reads the base URL from [`API_URL_ENV`], falling back to
    /// [`DEFAULT_API_URL`].
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self { base_url }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
