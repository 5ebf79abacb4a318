//! API client trait and HTTP implementation.

use std::future::Future;
use std::pin::Pin;

use crate::config::ApiConfig;
use crate::error::{ClientError, Result};

/// A boxed future for async client operations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Trait for API clients that dispatch JSON requests.
///
/// The submission flow only needs to fire a request and learn whether it
/// succeeded; no response body is consumed.
pub trait ApiClient: Send + Sync {
    /// Sends a JSON body with `POST` to a path below the client's base
    /// URL. Success is any non-error HTTP response.
    fn post_json<'a>(&'a self, path: &'a str, body: &'a serde_json::Value)
        -> BoxFuture<'a, Result<()>>;
}

/// `reqwest`-backed API client.
///
/// No timeout is applied beyond the HTTP library's own policy; a request
/// resolves or rejects according to the transport.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpApiClient {
    /// Creates a client for the configured endpoint.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            base_url: config.base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl ApiClient for HttpApiClient {
    fn post_json<'a>(
        &'a self,
        path: &'a str,
        body: &'a serde_json::Value,
    ) -> BoxFuture<'a, Result<()>> {
        let url = self.url(path);
        Box::pin(async move {
            let response = self.client.post(url).json(body).send().await?;
            let status = response.status();
            if status.is_client_error() || status.is_server_error() {
                return Err(ClientError::Status(status.as_u16()));
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = HttpApiClient::new(ApiConfig::new("http://localhost:3333"));
        assert_eq!(
            client.url("/password/reset"),
            "http://localhost:3333/password/reset"
        );

        let client = HttpApiClient::new(ApiConfig::new("http://localhost:3333/"));
        assert_eq!(
            client.url("password/reset"),
            "http://localhost:3333/password/reset"
        );
    }
}
