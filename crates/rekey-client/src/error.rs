//! Error types for the API client.

use thiserror::Error;

/// API client errors.
///
/// The password-reset flow treats every variant uniformly; the split
/// exists so logs can tell a refused request from an unreachable host.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connection, TLS, serialization).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with an error status.
    #[error("unexpected status: {0}")]
    Status(u16),
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
