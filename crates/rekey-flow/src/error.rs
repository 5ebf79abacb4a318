//! Error types for the submission flow.

use rekey_client::ClientError;
use thiserror::Error;

/// Submission flow errors.
///
/// Every variant takes the same generic failure path in the UI; the split
/// exists for logging.
#[derive(Debug, Error)]
pub enum FlowError {
    /// The page URL carried no reset token.
    #[error("missing reset token")]
    MissingToken,

    /// The request body could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The API call was rejected.
    #[error("api error: {0}")]
    Api(#[from] ClientError),
}

/// Result type alias for flow operations.
pub type Result<T> = std::result::Result<T, FlowError>;
