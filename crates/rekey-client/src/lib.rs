//! # rekey-client
//!
//! JSON API client used by the password-reset flow.
//!
//! This crate provides:
//! - The [`ApiClient`] trait the flow depends on
//! - An HTTP implementation backed by `reqwest`
//! - Endpoint configuration with an environment override
//!
//! ## Quick Start
//!
//! ```ignore
//! use rekey_client::{ApiClient, ApiConfig, HttpApiClient};
//!
//! let client = HttpApiClient::new(ApiConfig::from_env());
//! let body = serde_json::json!({
//!     "password": "abc123",
//!     "password_confirmation": "abc123",
//!     "token": "TOK1",
//! });
//! client.post_json("/password/reset", &body).await?;
//! ```

mod client;
mod config;
mod error;

pub use client::{ApiClient, BoxFuture, HttpApiClient};
pub use config::{ApiConfig, API_URL_ENV, DEFAULT_API_URL};
pub use error::{ClientError, Result};
