//! # rekey-flow
//!
//! Submission orchestration for the password-reset form.
//!
//! This crate provides:
//! - The [`ResetPasswordFlow`] state machine coordinating validation,
//!   dispatch and UI side effects
//! - The mounted [`ResetPasswordForm`] (controller plus field bindings)
//! - The page [`Location`] and reset-token extraction
//! - The [`Notifier`] and [`Navigator`] surfaces with in-memory
//!   implementations ([`ToastStore`], [`History`])
//!
//! One submission attempt clears prior field errors, validates the value
//! snapshot with every failure collected, and either projects the
//! failures back onto the fields or dispatches the credentials to
//! `POST /password/reset` with the token taken from the page URL. Success
//! navigates to the root route; any other failure surfaces one
//! fixed-content error toast and leaves the form re-editable.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use rekey_client::{ApiConfig, HttpApiClient};
//! use rekey_flow::{
//!     History, Location, ResetPasswordFlow, ResetPasswordForm, ToastStore,
//! };
//!
//! let client = Arc::new(HttpApiClient::new(ApiConfig::from_env()));
//! let toasts = Arc::new(ToastStore::new());
//! let history = Arc::new(History::new());
//!
//! let mut form = ResetPasswordForm::mount();
//! let location = Location::new("/reset-password").search("?token=TOK1");
//!
//! let mut flow = ResetPasswordFlow::new(client, toasts, history);
//! let outcome = flow.handle_submit(&mut form.controller, &location).await;
//! ```

mod error;
mod form;
mod location;
mod navigate;
mod notify;
mod submit;

pub use error::{FlowError, Result};
pub use form::{ResetPasswordForm, PASSWORD_CONFIRMATION_FIELD, PASSWORD_FIELD};
pub use location::Location;
pub use navigate::{History, Navigator};
pub use notify::{Notifier, Severity, Toast, ToastMessage, ToastStore};
pub use submit::{
    reset_password_schema, ResetPasswordFlow, ResetPasswordRequest, SubmitOutcome, SubmitState,
    HOME_ROUTE, RESET_ENDPOINT,
};
