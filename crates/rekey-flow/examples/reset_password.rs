//! Password-reset flow demo
//!
//! Drives one end-to-end submission against a real endpoint.
//! Run with: cargo run --example reset_password
//!
//! The API base URL comes from `REKEY_API_URL` (default
//! `http://localhost:3333`); the reset token comes from `REKEY_TOKEN`.

use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use rekey_client::{ApiConfig, HttpApiClient};
use rekey_flow::{
    History, Location, ResetPasswordFlow, ResetPasswordForm, SubmitOutcome, ToastStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let client = Arc::new(HttpApiClient::new(ApiConfig::from_env()));
    let toasts = Arc::new(ToastStore::new());
    let history = Arc::new(History::new());

    let mut form = ResetPasswordForm::mount();
    if let Some(element) = form.password.element() {
        element.set_value("correct horse battery staple");
    }
    if let Some(element) = form.password_confirmation.element() {
        element.set_value("correct horse battery staple");
    }

    let token = std::env::var("REKEY_TOKEN").unwrap_or_default();
    let location = Location::new("/reset-password").search(format!("?token={token}"));

    let mut flow = ResetPasswordFlow::new(client, toasts.clone(), history.clone());
    let outcome = flow.handle_submit(&mut form.controller, &location).await;

    match outcome {
        SubmitOutcome::Completed => {
            info!(route = ?history.current(), "reset succeeded, redirected");
        }
        SubmitOutcome::Invalid => {
            for (field, message) in form.controller.errors().iter() {
                info!(field, message, "field error");
            }
        }
        SubmitOutcome::Failed => {
            for message in toasts.messages() {
                info!(title = %message.toast.title, description = %message.toast.description, "toast");
            }
        }
        SubmitOutcome::Ignored => {}
    }

    Ok(())
}
