//! Submission orchestration for the password-reset form.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use rekey_client::ApiClient;
use rekey_forms::{
    FormController, FormValues, MatchesFieldRule, RequiredRule, Schema, WhenFilledRule,
};

use crate::error::{FlowError, Result};
use crate::form::{PASSWORD_CONFIRMATION_FIELD, PASSWORD_FIELD};
use crate::location::Location;
use crate::navigate::Navigator;
use crate::notify::{Notifier, Toast};

/// Endpoint receiving the reset credentials.
pub const RESET_ENDPOINT: &str = "/password/reset";

/// Route pushed after a successful reset.
pub const HOME_ROUTE: &str = "/";

const PASSWORD_REQUIRED: &str = "Senha obrigatória";
const CONFIRMATION_MISMATCH: &str = "Confirmação de senha incorreta";
const FAILURE_TITLE: &str = "Erro ao resetar senha";
const FAILURE_DESCRIPTION: &str = "Ocorreu um erro ao resetar sua senha, tente novamente";

/// Body dispatched to the reset endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    /// The new password.
    pub password: String,
    /// Confirmation of the new password.
    pub password_confirmation: String,
    /// Token authorizing the reset, carried in the page URL.
    pub token: String,
}

/// Phase of a submission attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitState {
    /// Ready for a submission attempt.
    #[default]
    Idle,
    /// Schema validation in progress.
    Validating,
    /// Network call in flight.
    Submitting,
    /// Reset succeeded and the user was redirected.
    Navigated,
}

/// Branch a submission attempt took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Trigger arrived while a prior attempt was still in progress.
    Ignored,
    /// Validation failed; field errors were set, nothing was dispatched.
    Invalid,
    /// Token or network failure; a toast was emitted.
    Failed,
    /// The reset succeeded and navigation happened.
    Completed,
}

/// Coordinates validation, dispatch and the resulting UI side effects for
/// the password-reset form.
pub struct ResetPasswordFlow {
    client: Arc<dyn ApiClient>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    state: SubmitState,
}

impl std::fmt::Debug for ResetPasswordFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResetPasswordFlow")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl ResetPasswordFlow {
    /// Creates a flow over the given collaborators.
    pub fn new(
        client: Arc<dyn ApiClient>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            client,
            notifier,
            navigator,
            state: SubmitState::Idle,
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn state(&self) -> SubmitState {
        self.state
    }

    /// Handles one submit trigger.
    ///
    /// Field errors are cleared up front on every attempt. A validation
    /// failure replaces them wholesale and stops before any network work.
    /// A missing token or a rejected call emits one fixed-content toast
    /// and sets no field errors; the two are not distinguished in the UI.
    /// Triggers arriving while a prior attempt is still in progress are
    /// ignored.
    pub async fn handle_submit(
        &mut self,
        controller: &mut FormController,
        location: &Location,
    ) -> SubmitOutcome {
        if self.state != SubmitState::Idle {
            debug!(state = ?self.state, "submit trigger ignored");
            return SubmitOutcome::Ignored;
        }

        self.state = SubmitState::Validating;
        controller.clear_errors();

        let values = controller.values();
        if let Err(failures) = reset_password_schema().validate(&values, true) {
            debug!(failures = failures.len(), "validation failed");
            controller.set_errors(failures.into_field_errors());
            self.state = SubmitState::Idle;
            return SubmitOutcome::Invalid;
        }

        self.state = SubmitState::Submitting;
        match self.dispatch(&values, location).await {
            Ok(()) => {
                info!(route = HOME_ROUTE, "password reset succeeded");
                self.navigator.push(HOME_ROUTE);
                self.state = SubmitState::Navigated;
                SubmitOutcome::Completed
            }
            Err(error) => {
                warn!(%error, "password reset failed");
                self.notifier
                    .notify(Toast::error(FAILURE_TITLE, FAILURE_DESCRIPTION));
                self.state = SubmitState::Idle;
                SubmitOutcome::Failed
            }
        }
    }

    async fn dispatch(&self, values: &FormValues, location: &Location) -> Result<()> {
        let token = location.reset_token().ok_or(FlowError::MissingToken)?;
        let request = ResetPasswordRequest {
            password: values.get_or_empty(PASSWORD_FIELD).to_string(),
            password_confirmation: values.get_or_empty(PASSWORD_CONFIRMATION_FIELD).to_string(),
            token,
        };
        let body = serde_json::to_value(&request)?;
        self.client.post_json(RESET_ENDPOINT, &body).await?;
        Ok(())
    }
}

/// Builds the validation schema for the reset form.
///
/// The confirmation is constrained only while a password is present; its
/// plain required rule is intentionally absent.
#[must_use]
pub fn reset_password_schema() -> Schema {
    Schema::new()
        .rule(RequiredRule::new(PASSWORD_FIELD).message(PASSWORD_REQUIRED))
        .rule(WhenFilledRule::new(
            PASSWORD_FIELD,
            MatchesFieldRule::new(PASSWORD_CONFIRMATION_FIELD, PASSWORD_FIELD)
                .message(CONFIRMATION_MISMATCH),
        ))
}
