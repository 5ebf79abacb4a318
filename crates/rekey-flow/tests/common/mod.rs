#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rekey_client::{ApiClient, BoxFuture, ClientError};
use rekey_flow::{History, ResetPasswordFlow, ResetPasswordForm, ToastStore};

/// API client double recording calls and failing on demand.
#[derive(Debug, Default)]
pub struct RecordingClient {
    fail: AtomicBool,
    calls: Mutex<Vec<(String, serde_json::Value)>>,
}

impl RecordingClient {
    pub fn set_failing(&self, failing: bool) {
        self.fail.store(failing, Ordering::Relaxed);
    }

    pub fn calls(&self) -> Vec<(String, serde_json::Value)> {
        lock(&self.calls).clone()
    }
}

impl ApiClient for RecordingClient {
    fn post_json<'a>(
        &'a self,
        path: &'a str,
        body: &'a serde_json::Value,
    ) -> BoxFuture<'a, rekey_client::Result<()>> {
        Box::pin(async move {
            lock(&self.calls).push((path.to_string(), body.clone()));
            if self.fail.load(Ordering::Relaxed) {
                Err(ClientError::Status(500))
            } else {
                Ok(())
            }
        })
    }
}

/// The flow wired to recording collaborators.
pub struct Harness {
    pub client: Arc<RecordingClient>,
    pub toasts: Arc<ToastStore>,
    pub history: Arc<History>,
    pub flow: ResetPasswordFlow,
}

impl Harness {
    pub fn new() -> Self {
        let client = Arc::new(RecordingClient::default());
        let toasts = Arc::new(ToastStore::new());
        let history = Arc::new(History::new());
        let flow = ResetPasswordFlow::new(client.clone(), toasts.clone(), history.clone());
        Self {
            client,
            toasts,
            history,
            flow,
        }
    }

    pub fn failing() -> Self {
        let harness = Self::new();
        harness.client.set_failing(true);
        harness
    }
}

/// Mounts the form and types both password values.
pub fn filled_form(password: &str, confirmation: &str) -> ResetPasswordForm {
    let form = ResetPasswordForm::mount();
    if let Some(element) = form.password.element() {
        element.set_value(password);
    }
    if let Some(element) = form.password_confirmation.element() {
        element.set_value(confirmation);
    }
    form
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
