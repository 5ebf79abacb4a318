//! Notification surface: toast messages and the store displaying them.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Neutral information.
    Info,
    /// A completed action.
    Success,
    /// A failed action.
    Error,
}

/// A single notification message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Severity, driving the visual variant.
    pub severity: Severity,
    /// Short title.
    pub title: String,
    /// Longer description shown under the title.
    pub description: String,
}

impl Toast {
    /// Creates a toast.
    pub fn new(
        severity: Severity,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Creates an info toast.
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Severity::Info, title, description)
    }

    /// Creates a success toast.
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Severity::Success, title, description)
    }

    /// Creates an error toast.
    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Severity::Error, title, description)
    }
}

/// Trait for notification surfaces consumed by the submission flow.
pub trait Notifier: Send + Sync {
    /// Emits one notification.
    fn notify(&self, toast: Toast);
}

/// A toast held by a store, stamped with the id that removes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastMessage {
    /// Removal id.
    pub id: u64,
    /// The displayed toast.
    pub toast: Toast,
}

/// In-memory toast store with id-based removal.
#[derive(Debug, Default)]
pub struct ToastStore {
    next_id: AtomicU64,
    messages: Mutex<Vec<ToastMessage>>,
}

impl ToastStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a toast and returns the id it can be removed with.
    pub fn add_toast(&self, toast: Toast) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.lock().push(ToastMessage { id, toast });
        id
    }

    /// Removes a toast by id.
    pub fn remove_toast(&self, id: u64) {
        self.lock().retain(|message| message.id != id);
    }

    /// Returns the currently displayed messages, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<ToastMessage> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ToastMessage>> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Notifier for ToastStore {
    fn notify(&self, toast: Toast) {
        self.add_toast(toast);
    }
}
