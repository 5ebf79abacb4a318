//! Shared handles to rendered input controls.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared handle to a rendered input control.
///
/// A binding acquires the handle once its control is rendered and hands it
/// to the form controller at registration time; the controller later reads
/// the control's current value through it when collecting a submit
/// snapshot.
#[derive(Debug, Clone, Default)]
pub struct ElementHandle {
    inner: Arc<Mutex<ElementState>>,
}

#[derive(Debug, Default)]
struct ElementState {
    value: String,
}

impl ElementHandle {
    /// Creates a handle to an empty control.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a handle to a control holding an initial value.
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        let handle = Self::new();
        handle.set_value(value);
        handle
    }

    /// Returns the control's current literal value.
    #[must_use]
    pub fn value(&self) -> String {
        self.state().value.clone()
    }

    /// Replaces the control's value, as user input would.
    pub fn set_value(&self, value: impl Into<String>) {
        self.state().value = value.into();
    }

    /// Returns whether the control currently holds a non-empty value.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        !self.state().value.is_empty()
    }

    /// Resolves a property path into the control.
    ///
    /// `"value"` resolves to the current value; unknown paths resolve to
    /// `None`.
    #[must_use]
    pub fn read_path(&self, path: &str) -> Option<String> {
        match path {
            "value" => Some(self.value()),
            _ => None,
        }
    }

    fn state(&self) -> MutexGuard<'_, ElementState> {
        // All access is single-threaded and cooperative; the lock exists
        // for sharing, so a poisoned state is still the current state.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
