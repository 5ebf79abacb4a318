//! Navigation surface.

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Trait for navigation surfaces consumed by the submission flow.
pub trait Navigator: Send + Sync {
    /// Pushes a new location.
    fn push(&self, path: &str);
}

/// In-memory navigation history.
#[derive(Debug, Default)]
pub struct History {
    entries: Mutex<Vec<String>>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the visited locations, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Returns the current location, if any navigation happened.
    #[must_use]
    pub fn current(&self) -> Option<String> {
        self.lock().last().cloned()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Navigator for History {
    fn push(&self, path: &str) {
        self.lock().push(path.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_current() {
        let history = History::new();
        assert_eq!(history.current(), None);

        history.push("/reset-password");
        history.push("/");
        assert_eq!(history.current(), Some("/".to_string()));
        assert_eq!(history.entries(), ["/reset-password", "/"]);
    }
}
