//! Error types for forms.

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

/// Form-specific errors.
#[derive(Debug, Error)]
pub enum FormError {
    /// Validation failed with structured failures.
    #[error("validation failed: {0}")]
    Validation(ValidationFailures),

    /// Missing required field.
    #[error("missing required field: {0}")]
    MissingField(String),
}

/// A single violated constraint, reported against one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    /// Field the failure is reported against.
    pub field: String,
    /// Human-readable message.
    pub message: String,
}

impl ValidationFailure {
    /// Creates a new failure.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Ordered list of validation failures, one entry per violated rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationFailures {
    failures: Vec<ValidationFailure>,
}

impl ValidationFailures {
    /// Creates an empty failure list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a failure.
    pub fn push(&mut self, failure: ValidationFailure) {
        self.failures.push(failure);
    }

    /// Returns whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns the number of failures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Returns an iterator over the failures.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationFailure> {
        self.failures.iter()
    }

    /// Projects the failure list into a name-keyed error map.
    ///
    /// A later failure for a field overwrites an earlier one.
    #[must_use]
    pub fn into_field_errors(self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for failure in self.failures {
            errors.insert(failure.field, failure.message);
        }
        errors
    }
}

impl std::fmt::Display for ValidationFailures {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for failure in &self.failures {
            writeln!(f, "{}: {}", failure.field, failure.message)?;
        }
        Ok(())
    }
}

/// Field errors keyed by field name, one displayed message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    errors: HashMap<String, String>,
}

impl FieldErrors {
    /// Creates an empty error map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the message for a field, replacing any previous one.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }

    /// Returns the message for a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Returns whether a field has an error.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Removes the message for a field.
    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.errors.remove(field)
    }

    /// Removes all messages.
    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Returns whether the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns an iterator over the errors.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_last_failure_wins() {
        let mut failures = ValidationFailures::new();
        failures.push(ValidationFailure::new("password", "first"));
        failures.push(ValidationFailure::new("email", "bad address"));
        failures.push(ValidationFailure::new("password", "second"));

        let errors = failures.into_field_errors();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("password"), Some("second"));
        assert_eq!(errors.get("email"), Some("bad address"));
    }

    #[test]
    fn test_projection_empty_list() {
        let errors = ValidationFailures::new().into_field_errors();
        assert!(errors.is_empty());
    }

    #[test]
    fn test_field_errors_replace() {
        let mut errors = FieldErrors::new();
        errors.insert("password", "too short");
        errors.insert("password", "required");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("password"), Some("required"));
        assert!(errors.contains("password"));
        assert!(!errors.contains("email"));
    }

    #[test]
    fn test_failures_display() {
        let mut failures = ValidationFailures::new();
        failures.push(ValidationFailure::new("password", "required"));

        assert_eq!(failures.to_string(), "password: required\n");
    }

    #[test]
    fn test_form_error_display() {
        let mut failures = ValidationFailures::new();
        failures.push(ValidationFailure::new("password", "required"));

        let error = FormError::Validation(failures);
        assert_eq!(error.to_string(), "validation failed: password: required\n");
    }

    #[test]
    fn test_failures_serialize() {
        let mut failures = ValidationFailures::new();
        failures.push(ValidationFailure::new("password", "required"));

        let json = serde_json::to_value(&failures).unwrap();
        assert_eq!(
            json["failures"][0],
            serde_json::json!({"field": "password", "message": "required"})
        );
    }
}
