//! Form controller owning registrations, values and field errors.

use std::collections::HashMap;

use tracing::debug;

use crate::element::ElementHandle;
use crate::error::FieldErrors;
use crate::values::FormValues;

/// Descriptor a field binding hands to the controller at mount time.
#[derive(Debug, Clone)]
pub struct FieldRegistration {
    /// Field name, unique within a form instance.
    pub name: String,
    /// Property path that holds the value inside the control.
    pub path: String,
    /// Handle to the rendered control.
    pub handle: ElementHandle,
}

impl FieldRegistration {
    /// Creates a registration reading the control's `value` property.
    pub fn new(name: impl Into<String>, handle: ElementHandle) -> Self {
        Self {
            name: name.into(),
            path: "value".to_string(),
            handle,
        }
    }

    /// Overrides the property path.
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }
}

/// Capability a form controller exposes to field bindings.
///
/// Bindings never reach into the controller beyond this surface, so they
/// can be mounted against any concrete form-state holder.
pub trait FieldRegistry {
    /// Registers a field.
    ///
    /// Registrations are keyed by name; registering an already-registered
    /// name replaces the previous entry.
    fn register(&mut self, registration: FieldRegistration);

    /// Removes a field registration.
    fn unregister(&mut self, name: &str);

    /// Returns the default value for a field, read once at mount time.
    fn default_value(&self, name: &str) -> Option<String> {
        let _ = name;
        None
    }
}

/// Owns the authoritative value and error state for one mounted form.
///
/// The controller is process-local to a single form instance and is passed
/// by reference into bindings and the submission flow; it is not a
/// module-wide singleton.
#[derive(Debug, Default)]
pub struct FormController {
    registrations: HashMap<String, FieldRegistration>,
    order: Vec<String>,
    errors: FieldErrors,
    defaults: HashMap<String, String>,
}

impl FormController {
    /// Creates a controller with no registered fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a default value applied to a field when it mounts.
    #[must_use]
    pub fn with_default(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.defaults.insert(name.into(), value.into());
        self
    }

    /// Returns the registered field names in registration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Returns whether a field is currently registered.
    #[must_use]
    pub fn is_registered(&self, name: &str) -> bool {
        self.registrations.contains_key(name)
    }

    /// Snapshots the current value of every registered field.
    #[must_use]
    pub fn values(&self) -> FormValues {
        let mut values = FormValues::new();
        for name in &self.order {
            if let Some(registration) = self.registrations.get(name) {
                if let Some(value) = registration.handle.read_path(&registration.path) {
                    values.insert(name.clone(), value);
                }
            }
        }
        values
    }

    /// Replaces the whole field-error map.
    ///
    /// The replacement is wholesale: errors for fields absent from the new
    /// map are cleared along with everything else, in one step.
    pub fn set_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    /// Clears all field errors.
    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Returns the current field-error map.
    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Returns the displayed error for a field, if any.
    #[must_use]
    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name)
    }
}

impl FieldRegistry for FormController {
    fn register(&mut self, registration: FieldRegistration) {
        let name = registration.name.clone();
        if self.registrations.insert(name.clone(), registration).is_some() {
            debug!(field = %name, "replaced existing field registration");
        } else {
            self.order.push(name);
        }
    }

    fn unregister(&mut self, name: &str) {
        if self.registrations.remove(name).is_some() {
            self.order.retain(|n| n != name);
        }
    }

    fn default_value(&self, name: &str) -> Option<String> {
        self.defaults.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_collect() {
        let mut controller = FormController::new();
        controller.register(FieldRegistration::new(
            "password",
            ElementHandle::with_value("abc123"),
        ));
        controller.register(FieldRegistration::new(
            "password_confirmation",
            ElementHandle::with_value("abc123"),
        ));

        let values = controller.values();
        assert_eq!(values.len(), 2);
        assert_eq!(values.get("password"), Some("abc123"));
        assert_eq!(values.get("password_confirmation"), Some("abc123"));
    }

    #[test]
    fn test_register_last_write_wins() {
        let mut controller = FormController::new();
        controller.register(FieldRegistration::new(
            "password",
            ElementHandle::with_value("old"),
        ));
        controller.register(FieldRegistration::new(
            "password",
            ElementHandle::with_value("new"),
        ));

        let values = controller.values();
        assert_eq!(values.len(), 1);
        assert_eq!(values.get("password"), Some("new"));
        assert_eq!(controller.field_names().collect::<Vec<_>>(), ["password"]);
    }

    #[test]
    fn test_unregister_drops_field() {
        let mut controller = FormController::new();
        controller.register(FieldRegistration::new("password", ElementHandle::new()));
        assert!(controller.is_registered("password"));

        controller.unregister("password");
        assert!(!controller.is_registered("password"));
        assert!(controller.values().is_empty());
    }

    #[test]
    fn test_unknown_path_is_not_collected() {
        let mut controller = FormController::new();
        controller.register(
            FieldRegistration::new("password", ElementHandle::with_value("abc123"))
                .path("checked"),
        );

        assert!(controller.values().is_empty());
    }

    #[test]
    fn test_set_errors_is_wholesale() {
        let mut controller = FormController::new();

        let mut first = FieldErrors::new();
        first.insert("password", "required");
        first.insert("email", "invalid");
        controller.set_errors(first);
        assert_eq!(controller.error("email"), Some("invalid"));

        let mut second = FieldErrors::new();
        second.insert("password", "too short");
        controller.set_errors(second);
        assert_eq!(controller.error("password"), Some("too short"));
        assert_eq!(controller.error("email"), None);

        controller.clear_errors();
        assert!(controller.errors().is_empty());
    }

    #[test]
    fn test_default_value() {
        let controller = FormController::new().with_default("password", "hunter2");
        assert_eq!(
            controller.default_value("password"),
            Some("hunter2".to_string())
        );
        assert_eq!(controller.default_value("other"), None);
    }
}
