//! Field bindings: per-input presentation state and controller registration.

use tracing::debug;

use crate::controller::{FieldRegistration, FieldRegistry};
use crate::element::ElementHandle;
use crate::error::FieldErrors;

/// A single input control paired with its local presentation state.
///
/// The binding tracks focus and fill state locally and registers its
/// rendered control with a form controller through the [`FieldRegistry`]
/// capability. Its displayed error is always derived from the controller's
/// error map for its own name; the binding never computes error text
/// itself.
#[derive(Debug)]
pub struct FieldBinding {
    name: String,
    handle: Option<ElementHandle>,
    is_focused: bool,
    is_filled: bool,
}

impl FieldBinding {
    /// Creates an unmounted binding with no rendered control yet.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handle: None,
            is_focused: false,
            is_filled: false,
        }
    }

    /// Attaches the handle of the rendered control.
    #[must_use]
    pub fn handle(mut self, handle: ElementHandle) -> Self {
        self.handle = Some(handle);
        self
    }

    /// Returns the binding's field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the handle to the rendered control, if one is attached.
    #[must_use]
    pub fn element(&self) -> Option<&ElementHandle> {
        self.handle.as_ref()
    }

    /// Registers this binding's control with the form controller.
    ///
    /// The controller's default value for the field is applied to a still
    /// empty control. Without an attached handle the registration is
    /// skipped and the field never participates in value collection.
    pub fn mount(&mut self, registry: &mut dyn FieldRegistry) {
        let Some(handle) = self.handle.clone() else {
            debug!(
                field = %self.name,
                "no element handle at mount; field will not be collected"
            );
            return;
        };
        if let Some(default) = registry.default_value(&self.name) {
            if handle.value().is_empty() {
                handle.set_value(default);
            }
        }
        registry.register(FieldRegistration::new(self.name.clone(), handle));
    }

    /// Removes this binding's registration from the controller.
    pub fn unmount(&self, registry: &mut dyn FieldRegistry) {
        registry.unregister(&self.name);
    }

    /// Renames the binding, re-registering it under the new name.
    ///
    /// Registrations are keyed by name, so a rename is an unregister of the
    /// old name followed by a fresh mount, never an in-place mutation.
    pub fn rename(&mut self, name: impl Into<String>, registry: &mut dyn FieldRegistry) {
        registry.unregister(&self.name);
        self.name = name.into();
        self.mount(registry);
    }

    /// Marks the control focused. No validation side effects.
    pub fn focus(&mut self) {
        self.is_focused = true;
    }

    /// Marks the control blurred.
    ///
    /// The fill state is recomputed from the control's current literal
    /// value here, not on every keystroke.
    pub fn blur(&mut self) {
        self.is_focused = false;
        self.is_filled = self.handle.as_ref().is_some_and(ElementHandle::is_filled);
    }

    /// Returns whether the control currently has focus.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    /// Returns whether the control held a non-empty value at the last blur.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.is_filled
    }

    /// Computes the visual container state from the presentation booleans
    /// and the controller's current error map.
    #[must_use]
    pub fn container_state(&self, errors: &FieldErrors) -> ContainerState {
        ContainerState {
            is_focused: self.is_focused,
            is_filled: self.is_filled,
            is_errored: errors.contains(&self.name),
        }
    }
}

/// Visual state of a field's container.
///
/// The three booleans compose directly into style variants; there is no
/// independent state machine, and every combination is legal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContainerState {
    /// The control has focus.
    pub is_focused: bool,
    /// The control held a value at the last blur.
    pub is_filled: bool,
    /// The controller has an error for this field.
    pub is_errored: bool,
}

impl ContainerState {
    /// Returns the style-variant class list for this state.
    #[must_use]
    pub fn class_list(&self) -> String {
        let mut classes = vec!["field-container"];
        if self.is_errored {
            classes.push("is-errored");
        }
        if self.is_focused {
            classes.push("is-focused");
        }
        if self.is_filled {
            classes.push("is-filled");
        }
        classes.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::FormController;

    #[test]
    fn test_mount_registers_with_controller() {
        let mut controller = FormController::new();
        let handle = ElementHandle::with_value("abc123");
        let mut binding = FieldBinding::new("password").handle(handle);

        binding.mount(&mut controller);
        assert!(controller.is_registered("password"));
        assert_eq!(controller.values().get("password"), Some("abc123"));
    }

    #[test]
    fn test_mount_without_handle_is_noop() {
        let mut controller = FormController::new();
        let mut binding = FieldBinding::new("password");

        binding.mount(&mut controller);
        assert!(!controller.is_registered("password"));
        assert!(controller.values().is_empty());
    }

    #[test]
    fn test_mount_applies_default_to_empty_control() {
        let mut controller = FormController::new().with_default("password", "hunter2");
        let handle = ElementHandle::new();
        let mut binding = FieldBinding::new("password").handle(handle.clone());

        binding.mount(&mut controller);
        assert_eq!(handle.value(), "hunter2");
    }

    #[test]
    fn test_mount_keeps_existing_value_over_default() {
        let mut controller = FormController::new().with_default("password", "hunter2");
        let handle = ElementHandle::with_value("typed");
        let mut binding = FieldBinding::new("password").handle(handle.clone());

        binding.mount(&mut controller);
        assert_eq!(handle.value(), "typed");
    }

    #[test]
    fn test_unmount_unregisters() {
        let mut controller = FormController::new();
        let mut binding = FieldBinding::new("password").handle(ElementHandle::new());

        binding.mount(&mut controller);
        binding.unmount(&mut controller);
        assert!(!controller.is_registered("password"));
    }

    #[test]
    fn test_rename_re_registers() {
        let mut controller = FormController::new();
        let mut binding = FieldBinding::new("password").handle(ElementHandle::new());

        binding.mount(&mut controller);
        binding.rename("passphrase", &mut controller);

        assert!(!controller.is_registered("password"));
        assert!(controller.is_registered("passphrase"));
        assert_eq!(binding.name(), "passphrase");
    }

    #[test]
    fn test_focus_blur_updates_fill_state() {
        let handle = ElementHandle::new();
        let mut binding = FieldBinding::new("password").handle(handle.clone());

        binding.focus();
        assert!(binding.is_focused());
        assert!(!binding.is_filled());

        handle.set_value("abc123");
        // Fill state is only recomputed at blur time.
        assert!(!binding.is_filled());

        binding.blur();
        assert!(!binding.is_focused());
        assert!(binding.is_filled());

        handle.set_value("");
        binding.focus();
        binding.blur();
        assert!(!binding.is_filled());
    }

    #[test]
    fn test_error_state_follows_controller_map() {
        let mut binding = FieldBinding::new("password").handle(ElementHandle::new());
        binding.focus();

        let mut errors = FieldErrors::new();
        errors.insert("password", "required");

        let state = binding.container_state(&errors);
        assert!(state.is_errored);
        assert!(state.is_focused);

        errors.clear();
        let state = binding.container_state(&errors);
        assert!(!state.is_errored);
    }

    #[test]
    fn test_class_list_composition() {
        let state = ContainerState::default();
        assert_eq!(state.class_list(), "field-container");

        let state = ContainerState {
            is_focused: true,
            is_filled: true,
            is_errored: true,
        };
        assert_eq!(
            state.class_list(),
            "field-container is-errored is-focused is-filled"
        );
    }
}
