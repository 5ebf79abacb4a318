//! The mounted password-reset form: controller plus field bindings.

use rekey_forms::{ElementHandle, FieldBinding, FormController};

/// Field name of the new-password input.
pub const PASSWORD_FIELD: &str = "password";

/// Field name of the confirmation input.
pub const PASSWORD_CONFIRMATION_FIELD: &str = "password_confirmation";

/// The password-reset form as mounted on the page.
///
/// One controller instance owns the value and error state; the two
/// bindings register their controls with it at mount time.
#[derive(Debug)]
pub struct ResetPasswordForm {
    /// Controller owning values and errors for this form instance.
    pub controller: FormController,
    /// Binding for the new-password input.
    pub password: FieldBinding,
    /// Binding for the confirmation input.
    pub password_confirmation: FieldBinding,
}

impl ResetPasswordForm {
    /// Mounts the form: renders both controls and registers their
    /// bindings with the controller.
    #[must_use]
    pub fn mount() -> Self {
        let mut controller = FormController::new();
        let mut password = FieldBinding::new(PASSWORD_FIELD).handle(ElementHandle::new());
        let mut password_confirmation =
            FieldBinding::new(PASSWORD_CONFIRMATION_FIELD).handle(ElementHandle::new());

        password.mount(&mut controller);
        password_confirmation.mount(&mut controller);

        Self {
            controller,
            password,
            password_confirmation,
        }
    }
}

impl Default for ResetPasswordForm {
    fn default() -> Self {
        Self::mount()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_registers_both_fields() {
        let form = ResetPasswordForm::mount();
        assert!(form.controller.is_registered(PASSWORD_FIELD));
        assert!(form.controller.is_registered(PASSWORD_CONFIRMATION_FIELD));
    }

    #[test]
    fn test_typed_values_reach_the_snapshot() {
        let form = ResetPasswordForm::mount();
        if let Some(element) = form.password.element() {
            element.set_value("abc123");
        }
        if let Some(element) = form.password_confirmation.element() {
            element.set_value("abc123");
        }

        let values = form.controller.values();
        assert_eq!(values.get(PASSWORD_FIELD), Some("abc123"));
        assert_eq!(values.get(PASSWORD_CONFIRMATION_FIELD), Some("abc123"));
    }

    #[test]
    fn test_bindings_render_controller_errors() {
        let mut form = ResetPasswordForm::mount();

        let mut errors = rekey_forms::FieldErrors::new();
        errors.insert(PASSWORD_FIELD, "Senha obrigatória");
        form.controller.set_errors(errors);

        let state = form
            .password
            .container_state(form.controller.errors());
        assert!(state.is_errored);

        let state = form
            .password_confirmation
            .container_state(form.controller.errors());
        assert!(!state.is_errored);
    }
}
