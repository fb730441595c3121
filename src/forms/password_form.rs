// src/forms/password_form.rs
use crate::{
    forms::{
        field_state::FieldState,
        validation::{self, FormError, MIN_PASSWORD_LEN},
    },
    services::settings_service::PasswordChange,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordField {
    Current,
    New,
    Confirm,
}

/// Aba "Segurança". Os erros são por campo e podem coexistir.
#[derive(Debug, Default)]
pub struct PasswordForm {
    fields: FieldState<PasswordField>,
}

impl PasswordForm {
    pub fn new(current: &str, new: &str, confirm: &str) -> Self {
        let mut form = Self::default();
        form.set(PasswordField::Current, current);
        form.set(PasswordField::New, new);
        form.set(PasswordField::Confirm, confirm);
        form
    }

    pub fn set(&mut self, field: PasswordField, value: &str) {
        self.fields.set(field, value);
    }

    pub fn error_message(&self, field: PasswordField) -> String {
        self.fields.error_message(field)
    }

    pub fn has_error(&self, field: PasswordField) -> bool {
        self.fields.has_error(field)
    }

    pub fn has_errors(&self) -> bool {
        self.fields.has_errors()
    }

    fn violations(&self) -> Vec<(PasswordField, FormError)> {
        let new = self.fields.value(PasswordField::New);
        let mut errors = Vec::new();
        if let Err(e) = validation::required(
            self.fields.value(PasswordField::Current),
            "Senha atual é obrigatória",
        ) {
            errors.push((PasswordField::Current, e));
        }
        if new.chars().count() < MIN_PASSWORD_LEN {
            errors.push((
                PasswordField::New,
                FormError::PasswordTooShort {
                    min: MIN_PASSWORD_LEN,
                },
            ));
        }
        if self.fields.value(PasswordField::Confirm) != new {
            errors.push((PasswordField::Confirm, FormError::PasswordMismatch));
        }
        errors
    }

    /// Valida e, se tudo estiver certo, devolve a troca e limpa os campos.
    pub fn submit(&mut self) -> Option<PasswordChange> {
        let errors = self.violations();
        if !errors.is_empty() {
            tracing::warn!("⚠️ Troca de senha recusada: {} erro(s)", errors.len());
            self.fields.replace_errors(errors);
            return None;
        }
        let change = PasswordChange {
            current_password: self.fields.value(PasswordField::Current).to_string(),
            new_password: self.fields.value(PasswordField::New).to_string(),
        };
        self.fields.clear();
        Some(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_new_password_is_rejected() {
        let mut form = PasswordForm::new("antiga123", "abc", "abc");
        assert!(form.submit().is_none());
        assert_eq!(
            form.error_message(PasswordField::New),
            "A nova senha deve ter pelo menos 8 caracteres"
        );
        assert!(!form.has_error(PasswordField::Confirm));
    }

    #[test]
    fn mismatch_is_reported_on_confirmation() {
        let mut form = PasswordForm::new("antiga123", "abcdefgh", "abcdefgi");
        assert!(form.submit().is_none());
        assert_eq!(form.error_message(PasswordField::Confirm), "As senhas não coincidem");
        assert!(!form.has_error(PasswordField::New));
    }

    #[test]
    fn both_errors_can_coexist() {
        let mut form = PasswordForm::new("", "abc", "xyz");
        assert!(form.submit().is_none());
        assert!(form.has_error(PasswordField::Current));
        assert!(form.has_error(PasswordField::New));
        assert!(form.has_error(PasswordField::Confirm));

        form.set(PasswordField::New, "abcdefgh");
        assert!(!form.has_error(PasswordField::New));
        assert!(form.has_error(PasswordField::Confirm));
    }

    #[test]
    fn valid_change_clears_fields() {
        let mut form = PasswordForm::new("antiga123", "nova-senha", "nova-senha");
        let change = form.submit().unwrap();
        assert_eq!(change.new_password, "nova-senha");
        assert!(!form.has_errors());
        assert!(form.submit().is_none());
    }
}
