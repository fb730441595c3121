// src/forms/account_form.rs
use crate::{
    forms::{field_state::FieldState, validation},
    models::user::User,
    services::user_service::AccountUpdate,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountField {
    FirstName,
    LastName,
    Email,
    School,
    City,
}

const REQUIRED: [(AccountField, &str); 5] = [
    (AccountField::FirstName, "Nome é obrigatório"),
    (AccountField::LastName, "Sobrenome é obrigatório"),
    (AccountField::Email, "Email é obrigatório"),
    (AccountField::School, "Escola é obrigatória"),
    (AccountField::City, "Cidade é obrigatória"),
];

/// Aba "Conta": todos os campos são obrigatórios.
#[derive(Debug, Default)]
pub struct AccountForm {
    fields: FieldState<AccountField>,
}

impl AccountForm {
    pub fn from_user(user: &User) -> Self {
        let mut form = Self::default();
        form.set(AccountField::FirstName, &user.first_name);
        form.set(AccountField::LastName, &user.last_name);
        form.set(AccountField::Email, &user.email);
        form.set(AccountField::School, &user.school);
        form.set(AccountField::City, &user.city);
        form
    }

    pub fn set(&mut self, field: AccountField, value: &str) {
        self.fields.set(field, value);
    }

    pub fn value(&self, field: AccountField) -> &str {
        self.fields.value(field)
    }

    pub fn error_message(&self, field: AccountField) -> String {
        self.fields.error_message(field)
    }

    pub fn has_errors(&self) -> bool {
        self.fields.has_errors()
    }

    /// Valida; com tudo preenchido devolve a atualização a gravar.
    pub fn submit(&mut self) -> Option<AccountUpdate> {
        let errors: Vec<_> = REQUIRED
            .into_iter()
            .filter_map(|(field, missing)| {
                validation::required(self.fields.value(field), missing)
                    .err()
                    .map(|e| (field, e))
            })
            .collect();
        if !errors.is_empty() {
            tracing::warn!("⚠️ Dados da conta recusados: {} campo(s) vazio(s)", errors.len());
            self.fields.replace_errors(errors);
            return None;
        }
        let value = |field| self.fields.value(field).trim().to_string();
        Some(AccountUpdate {
            first_name: value(AccountField::FirstName),
            last_name: value(AccountField::LastName),
            email: value(AccountField::Email),
            school: value(AccountField::School),
            city: value(AccountField::City),
        })
    }
}
