// src/forms/profile_form.rs
use crate::{
    error::AppResult,
    forms::{field_state::FieldState, validation},
    models::user::User,
    services::user_service::ProfileService,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Name,
    Email,
}

/// Edição rápida do cartão de perfil: Editar → (Salvar | Cancelar).
#[derive(Debug, Default)]
pub struct ProfileEditor {
    editing: bool,
    fields: FieldState<ProfileField>,
}

impl ProfileEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn value(&self, field: ProfileField) -> &str {
        self.fields.value(field)
    }

    pub fn error_message(&self, field: ProfileField) -> String {
        self.fields.error_message(field)
    }

    /// Abre a edição com os dados atuais.
    pub fn start(&mut self, user: &User) {
        self.fields.clear();
        self.fields.set(ProfileField::Name, user.name.clone());
        self.fields.set(ProfileField::Email, user.email.clone());
        self.editing = true;
    }

    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    pub fn cancel(&mut self) {
        self.fields.clear();
        self.editing = false;
    }

    fn validate(&mut self) -> bool {
        let errors: Vec<_> = [
            (ProfileField::Name, "Nome é obrigatório"),
            (ProfileField::Email, "Email é obrigatório"),
        ]
        .into_iter()
        .filter_map(|(field, missing)| {
            validation::required(self.fields.value(field), missing)
                .err()
                .map(|e| (field, e))
        })
        .collect();
        let ok = errors.is_empty();
        self.fields.replace_errors(errors);
        ok
    }

    /// Guarda e fecha a edição. Com campos vazios continua a editar.
    pub async fn save(&mut self, service: &ProfileService) -> AppResult<Option<User>> {
        if !self.validate() {
            tracing::warn!("⚠️ Perfil com campos obrigatórios vazios");
            return Ok(None);
        }
        let user = service
            .update_profile(self.value(ProfileField::Name), self.value(ProfileField::Email))
            .await?;
        self.cancel();
        Ok(Some(user))
    }
}
