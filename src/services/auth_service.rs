// src/services/auth_service.rs
use crate::{
    error::{AppError, AppResult},
    models::user::LoginForm,
};

/// Login simulado: qualquer email e senha não vazios são aceites.
/// Devolve o email normalizado para guardar na sessão.
pub fn authenticate(form: &LoginForm) -> AppResult<String> {
    let email = form.email.trim();
    if email.is_empty() || form.password.is_empty() {
        tracing::debug!("Login recusado: email ou senha vazios");
        return Err(AppError::InvalidCredentials);
    }
    Ok(email.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn any_non_empty_pair_is_accepted() {
        assert_eq!(
            authenticate(&form(" Maria.Silva@Escola.gov.br ", "x")).unwrap(),
            "maria.silva@escola.gov.br"
        );
    }

    #[test]
    fn empty_fields_are_rejected() {
        assert!(matches!(authenticate(&form("", "x")), Err(AppError::InvalidCredentials)));
        assert!(matches!(authenticate(&form("a@b", "")), Err(AppError::InvalidCredentials)));
        assert!(matches!(authenticate(&form("   ", "x")), Err(AppError::InvalidCredentials)));
    }
}
