// src/forms/validation.rs
use crate::models::activity::Upload;
use thiserror::Error;

pub const MIN_TITLE_LEN: usize = 5;
pub const MIN_DESCRIPTION_LEN: usize = 20;
pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "ppt", "pptx"];

// Erros de validação do lado do formulário. A mensagem é a que aparece
// junto ao campo.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{0}")]
    MissingRequiredField(&'static str),

    #[error("{label} deve ter pelo menos {min} caracteres")]
    TooShort { label: &'static str, min: usize },

    #[error("Formato de arquivo não suportado")]
    InvalidFileExtension { extension: String },

    #[error("Tamanho de arquivo inválido")]
    InvalidFileSize,

    #[error("Arquivo muito grande (máximo 10MB)")]
    FileTooLarge { size: u64 },

    #[error("As senhas não coincidem")]
    PasswordMismatch,

    #[error("A nova senha deve ter pelo menos {min} caracteres")]
    PasswordTooShort { min: usize },

    // falha do colaborador remoto, mostrada no topo do formulário
    #[error("Não foi possível enviar: {0}")]
    SubmitFailed(String),
}

/// Obrigatório (ignorando espaços) e com comprimento mínimo (contado sem trim).
pub fn required_min_len(
    value: &str,
    missing: &'static str,
    label: &'static str,
    min: usize,
) -> Result<(), FormError> {
    if value.trim().is_empty() {
        return Err(FormError::MissingRequiredField(missing));
    }
    if value.chars().count() < min {
        return Err(FormError::TooShort { label, min });
    }
    Ok(())
}

pub fn required(value: &str, missing: &'static str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::MissingRequiredField(missing))
    } else {
        Ok(())
    }
}

/// Seleção obrigatória: `None` quando não há escolha válida.
pub fn required_choice<T>(choice: Option<T>, missing: &'static str) -> Result<T, FormError> {
    choice.ok_or(FormError::MissingRequiredField(missing))
}

pub fn validate_upload(file: &Upload) -> Result<(), FormError> {
    let extension = file.extension();
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(FormError::InvalidFileExtension { extension });
    }
    if file.size > MAX_UPLOAD_BYTES {
        return Err(FormError::FileTooLarge { size: file.size });
    }
    Ok(())
}
