// src/error.rs
use crate::{forms::validation::FormError, services::activity_service::SubmitError};
use axum::{http::StatusCode, response::Html, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuração inválida: {0}")]
    ConfigError(String),

    #[error("Erro ao renderizar template: {0}")]
    TemplateError(#[from] askama::Error),

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Erro na sessão: {0}")]
    SessionError(String),

    #[error("Dados inválidos: {0}")]
    ValidationError(#[from] FormError),

    #[error("Não encontrado: {0}")]
    NotFound(String),

    #[error("Falha no envio: {0}")]
    SubmitError(#[from] SubmitError),
}

// Como converter AppError numa resposta HTTP
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Loga o erro detalhado no servidor
        tracing::error!("Erro processado: {:?}", self);

        let (status, user_message) = match &self {
            AppError::NotFound(_) | AppError::SubmitError(SubmitError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "A página ou atividade procurada não existe.")
            }
            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Email ou senha inválidos."),
            AppError::SessionError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Erro na gestão da sua sessão.")
            }
            AppError::SubmitError(_) => (StatusCode::BAD_REQUEST, "Não foi possível enviar a atividade."),
            AppError::ValidationError(_) => (StatusCode::BAD_REQUEST, "Dados inválidos. Verifique os campos."),
            AppError::ConfigError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Erro de configuração."),
            AppError::TemplateError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Ocorreu um erro inesperado.")
            }
        };

        // Página HTML simples, sem depender de templates (que podem ser a causa do erro)
        (status, Html(format!(r#"
            <!DOCTYPE html><html lang="pt-BR"><head><meta charset="utf-8"><title>Erro</title><style>body{{font-family:sans-serif;}}</style></head>
            <body><h1>Erro {status_code}</h1><p>{message}</p><a href="/home">Voltar ao início</a></body></html>
         "#, status_code=status.as_u16(), message=user_message))).into_response()
    }
}

// Tipo Result padrão para a aplicação
pub type AppResult<T = ()> = Result<T, AppError>;
