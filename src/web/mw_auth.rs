// src/web/mw_auth.rs
use crate::error::AppError;
use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

pub const SESSION_USER_KEY: &str = "user_email";

// Middleware: só deixa passar pedidos com sessão iniciada
pub async fn require_auth(
    session: Session,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    match session.get::<String>(SESSION_USER_KEY).await {
        Ok(Some(email)) => {
            tracing::debug!("Autenticação MW: '{}' autenticado.", email);
            request.extensions_mut().insert(CurrentUser(email));
            Ok(next.run(request).await)
        }
        Ok(None) => {
            tracing::debug!("Autenticação MW: sem sessão, redirecionando para /");
            Ok(Redirect::to("/").into_response())
        }
        Err(e) => {
            tracing::error!("Autenticação MW: Erro ao ler sessão: {:?}", e);
            Err(AppError::SessionError(format!("Erro ao verificar sessão: {}", e)))
        }
    }
}

// Email da sessão, disponível para os handlers protegidos
#[derive(Clone, Debug)]
pub struct CurrentUser(pub String);
