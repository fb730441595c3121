// src/web/auth_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::user::LoginForm,
    services::auth_service,
    templates::{render, LoginPage},
    web::mw_auth::SESSION_USER_KEY,
};
use axum::{
    extract::Form,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

// GET /
pub async fn show_login_form(session: Session) -> AppResult<Response> {
    if session
        .get::<String>(SESSION_USER_KEY)
        .await
        .ok()
        .flatten()
        .is_some()
    {
        tracing::debug!("GET /: sessão já iniciada, redirecionando para /home");
        return Ok(Redirect::to("/home").into_response());
    }

    let template = LoginPage {
        error: None,
        email: String::new(),
    };
    Ok(render(&template)?.into_response())
}

// POST /
pub async fn handle_login(session: Session, Form(form): Form<LoginForm>) -> AppResult<Response> {
    match auth_service::authenticate(&form) {
        Ok(email) => {
            session
                .cycle_id()
                .await
                .map_err(|e| AppError::SessionError(format!("Falha ao rodar ID: {}", e)))?;
            session
                .insert(SESSION_USER_KEY, &email)
                .await
                .map_err(|e| AppError::SessionError(format!("Falha ao inserir na sessão: {}", e)))?;

            tracing::info!("✅ Login bem-sucedido para: {}", email);
            Ok(Redirect::to("/home").into_response())
        }
        Err(AppError::InvalidCredentials) => {
            tracing::warn!("Login recusado para '{}'", form.email);
            let template = LoginPage {
                error: Some("Preencha o email e a senha para entrar.".to_string()),
                email: form.email.clone(),
            };
            Ok(render(&template)?.into_response())
        }
        Err(e) => Err(e),
    }
}

// GET /logout
pub async fn handle_logout(session: Session) -> AppResult<Redirect> {
    let email: Option<String> = session.get(SESSION_USER_KEY).await.ok().flatten();

    session
        .delete()
        .await
        .map_err(|e| AppError::SessionError(format!("Falha ao apagar sessão: {}", e)))?;

    match email {
        Some(email) => tracing::info!("🚪 Utilizador '{}' desligado.", email),
        None => tracing::info!("🚪 Sessão anónima desligada."),
    }
    Ok(Redirect::to("/"))
}
