// src/web/routes.rs
use crate::{
    state::AppState,
    web::{
        activity_handlers, auth_handlers, home_handlers, mw_auth, nav_handlers, profile_handlers,
        search_handlers, settings_handlers,
    },
};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use time::Duration;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

pub fn create_router(app_state: AppState) -> Router {
    // --- Rotas Públicas ---
    let public_routes = Router::new()
        .route(
            "/",
            get(auth_handlers::show_login_form).post(auth_handlers::handle_login),
        )
        .route("/logout", get(auth_handlers::handle_logout));

    // --- Rotas Autenticadas ---
    let authenticated_routes = Router::new()
        .route("/home", get(home_handlers::show_home))
        .route("/menu/{key}", get(nav_handlers::choose_menu_item))
        .route("/search", get(search_handlers::show_search))
        .route("/activity/{id}", get(activity_handlers::show_activity))
        .route("/activity/{id}/download", post(activity_handlers::handle_download))
        .route(
            "/submit",
            get(activity_handlers::show_submit).post(activity_handlers::handle_submit),
        )
        .route(
            "/edit-activity/{id}",
            get(activity_handlers::show_edit).post(activity_handlers::handle_edit),
        )
        .route(
            "/profile",
            get(profile_handlers::show_profile).post(profile_handlers::handle_profile),
        )
        .route("/settings", get(settings_handlers::show_settings))
        .route("/settings/account", post(settings_handlers::handle_account))
        .route("/settings/password", post(settings_handlers::handle_password))
        .route("/settings/notifications", post(settings_handlers::handle_notifications))
        .route("/settings/privacy", post(settings_handlers::handle_privacy))
        .route("/api/activities/{id}", get(activity_handlers::api_activity))
        // require_auth aplica-se a TODAS as rotas acima
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            mw_auth::require_auth,
        ));

    Router::new()
        .merge(public_routes)
        .merge(authenticated_routes)
        .with_state(app_state)
}

/// Router completo com sessões e tracing HTTP (usado pelo main e pelos testes).
pub fn create_app(app_state: AppState) -> Router {
    let config = app_state.config.clone();

    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(config.session_secure)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(
            config.session_inactivity_days,
        )));
    tracing::info!("🔑 Camada de sessão configurada.");

    create_router(app_state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(session_layer),
    )
}
