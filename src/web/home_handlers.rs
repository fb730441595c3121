// src/web/home_handlers.rs
use crate::{
    error::AppResult,
    models::activity::ActivityStatus,
    services::user_service,
    state::AppState,
    templates::{render, HomePage},
    ui::shell::Route,
    web::page::{self, ShellQuery},
};
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};

const RECENT_LIMIT: usize = 3;

// GET /home
pub async fn show_home(
    State(state): State<AppState>,
    Query(ui): Query<ShellQuery>,
) -> AppResult<Response> {
    let (nav, user) = page::shell(&state, Route::Home, &ui).await;

    let mine = state.activities.by_author(user.id).await;
    let stats = user_service::stats(&mine);

    // mais recentes primeiro, só as publicadas
    let mut recent: Vec<_> = state
        .activities
        .list()
        .await
        .into_iter()
        .filter(|a| a.status == ActivityStatus::Aprovada)
        .collect();
    recent.sort_by(|a, b| b.id.cmp(&a.id));
    recent.truncate(RECENT_LIMIT);

    let template = HomePage {
        nav,
        first_name: user.first_name,
        recent,
        stats,
    };
    Ok(render(&template)?.into_response())
}
