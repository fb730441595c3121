// src/web/profile_handlers.rs
use crate::{
    error::AppResult,
    forms::profile_form::{ProfileEditor, ProfileField},
    models::activity::{Activity, ActivityStatus},
    services::user_service,
    state::AppState,
    templates::{render, ProfileEditView, ProfilePage, TabsView},
    ui::{
        shell::Route,
        tabs::{TabKey, Tabs},
    },
    web::page::{self, ShellQuery},
};
use axum::{
    extract::{Form, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ProfileParams {
    #[serde(default)]
    pub tab: Option<String>,
    #[serde(default)]
    pub edit: Option<String>,
    #[serde(default)]
    pub updated: Option<String>,
    #[serde(default)]
    pub saved: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProfileFormData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Abas "Todas / Aprovadas / Em Análise" com as contagens no rótulo.
/// O valor vem do URL; uma aba desconhecida não mostra painel.
fn activity_tabs(activities: &[Activity], tab: Option<&str>) -> Tabs {
    let count = |status: ActivityStatus| activities.iter().filter(|a| a.status == status).count();
    let keys = vec![
        TabKey {
            key: "all".into(),
            label: format!("Todas ({})", activities.len()),
        },
        TabKey {
            key: "approved".into(),
            label: format!("Aprovadas ({})", count(ActivityStatus::Aprovada)),
        },
        TabKey {
            key: "pending".into(),
            label: format!("Em Análise ({})", count(ActivityStatus::EmAnalise)),
        },
    ];
    Tabs::controlled(keys, Some(tab.unwrap_or("all")))
}

fn visible_activities(tabs: &Tabs, activities: Vec<Activity>) -> Vec<Activity> {
    let wanted = match tabs.visible_panel().map(|k| k.key.as_str()) {
        Some("approved") => Some(ActivityStatus::Aprovada),
        Some("pending") => Some(ActivityStatus::EmAnalise),
        Some(_) => None,
        None => return Vec::new(),
    };
    activities
        .into_iter()
        .filter(|a| wanted.map_or(true, |s| a.status == s))
        .collect()
}

async fn render_profile(
    state: &AppState,
    ui: &ShellQuery,
    tab: Option<&str>,
    editor: &ProfileEditor,
    notice: Option<String>,
    status: StatusCode,
) -> AppResult<Response> {
    let (nav, user) = page::shell(state, Route::Profile, ui).await;
    let mine = state.activities.by_author(user.id).await;
    let stats = user_service::stats(&mine);
    let tabs = activity_tabs(&mine, tab);

    let template = ProfilePage {
        nav,
        stats,
        tabs: TabsView::new(&tabs),
        activities: visible_activities(&tabs, mine),
        edit: ProfileEditView::new(editor),
        notice,
        user,
    };
    Ok((status, render(&template)?).into_response())
}

// GET /profile
pub async fn show_profile(
    State(state): State<AppState>,
    Query(ui): Query<ShellQuery>,
    Query(params): Query<ProfileParams>,
) -> AppResult<Response> {
    let mut editor = ProfileEditor::new();
    if params.edit.is_some() {
        editor.start(&state.profile.current().await);
    }
    let notice = params
        .updated
        .or_else(|| params.saved.map(|_| "Perfil atualizado com sucesso!".to_string()));
    render_profile(&state, &ui, params.tab.as_deref(), &editor, notice, StatusCode::OK).await
}

// POST /profile
pub async fn handle_profile(
    State(state): State<AppState>,
    Query(ui): Query<ShellQuery>,
    Form(data): Form<ProfileFormData>,
) -> AppResult<Response> {
    let mut editor = ProfileEditor::new();
    editor.start(&state.profile.current().await);
    editor.set(ProfileField::Name, data.name);
    editor.set(ProfileField::Email, data.email);

    match editor.save(&state.profile).await? {
        Some(_) => Ok(Redirect::to("/profile?saved=1").into_response()),
        None => {
            render_profile(&state, &ui, None, &editor, None, StatusCode::UNPROCESSABLE_ENTITY).await
        }
    }
}
