// src/web/activity_handlers.rs
use crate::{
    error::{AppError, AppResult},
    forms::{
        activity_form::{ActivityField, ActivityForm},
        validation::FormError,
    },
    models::{
        activity::{Activity, Upload},
        user::User,
    },
    services::activity_service::SubmitError,
    state::AppState,
    templates::{
        render, ActivityFormView, ActivityPage, EditActivityPage, NotFoundPage, SubmitPage,
        SubmitSuccessPage,
    },
    ui::{overlay::Modal, shell::Route, surface::DocumentSurface},
    web::page::{self, ShellQuery},
};
use axum::{
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

// Campos do formulário de atividade (urlencoded). O ficheiro chega só
// como metadados: nome e tamanho em bytes.
#[derive(Debug, Default, Deserialize)]
pub struct ActivityFormData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub grade_level: String,
    #[serde(default)]
    pub activity_type: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub file_size: String,
    #[serde(default)]
    pub intent: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ActivityParams {
    #[serde(default)]
    pub downloaded: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SubmitParams {
    #[serde(default)]
    pub again: Option<String>,
}

/// Copia o POST para o formulário: texto direto, listas pelo Select.
fn apply(form: &mut ActivityForm, data: &ActivityFormData, surface: &mut DocumentSurface) {
    form.set_text(ActivityField::Title, data.title.as_str());
    form.set_text(ActivityField::Description, data.description.as_str());
    form.set_text(ActivityField::Tags, data.tags.as_str());
    form.apply_choice(ActivityField::Subject, &data.subject, surface);
    form.apply_choice(ActivityField::GradeLevel, &data.grade_level, surface);
    form.apply_choice(ActivityField::Kind, &data.activity_type, surface);

    let name = data.file_name.trim();
    if !name.is_empty() {
        match data.file_size.trim().parse::<u64>() {
            Ok(size) => form.set_file(Some(Upload::new(name, size))),
            Err(_) => form.reject_file(FormError::InvalidFileSize),
        }
    }
}

fn failure_status(error: &SubmitError) -> StatusCode {
    match error {
        SubmitError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        SubmitError::InProgress | SubmitError::NotSubmitting => StatusCode::CONFLICT,
        SubmitError::NotFound(_) => StatusCode::NOT_FOUND,
    }
}

async fn not_found(state: &AppState, ui: &ShellQuery, id: u32) -> AppResult<Response> {
    tracing::warn!("Atividade {} não encontrada", id);
    let (nav, _) = page::shell(state, Route::Search, ui).await;
    let template = NotFoundPage {
        nav,
        message: format!("A atividade #{} não existe ou foi removida.", id),
    };
    Ok((StatusCode::NOT_FOUND, render(&template)?).into_response())
}

/// Atividade do utilizador atual; de outros autores não pode ser editada.
async fn owned_activity(state: &AppState, user: &User, id: u32) -> Option<Activity> {
    state
        .activities
        .get(id)
        .await
        .filter(|a| a.author.id == user.id)
}

// GET /activity/{id}
pub async fn show_activity(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Query(ui): Query<ShellQuery>,
    Query(params): Query<ActivityParams>,
) -> AppResult<Response> {
    if state.activities.record_view(id).await.is_none() {
        return not_found(&state, &ui, id).await;
    }
    let Some(activity) = state.activities.get(id).await else {
        return not_found(&state, &ui, id).await;
    };

    let (nav, user) = page::shell(&state, Route::Activity(id), &ui).await;
    let template = ActivityPage {
        nav,
        is_owner: activity.author.id == user.id,
        downloaded: params.downloaded.is_some(),
        activity,
    };
    Ok(render(&template)?.into_response())
}

// POST /activity/{id}/download
pub async fn handle_download(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> AppResult<Redirect> {
    let downloads = state
        .activities
        .record_download(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("atividade {}", id)))?;
    tracing::info!("⬇️ Download da atividade {} (total {})", id, downloads);
    Ok(Redirect::to(&format!("/activity/{}?downloaded=1", id)))
}

// GET /submit
pub async fn show_submit(
    State(state): State<AppState>,
    Query(ui): Query<ShellQuery>,
    Query(params): Query<SubmitParams>,
) -> AppResult<Response> {
    let (nav, user) = page::shell(&state, Route::Submit, &ui).await;
    let mut surface = DocumentSurface::new();
    let mut form = ActivityForm::create(user.author());
    if params.again.is_some() {
        tracing::debug!("GET /submit: nova atividade após envio");
        form.reset(&mut surface);
    }

    let template = SubmitPage {
        nav,
        form: ActivityFormView::new("/submit".to_string(), &form),
    };
    Ok(render(&template)?.into_response())
}

// POST /submit
pub async fn handle_submit(
    State(state): State<AppState>,
    Query(ui): Query<ShellQuery>,
    Form(data): Form<ActivityFormData>,
) -> AppResult<Response> {
    let (nav, user) = page::shell(&state, Route::Submit, &ui).await;
    let mut surface = DocumentSurface::new();
    let mut form = ActivityForm::create(user.author());
    apply(&mut form, &data, &mut surface);

    let result = form.submit(state.submitter.as_ref()).await;
    form.unmount(&mut surface);

    match result {
        Ok(activity) => {
            let template = SubmitSuccessPage { nav, activity };
            Ok(render(&template)?.into_response())
        }
        Err(e) => {
            let template = SubmitPage {
                nav,
                form: ActivityFormView::new("/submit".to_string(), &form),
            };
            Ok((failure_status(&e), render(&template)?).into_response())
        }
    }
}

// GET /edit-activity/{id}
pub async fn show_edit(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Query(ui): Query<ShellQuery>,
) -> AppResult<Response> {
    let (nav, user) = page::shell(&state, Route::EditActivity(id), &ui).await;
    let Some(activity) = owned_activity(&state, &user, id).await else {
        return not_found(&state, &ui, id).await;
    };

    let form = ActivityForm::edit(activity);
    let template = EditActivityPage {
        nav,
        activity_id: id,
        form: ActivityFormView::new(format!("/edit-activity/{}", id), &form),
        discard_open: false,
    };
    Ok(render(&template)?.into_response())
}

// POST /edit-activity/{id}
pub async fn handle_edit(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Query(ui): Query<ShellQuery>,
    Form(data): Form<ActivityFormData>,
) -> AppResult<Response> {
    let (nav, user) = page::shell(&state, Route::EditActivity(id), &ui).await;
    let Some(activity) = owned_activity(&state, &user, id).await else {
        return not_found(&state, &ui, id).await;
    };

    let mut surface = DocumentSurface::new();
    let mut form = ActivityForm::edit(activity);
    apply(&mut form, &data, &mut surface);
    let action = format!("/edit-activity/{}", id);

    if data.intent == "cancel" {
        if !form.has_changes() {
            form.unmount(&mut surface);
            return Ok(Redirect::to("/profile").into_response());
        }
        // alterações por guardar: pede confirmação com o formulário bloqueado
        let mut modal = Modal::new();
        modal.open(&mut surface);
        form.set_locked(modal.is_open(), &mut surface);
        let template = EditActivityPage {
            nav,
            activity_id: id,
            form: ActivityFormView::new(action, &form),
            discard_open: modal.is_open(),
        };
        modal.unmount(&mut surface);
        form.unmount(&mut surface);
        return Ok(render(&template)?.into_response());
    }

    let result = form.submit(state.submitter.as_ref()).await;
    form.unmount(&mut surface);

    match result {
        Ok(updated) => {
            let notice = format!("Atividade \"{}\" atualizada e enviada para análise.", updated.title);
            Ok(Redirect::to(&format!(
                "/profile?tab=pending&updated={}",
                urlencoding::encode(&notice)
            ))
            .into_response())
        }
        Err(e) => {
            let template = EditActivityPage {
                nav,
                activity_id: id,
                form: ActivityFormView::new(action, &form),
                discard_open: false,
            };
            Ok((failure_status(&e), render(&template)?).into_response())
        }
    }
}

// GET /api/activities/{id}
pub async fn api_activity(State(state): State<AppState>, Path(id): Path<u32>) -> Response {
    match state.activities.get(id).await {
        Some(activity) => Json(activity).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("Atividade {} não encontrada", id) })),
        )
            .into_response(),
    }
}
