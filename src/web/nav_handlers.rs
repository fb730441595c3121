// src/web/nav_handlers.rs
use crate::{
    error::{AppError, AppResult},
    ui::{
        shell::{PageShell, Route},
        surface::DocumentSurface,
        UiError,
    },
};
use axum::{
    extract::{Path, Query},
    response::Redirect,
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct MenuParams {
    #[serde(default)]
    pub from: String,
}

// GET /menu/{key}?from=/pagina — escolha no menu do perfil
pub async fn choose_menu_item(
    Path(key): Path<String>,
    Query(params): Query<MenuParams>,
) -> AppResult<Redirect> {
    let from = Route::parse(&params.from).unwrap_or(Route::Home);
    let mut surface = DocumentSurface::new();
    let mut shell = PageShell::new(from);
    shell.profile_menu().activate(&mut surface);

    let chosen = shell.choose_profile_item(&key, &mut surface);
    shell.unmount(&mut surface);

    match chosen {
        Ok(href) => {
            let target = href.unwrap_or_else(|| from.path());
            tracing::debug!("Menu do perfil: '{}' em {} -> {}", key, from, target);
            Ok(Redirect::to(&target))
        }
        Err(UiError::UnknownItem(key)) => {
            Err(AppError::NotFound(format!("item de menu '{}'", key)))
        }
        Err(e) => Err(AppError::NotFound(e.to_string())),
    }
}
