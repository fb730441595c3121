// src/web/search_handlers.rs
use crate::{
    error::AppResult,
    models::activity::{ActivityType, GradeLevel, Subject},
    services::activity_service::SearchQuery,
    state::AppState,
    templates::{render, SearchPage, SelectView},
    ui::{
        overlay::{Sheet, Side},
        select::Select,
        shell::Route,
        surface::{route_event, DocumentSurface},
    },
    web::page::{self, ShellQuery},
};
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub grade: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub filters: String,
}

fn non_empty(value: &str) -> Option<&str> {
    Some(value.trim()).filter(|v| !v.is_empty())
}

/// `/search` com os pares indicados, omitindo os vazios.
fn search_href(pairs: &[(&str, &str)]) -> String {
    let query: Vec<String> = pairs
        .iter()
        .filter_map(|(key, value)| {
            non_empty(value).map(|v| format!("{}={}", key, urlencoding::encode(v)))
        })
        .collect();
    if query.is_empty() {
        "/search".to_string()
    } else {
        format!("/search?{}", query.join("&"))
    }
}

// GET /search
pub async fn show_search(
    State(state): State<AppState>,
    Query(ui): Query<ShellQuery>,
    Query(params): Query<SearchParams>,
) -> AppResult<Response> {
    let (nav, _) = page::shell(&state, Route::Search, &ui).await;

    // Valores desconhecidos ficam "sem seleção" (= todos)
    let subject = Select::new(Subject::options())
        .with_placeholder("Todas as matérias")
        .with_value(non_empty(&params.subject));
    let grade_level = Select::new(GradeLevel::options())
        .with_placeholder("Todas as séries")
        .with_value(non_empty(&params.grade));
    let kind = Select::new(ActivityType::options())
        .with_placeholder("Todos os tipos")
        .with_value(non_empty(&params.kind));

    let query = SearchQuery {
        term: params.q.clone(),
        subject: subject.value().and_then(Subject::from_value),
        grade_level: grade_level.value().and_then(GradeLevel::from_value),
        kind: kind.value().and_then(ActivityType::from_value),
    };
    let results = state.activities.search(&query).await;
    tracing::debug!("GET /search: {} resultado(s)", results.len());

    let mut surface = DocumentSurface::new();
    let mut sheet = Sheet::new(Side::Right);
    sheet.set_open(params.filters == "open", &mut surface);
    if let Some(event) = ui.event() {
        route_event(&mut surface, &event, &mut [&mut sheet]);
    }
    let filters_open = sheet.is_open();
    sheet.unmount(&mut surface);

    let clear_filters_href = search_href(&[("q", params.q.as_str())]);
    let current = [
        ("q", params.q.as_str()),
        ("subject", subject.value().unwrap_or_default()),
        ("grade", grade_level.value().unwrap_or_default()),
        ("type", kind.value().unwrap_or_default()),
        ("filters", "open"),
    ];
    let filters_dismiss_href = format!("{}&dismiss=outside", search_href(&current));
    let filters_close_href = format!("{}&dismiss=escape", search_href(&current));

    let template = SearchPage {
        nav,
        term: params.q,
        subject: SelectView::new("subject", &subject),
        grade_level: SelectView::new("grade", &grade_level),
        kind: SelectView::new("type", &kind),
        filters_open,
        filters_side: sheet.side().css(),
        has_filters: query.has_filters(),
        clear_filters_href,
        filters_dismiss_href,
        filters_close_href,
        results,
    };
    Ok(render(&template)?.into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_href_skips_blank_pairs() {
        assert_eq!(search_href(&[("q", "  ")]), "/search");
        assert_eq!(
            search_href(&[("q", "frações 4º"), ("subject", ""), ("filters", "open")]),
            "/search?q=fra%C3%A7%C3%B5es%204%C2%BA&filters=open"
        );
    }
}
