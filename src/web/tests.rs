// src/web/tests.rs
use crate::{config::Config, state::AppState, web::routes::create_app};
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use tower::ServiceExt;

fn app() -> Router {
    create_app(AppState::seeded(Config::default()))
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn get(app: &Router, path: &str, cookie: &str) -> Response {
    let request = Request::get(path)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn post_form(app: &Router, path: &str, cookie: &str, fields: &[(&str, &str)]) -> Response {
    let body = fields
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    let request = Request::post(path)
        .header(header::COOKIE, cookie)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

/// Faz login e devolve o cookie da sessão ("id=...").
async fn login(app: &Router) -> String {
    let response = post_form(
        app,
        "/",
        "",
        &[("email", "maria.silva@escola.gov.br"), ("password", "segredo")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/home");
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .unwrap()
        .to_string()
}

fn valid_activity<'a>(title: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("title", title),
        ("description", "Descrição com mais de vinte caracteres"),
        ("subject", "matematica"),
        ("grade_level", "5ano"),
        ("activity_type", "exercicio"),
        ("tags", "frações, decimais"),
        ("file_name", "fracoes.pdf"),
        ("file_size", "2097152"),
    ]
}

#[tokio::test]
async fn protected_pages_redirect_to_login() {
    let app = app();
    for path in ["/home", "/search", "/submit", "/profile", "/settings", "/activity/1"] {
        let response = get(&app, path, "").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{}", path);
        assert_eq!(location(&response), "/");
    }
}

#[tokio::test]
async fn empty_login_rerenders_with_error() {
    let app = app();
    let response = post_form(&app, "/", "", &[("email", ""), ("password", "")]).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Preencha o email e a senha"));
}

#[tokio::test]
async fn login_session_and_logout() {
    let app = app();
    let cookie = login(&app).await;

    let response = get(&app, "/home", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Bem-vindo ao EducaFácil"));

    let response = get(&app, "/", &cookie).await;
    assert_eq!(location(&response), "/home");

    let response = get(&app, "/logout", &cookie).await;
    assert_eq!(location(&response), "/");
    let response = get(&app, "/home", &cookie).await;
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn search_filters_and_fails_closed_on_unknown_values() {
    let app = app();
    let cookie = login(&app).await;

    let html = body_text(get(&app, "/search?q=TABUADA", &cookie).await).await;
    assert!(html.contains("Exercícios de Multiplicação"));
    assert!(!html.contains("Sistema Solar"));

    // matéria desconhecida = sem filtro
    let html = body_text(get(&app, "/search?subject=alquimia", &cookie).await).await;
    assert!(html.contains("Exercícios de Multiplicação"));
    assert!(html.contains("Sistema Solar"));
    // atividades em análise nunca aparecem na busca
    assert!(!html.contains("Experimentos de Ciências"));

    let html = body_text(get(&app, "/search?subject=ciencias", &cookie).await).await;
    assert!(html.contains("Sistema Solar"));
    assert!(!html.contains("Exercícios de Multiplicação"));

    let html = body_text(get(&app, "/search?filters=open", &cookie).await).await;
    assert!(html.contains(r#"aria-label="Filtros""#));
}

#[tokio::test]
async fn activity_detail_download_and_json() {
    let app = app();
    let cookie = login(&app).await;

    let response = get(&app, "/activity/999", &cookie).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(&app, "/activity/2", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Plano de Aula - Frações"));

    let response = post_form(&app, "/activity/2/download", &cookie, &[]).await;
    assert_eq!(location(&response), "/activity/2?downloaded=1");

    let response = get(&app, "/api/activities/2", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["downloads"], 90);
    assert_eq!(json["views"], 611);

    let response = get(&app, "/api/activities/999", &cookie).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn submit_validates_then_succeeds() {
    let app = app();
    let cookie = login(&app).await;

    let mut fields = valid_activity("Abcd");
    let response = post_form(&app, "/submit", &cookie, &fields).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(response)
        .await
        .contains("Título deve ter pelo menos 5 caracteres"));

    fields[0] = ("title", "Atividade X");
    fields.retain(|(k, _)| *k != "file_name");
    let response = post_form(&app, "/submit", &cookie, &fields).await;
    assert!(body_text(response).await.contains("Selecione um arquivo"));

    let response = post_form(&app, "/submit", &cookie, &valid_activity("Atividade X")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Atividade Enviada"));

    let response = get(&app, "/api/activities/7", &cookie).await;
    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["title"], "Atividade X");
    assert_eq!(json["status"], "Em Análise");
    assert_eq!(json["file_format"], "PDF");
}

#[tokio::test]
async fn edit_resets_status_and_redirects_to_profile() {
    let app = app();
    let cookie = login(&app).await;

    let response = get(&app, "/edit-activity/1", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Exercícios de Multiplicação"));

    // atividade de outro autor
    let response = get(&app, "/edit-activity/5", &cookie).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let mut fields = valid_activity("Tabuada do 7 - revisada");
    fields.retain(|(k, _)| *k != "file_name" && *k != "file_size");
    let response = post_form(&app, "/edit-activity/1", &cookie, &fields).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(location(&response).starts_with("/profile?tab=pending&updated="));

    let response = get(&app, "/api/activities/1", &cookie).await;
    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["status"], "Em Análise");
    assert_eq!(json["file_name"], "tabuada-7-exercicios.pdf");
}

#[tokio::test]
async fn cancelling_edit_with_changes_asks_for_confirmation() {
    let app = app();
    let cookie = login(&app).await;

    let mut fields = valid_activity("Outro título qualquer");
    fields.push(("intent", "cancel"));
    let response = post_form(&app, "/edit-activity/2", &cookie, &fields).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Descartar alterações?"));
}

#[tokio::test]
async fn password_errors_are_reported_per_field() {
    let app = app();
    let cookie = login(&app).await;

    let response = post_form(
        &app,
        "/settings/password",
        &cookie,
        &[
            ("current_password", "antiga123"),
            ("new_password", "abc"),
            ("confirm_password", "abd"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_text(response).await;
    assert!(html.contains("A nova senha deve ter pelo menos 8 caracteres"));
    assert!(html.contains("As senhas não coincidem"));

    let response = post_form(
        &app,
        "/settings/password",
        &cookie,
        &[
            ("current_password", "antiga123"),
            ("new_password", "nova-senha-1"),
            ("confirm_password", "nova-senha-1"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(location(&response).starts_with("/settings?tab=security&notice="));
}

#[tokio::test]
async fn settings_tabs_and_switches() {
    let app = app();
    let cookie = login(&app).await;

    let html = body_text(get(&app, "/settings?tab=inexistente", &cookie).await).await;
    assert!(!html.contains(r#"role="tabpanel""#));

    let response = post_form(&app, "/settings/notifications", &cookie, &[("marketing_emails", "on")]).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let html = body_text(get(&app, "/settings?tab=notifications", &cookie).await).await;
    assert!(html.contains(r#"name="marketing_emails" checked"#));
    assert!(!html.contains(r#"name="email_notifications" checked"#));
}

#[tokio::test]
async fn profile_edit_toggle() {
    let app = app();
    let cookie = login(&app).await;

    let html = body_text(get(&app, "/profile?edit=1", &cookie).await).await;
    assert!(html.contains(r#"action="/profile""#));

    let response = post_form(&app, "/profile", &cookie, &[("name", " "), ("email", "x@y")]).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(response).await.contains("Nome é obrigatório"));

    let response = post_form(
        &app,
        "/profile",
        &cookie,
        &[("name", "Profa. Maria Silva"), ("email", "maria@escola.gov.br")],
    )
    .await;
    assert_eq!(location(&response), "/profile?saved=1");
    let html = body_text(get(&app, "/profile?saved=1", &cookie).await).await;
    assert!(html.contains("Perfil atualizado com sucesso!"));
}

#[tokio::test]
async fn renaming_keeps_ownership_of_activities() {
    let app = app();
    let cookie = login(&app).await;

    let response = post_form(
        &app,
        "/profile",
        &cookie,
        &[("name", "Profa. Maria S."), ("email", "maria.silva@escola.gov.br")],
    )
    .await;
    assert_eq!(location(&response), "/profile?saved=1");

    let response = get(&app, "/edit-activity/1", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(get(&app, "/profile", &cookie).await).await;
    assert!(html.contains("Profa. Maria S."));
    assert!(html.contains("Todas (4)"));
}

#[tokio::test]
async fn blank_account_fields_are_rejected() {
    let app = app();
    let cookie = login(&app).await;

    let blank = [
        ("first_name", ""),
        ("last_name", " "),
        ("email", ""),
        ("school", ""),
        ("city", ""),
    ];
    let response = post_form(&app, "/settings/account", &cookie, &blank).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_text(response).await;
    assert!(html.contains("Email é obrigatório"));
    assert!(html.contains("Sobrenome é obrigatório"));

    let html = body_text(get(&app, "/settings?tab=account", &cookie).await).await;
    assert!(html.contains("maria.silva@escola.gov.br"));
}

#[tokio::test]
async fn malformed_file_size_is_a_field_error() {
    let app = app();
    let cookie = login(&app).await;

    let mut fields = valid_activity("Atividade com tamanho estranho");
    fields.retain(|(k, _)| *k != "file_size");
    fields.push(("file_size", "abc"));
    let response = post_form(&app, "/submit", &cookie, &fields).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(response).await.contains("Tamanho de arquivo inválido"));
}

#[tokio::test]
async fn dismiss_query_closes_open_overlays() {
    let app = app();
    let cookie = login(&app).await;

    let html = body_text(get(&app, "/home?account=open", &cookie).await).await;
    assert!(html.contains(r#"role="menu""#));
    assert!(html.contains(r#"href="/menu/settings?from=%2Fhome""#));

    let html = body_text(get(&app, "/home?account=open&dismiss=outside", &cookie).await).await;
    assert!(!html.contains(r#"role="menu""#));

    // Escape fecha o menu móvel mas não o menu do perfil
    let html = body_text(get(&app, "/home?menu=open&account=open&dismiss=escape", &cookie).await).await;
    assert!(html.contains(r#"role="menu""#));
    assert!(!html.contains(r#"class="no-scroll""#));

    let html = body_text(get(&app, "/search?filters=open", &cookie).await).await;
    assert!(html.contains(r#"aria-label="Filtros""#));
    let html = body_text(get(&app, "/search?filters=open&dismiss=outside", &cookie).await).await;
    assert!(!html.contains(r#"aria-label="Filtros""#));
}

#[tokio::test]
async fn profile_menu_items_redirect_through_menu_route() {
    let app = app();
    let cookie = login(&app).await;

    let response = get(&app, "/menu/settings?from=/home", &cookie).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/settings");

    let response = get(&app, "/menu/logout?from=/search", &cookie).await;
    assert_eq!(location(&response), "/logout");

    let response = get(&app, "/menu/admin?from=/home", &cookie).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn discard_dialog_locks_the_form() {
    let app = app();
    let cookie = login(&app).await;

    let mut fields = valid_activity("Outro título qualquer");
    fields.push(("intent", "cancel"));
    let html = body_text(post_form(&app, "/edit-activity/2", &cookie, &fields).await).await;
    assert!(html.contains("<fieldset disabled>"));
    assert!(html.contains("Há alterações não salvas."));
    assert!(html.contains(r#"id="subject" name="subject" required disabled"#));
}
