// src/web/settings_handlers.rs
use crate::{
    error::AppResult,
    forms::{
        account_form::{AccountField, AccountForm},
        password_form::PasswordForm,
    },
    models::settings::{NotificationSettings, PrivacySettings, ProfileVisibility},
    state::AppState,
    templates::{render, AccountView, PasswordView, SelectView, SettingsPage, SwitchView, TabsView},
    ui::{select::Select, shell::Route, switch::Switch, tabs::Tabs},
    web::page::{self, ShellQuery},
};
use axum::{
    extract::{Form, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

const SETTINGS_TABS: &[(&str, &str)] = &[
    ("account", "Conta"),
    ("security", "Segurança"),
    ("notifications", "Notificações"),
    ("privacy", "Privacidade"),
];

#[derive(Debug, Default, Deserialize)]
pub struct SettingsParams {
    #[serde(default)]
    pub tab: Option<String>,
    #[serde(default)]
    pub notice: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AccountFormData {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub city: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct PasswordFormData {
    #[serde(default)]
    pub current_password: String,
    #[serde(default)]
    pub new_password: String,
    #[serde(default)]
    pub confirm_password: String,
}

// Checkbox HTML: presente ("on") = ligado, ausente = desligado
#[derive(Debug, Default, Deserialize)]
pub struct NotificationFormData {
    #[serde(default)]
    pub email_notifications: Option<String>,
    #[serde(default)]
    pub new_activity_notifications: Option<String>,
    #[serde(default)]
    pub download_notifications: Option<String>,
    #[serde(default)]
    pub weekly_digest: Option<String>,
    #[serde(default)]
    pub marketing_emails: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PrivacyFormData {
    #[serde(default)]
    pub profile_visibility: String,
    #[serde(default)]
    pub show_email: Option<String>,
    #[serde(default)]
    pub show_school: Option<String>,
}

fn redirect_with_notice(tab: &str, notice: &str) -> Redirect {
    Redirect::to(&format!(
        "/settings?tab={}&notice={}",
        tab,
        urlencoding::encode(notice)
    ))
}

fn notification_switches(n: &NotificationSettings) -> Vec<SwitchView> {
    vec![
        SwitchView::new(
            "email_notifications",
            "Notificações por Email",
            "Receber notificações gerais por email",
            &Switch::new(n.email_notifications),
        ),
        SwitchView::new(
            "new_activity_notifications",
            "Novas Atividades",
            "Notificar quando novas atividades forem publicadas na sua área",
            &Switch::new(n.new_activity_notifications),
        ),
        SwitchView::new(
            "download_notifications",
            "Downloads das Minhas Atividades",
            "Notificar quando suas atividades forem baixadas",
            &Switch::new(n.download_notifications),
        ),
        SwitchView::new(
            "weekly_digest",
            "Resumo Semanal",
            "Receber um resumo semanal das suas atividades e estatísticas",
            &Switch::new(n.weekly_digest),
        ),
        SwitchView::new(
            "marketing_emails",
            "Emails Promocionais",
            "Receber informações sobre novos recursos e atualizações",
            &Switch::new(n.marketing_emails),
        ),
    ]
}

fn privacy_switches(p: &PrivacySettings) -> Vec<SwitchView> {
    vec![
        SwitchView::new(
            "show_email",
            "Mostrar Email no Perfil",
            "Permitir que outros usuários vejam seu email",
            &Switch::new(p.show_email),
        ),
        SwitchView::new(
            "show_school",
            "Mostrar Escola no Perfil",
            "Exibir o nome da sua escola no seu perfil público",
            &Switch::new(p.show_school),
        ),
    ]
}

fn visibility_select(value: ProfileVisibility) -> Select {
    Select::new(ProfileVisibility::options()).with_value(Some(value.value()))
}

async fn render_settings(
    state: &AppState,
    ui: &ShellQuery,
    tab: &str,
    account: Option<&AccountForm>,
    password: &PasswordForm,
    notice: Option<String>,
    status: StatusCode,
) -> AppResult<Response> {
    let (nav, user) = page::shell(state, Route::Settings, ui).await;
    let account = match account {
        Some(form) => AccountView::new(form),
        None => AccountView::new(&AccountForm::from_user(&user)),
    };
    let notifications = state.settings.notifications().await;
    let privacy = state.settings.privacy().await;

    let mut tabs = Tabs::from_pairs(SETTINGS_TABS, "account");
    if let Err(e) = tabs.select(tab, |key| tracing::debug!("Aba de configurações: {}", key)) {
        // aba desconhecida: nenhum painel
        tracing::warn!("⚠️ {}", e);
        tabs.set_value(None);
    }

    let template = SettingsPage {
        nav,
        tabs: TabsView::new(&tabs),
        account,
        password: PasswordView::new(password),
        notifications: notification_switches(&notifications),
        visibility: SelectView::new(
            "profile_visibility",
            &visibility_select(privacy.profile_visibility),
        ),
        privacy: privacy_switches(&privacy),
        notice,
    };
    Ok((status, render(&template)?).into_response())
}

// GET /settings
pub async fn show_settings(
    State(state): State<AppState>,
    Query(ui): Query<ShellQuery>,
    Query(params): Query<SettingsParams>,
) -> AppResult<Response> {
    let tab = params.tab.as_deref().unwrap_or("account");
    render_settings(
        &state,
        &ui,
        tab,
        None,
        &PasswordForm::default(),
        params.notice,
        StatusCode::OK,
    )
    .await
}

// POST /settings/account
pub async fn handle_account(
    State(state): State<AppState>,
    Query(ui): Query<ShellQuery>,
    Form(data): Form<AccountFormData>,
) -> AppResult<Response> {
    let mut form = AccountForm::default();
    form.set(AccountField::FirstName, &data.first_name);
    form.set(AccountField::LastName, &data.last_name);
    form.set(AccountField::Email, &data.email);
    form.set(AccountField::School, &data.school);
    form.set(AccountField::City, &data.city);

    match form.submit() {
        Some(update) => {
            state.profile.update_account(&update).await?;
            Ok(redirect_with_notice("account", "Informações da conta salvas com sucesso!").into_response())
        }
        None => {
            render_settings(
                &state,
                &ui,
                "account",
                Some(&form),
                &PasswordForm::default(),
                None,
                StatusCode::UNPROCESSABLE_ENTITY,
            )
            .await
        }
    }
}

// POST /settings/password
pub async fn handle_password(
    State(state): State<AppState>,
    Query(ui): Query<ShellQuery>,
    Form(data): Form<PasswordFormData>,
) -> AppResult<Response> {
    let mut form = PasswordForm::new(
        &data.current_password,
        &data.new_password,
        &data.confirm_password,
    );
    match form.submit() {
        Some(change) => {
            state.settings.change_password(&change).await?;
            Ok(redirect_with_notice("security", "Senha alterada com sucesso!").into_response())
        }
        None => {
            render_settings(
                &state,
                &ui,
                "security",
                None,
                &form,
                None,
                StatusCode::UNPROCESSABLE_ENTITY,
            )
            .await
        }
    }
}

// POST /settings/notifications
pub async fn handle_notifications(
    State(state): State<AppState>,
    Form(data): Form<NotificationFormData>,
) -> AppResult<Redirect> {
    let current = state.settings.notifications().await;
    let mut updated = current;

    // cada interruptor emite o novo valor apenas quando muda
    Switch::new(current.email_notifications)
        .sync(data.email_notifications.is_some(), |v| updated.email_notifications = v);
    Switch::new(current.new_activity_notifications).sync(
        data.new_activity_notifications.is_some(),
        |v| updated.new_activity_notifications = v,
    );
    Switch::new(current.download_notifications)
        .sync(data.download_notifications.is_some(), |v| updated.download_notifications = v);
    Switch::new(current.weekly_digest)
        .sync(data.weekly_digest.is_some(), |v| updated.weekly_digest = v);
    Switch::new(current.marketing_emails)
        .sync(data.marketing_emails.is_some(), |v| updated.marketing_emails = v);

    state.settings.save_notifications(updated).await?;
    Ok(redirect_with_notice(
        "notifications",
        "Configurações de notificação salvas com sucesso!",
    ))
}

// POST /settings/privacy
pub async fn handle_privacy(
    State(state): State<AppState>,
    Form(data): Form<PrivacyFormData>,
) -> AppResult<Redirect> {
    let current = state.settings.privacy().await;
    let mut updated = current;

    let select = visibility_select(current.profile_visibility).with_value(Some(data.profile_visibility.as_str()));
    // valor desconhecido: mantém a visibilidade atual
    if let Some(visibility) = select.value().and_then(ProfileVisibility::from_value) {
        updated.profile_visibility = visibility;
    }
    Switch::new(current.show_email).sync(data.show_email.is_some(), |v| updated.show_email = v);
    Switch::new(current.show_school).sync(data.show_school.is_some(), |v| updated.show_school = v);

    state.settings.save_privacy(updated).await?;
    Ok(redirect_with_notice(
        "privacy",
        "Configurações de privacidade salvas com sucesso!",
    ))
}
