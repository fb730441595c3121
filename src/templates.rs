// src/templates.rs
use crate::{
    error::AppResult,
    forms::{
        account_form::{AccountField, AccountForm},
        activity_form::{ActivityField, ActivityForm},
        password_form::{PasswordField, PasswordForm},
        profile_form::{ProfileEditor, ProfileField},
    },
    models::{
        activity::Activity,
        user::{ProfileStats, User},
    },
    ui::{
        dropdown::MenuItem,
        select::Select,
        shell::{PageShell, NAV_LINKS},
        surface::DocumentSurface,
        switch::Switch,
        tabs::Tabs,
    },
};
use askama::Template;
use axum::response::Html;

/// Renderiza qualquer página; falhas viram `AppError::TemplateError`.
pub fn render<T: Template>(template: &T) -> AppResult<Html<String>> {
    Ok(Html(template.render()?))
}

// --- Vistas dos widgets (estado já resolvido para o HTML) ---

pub struct NavLinkView {
    pub href: String,
    pub label: &'static str,
    pub active: bool,
}

// Item do menu do perfil: a escolha passa por /menu/{key}, que fecha o
// menu e redireciona para o destino do item.
pub struct MenuLinkView {
    pub href: String,
    pub label: String,
}

impl MenuLinkView {
    fn from_item(item: &MenuItem, from: &str) -> Self {
        Self {
            href: format!("/menu/{}?from={}", item.key, urlencoding::encode(from)),
            label: item.label.clone(),
        }
    }
}

// Barra superior comum a todas as páginas autenticadas
pub struct NavView {
    pub links: Vec<NavLinkView>,
    pub user_name: String,
    pub initials: String,
    pub current_path: String,
    pub mobile_open: bool,
    pub account_open: bool,
    pub account_align: &'static str,
    pub account_items: Vec<MenuLinkView>,
    pub scroll_locked: bool,
}

impl NavView {
    pub fn new(shell: &mut PageShell, user: &User, surface: &DocumentSurface) -> Self {
        let current_path = shell.route().path();
        let links = NAV_LINKS
            .iter()
            .map(|link| NavLinkView {
                href: link.route.path(),
                label: link.label,
                active: shell.is_active(link.route),
            })
            .collect();
        Self {
            links,
            user_name: user.name.clone(),
            initials: user.initials(),
            mobile_open: shell.mobile_menu().is_open(),
            account_open: shell.profile_menu().is_open(),
            account_align: shell.profile_menu().align().css(),
            account_items: shell
                .profile_menu()
                .items()
                .iter()
                .map(|item| MenuLinkView::from_item(item, &current_path))
                .collect(),
            scroll_locked: surface.is_scroll_locked(),
            current_path,
        }
    }
}

pub struct OptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

pub struct SelectView {
    pub name: &'static str,
    pub display: String,
    pub required: bool,
    pub disabled: bool,
    pub options: Vec<OptionView>,
}

impl SelectView {
    pub fn new(name: &'static str, select: &Select) -> Self {
        Self {
            name,
            display: select.display_label().to_string(),
            required: select.is_required(),
            disabled: select.is_disabled(),
            options: select
                .options()
                .iter()
                .map(|o| OptionView {
                    value: o.value.clone(),
                    label: o.label.clone(),
                    selected: select.is_selected(&o.value),
                })
                .collect(),
        }
    }
}

pub struct TabView {
    pub key: String,
    pub label: String,
    pub active: bool,
}

pub struct TabsView {
    pub tabs: Vec<TabView>,
    pub panel: String, // vazio = nenhum painel visível
}

impl TabsView {
    pub fn new(tabs: &Tabs) -> Self {
        Self {
            tabs: tabs
                .keys()
                .iter()
                .map(|k| TabView {
                    key: k.key.clone(),
                    label: k.label.clone(),
                    active: tabs.is_active(&k.key),
                })
                .collect(),
            panel: tabs
                .visible_panel()
                .map(|k| k.key.clone())
                .unwrap_or_default(),
        }
    }
}

pub struct SwitchView {
    pub name: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub checked: bool,
}

impl SwitchView {
    pub fn new(name: &'static str, label: &'static str, description: &'static str, switch: &Switch) -> Self {
        Self {
            name,
            label,
            description,
            checked: switch.is_checked(),
        }
    }
}

// Valores e mensagens do formulário de atividade
pub struct ActivityFormView {
    pub action: String,
    pub is_edit: bool,
    pub has_changes: bool,
    pub locked: bool,
    pub title: String,
    pub description: String,
    pub tags: String,
    pub file_name: String,
    pub subject: SelectView,
    pub grade_level: SelectView,
    pub kind: SelectView,
    pub title_error: String,
    pub description_error: String,
    pub subject_error: String,
    pub grade_level_error: String,
    pub kind_error: String,
    pub file_error: String,
    pub form_error: String,
}

impl ActivityFormView {
    pub fn new(action: String, form: &ActivityForm) -> Self {
        let select = |name, field| {
            form.select(field)
                .map(|s| SelectView::new(name, s))
                .unwrap_or(SelectView {
                    name,
                    display: String::new(),
                    required: false,
                    disabled: false,
                    options: Vec::new(),
                })
        };
        Self {
            action,
            is_edit: form.editing_id().is_some(),
            has_changes: form.has_changes(),
            locked: form.is_locked(),
            title: form.value(ActivityField::Title).to_string(),
            description: form.value(ActivityField::Description).to_string(),
            tags: form.value(ActivityField::Tags).to_string(),
            file_name: form.file().map(|f| f.name.clone()).unwrap_or_default(),
            subject: select("subject", ActivityField::Subject),
            grade_level: select("grade_level", ActivityField::GradeLevel),
            kind: select("activity_type", ActivityField::Kind),
            title_error: form.error_message(ActivityField::Title),
            description_error: form.error_message(ActivityField::Description),
            subject_error: form.error_message(ActivityField::Subject),
            grade_level_error: form.error_message(ActivityField::GradeLevel),
            kind_error: form.error_message(ActivityField::Kind),
            file_error: form.error_message(ActivityField::File),
            form_error: form.error_message(ActivityField::Form),
        }
    }
}

// --- Páginas ---

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage {
    pub error: Option<String>,
    pub email: String,
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage {
    pub nav: NavView,
    pub first_name: String,
    pub recent: Vec<Activity>,
    pub stats: ProfileStats,
}

#[derive(Template)]
#[template(path = "search.html")]
pub struct SearchPage {
    pub nav: NavView,
    pub term: String,
    pub subject: SelectView,
    pub grade_level: SelectView,
    pub kind: SelectView,
    pub filters_open: bool,
    pub filters_side: &'static str,
    pub has_filters: bool,
    pub clear_filters_href: String,
    pub filters_dismiss_href: String,
    pub filters_close_href: String,
    pub results: Vec<Activity>,
}

#[derive(Template)]
#[template(path = "activity.html")]
pub struct ActivityPage {
    pub nav: NavView,
    pub activity: Activity,
    pub is_owner: bool,
    pub downloaded: bool,
}

#[derive(Template)]
#[template(path = "submit.html")]
pub struct SubmitPage {
    pub nav: NavView,
    pub form: ActivityFormView,
}

#[derive(Template)]
#[template(path = "submit_success.html")]
pub struct SubmitSuccessPage {
    pub nav: NavView,
    pub activity: Activity,
}

#[derive(Template)]
#[template(path = "edit_activity.html")]
pub struct EditActivityPage {
    pub nav: NavView,
    pub activity_id: u32,
    pub form: ActivityFormView,
    pub discard_open: bool, // modal "descartar alterações?"
}

pub struct ProfileEditView {
    pub editing: bool,
    pub name: String,
    pub email: String,
    pub name_error: String,
    pub email_error: String,
}

impl ProfileEditView {
    pub fn new(editor: &ProfileEditor) -> Self {
        Self {
            editing: editor.is_editing(),
            name: editor.value(ProfileField::Name).to_string(),
            email: editor.value(ProfileField::Email).to_string(),
            name_error: editor.error_message(ProfileField::Name),
            email_error: editor.error_message(ProfileField::Email),
        }
    }
}

#[derive(Template)]
#[template(path = "profile.html")]
pub struct ProfilePage {
    pub nav: NavView,
    pub user: User,
    pub stats: ProfileStats,
    pub tabs: TabsView,
    pub activities: Vec<Activity>,
    pub edit: ProfileEditView,
    pub notice: Option<String>,
}

pub struct AccountView {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub school: String,
    pub city: String,
    pub first_name_error: String,
    pub last_name_error: String,
    pub email_error: String,
    pub school_error: String,
    pub city_error: String,
}

impl AccountView {
    pub fn new(form: &AccountForm) -> Self {
        Self {
            first_name: form.value(AccountField::FirstName).to_string(),
            last_name: form.value(AccountField::LastName).to_string(),
            email: form.value(AccountField::Email).to_string(),
            school: form.value(AccountField::School).to_string(),
            city: form.value(AccountField::City).to_string(),
            first_name_error: form.error_message(AccountField::FirstName),
            last_name_error: form.error_message(AccountField::LastName),
            email_error: form.error_message(AccountField::Email),
            school_error: form.error_message(AccountField::School),
            city_error: form.error_message(AccountField::City),
        }
    }
}

pub struct PasswordView {
    pub current_error: String,
    pub new_error: String,
    pub confirm_error: String,
}

impl PasswordView {
    pub fn new(form: &PasswordForm) -> Self {
        Self {
            current_error: form.error_message(PasswordField::Current),
            new_error: form.error_message(PasswordField::New),
            confirm_error: form.error_message(PasswordField::Confirm),
        }
    }
}

#[derive(Template)]
#[template(path = "settings.html")]
pub struct SettingsPage {
    pub nav: NavView,
    pub tabs: TabsView,
    pub account: AccountView,
    pub password: PasswordView,
    pub notifications: Vec<SwitchView>,
    pub visibility: SelectView,
    pub privacy: Vec<SwitchView>,
    pub notice: Option<String>,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundPage {
    pub nav: NavView,
    pub message: String,
}
