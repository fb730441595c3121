// src/web/page.rs
use crate::{
    models::user::User,
    state::AppState,
    templates::NavView,
    ui::{
        shell::{PageShell, Route},
        surface::{DocumentSurface, InputEvent, Key},
    },
};
use serde::Deserialize;

// Estado dos menus da barra vindo do URL (?menu=open, ?account=open).
// `dismiss` repete o evento global que fecha o que estiver aberto:
// `outside` (clique no overlay/página) ou `escape`.
#[derive(Debug, Default, Deserialize)]
pub struct ShellQuery {
    #[serde(default)]
    pub menu: Option<String>,
    #[serde(default)]
    pub account: Option<String>,
    #[serde(default)]
    pub dismiss: Option<String>,
}

impl ShellQuery {
    fn is_open(value: &Option<String>) -> bool {
        value.as_deref() == Some("open")
    }

    pub fn event(&self) -> Option<InputEvent> {
        match self.dismiss.as_deref()? {
            "outside" => Some(InputEvent::pointer_down_outside_all()),
            "escape" => Some(InputEvent::KeyDown(Key::Escape)),
            other => {
                tracing::debug!("Evento de dispensa desconhecido: '{}'", other);
                None
            }
        }
    }
}

/// Monta a barra de navegação da página e devolve também o utilizador atual.
pub async fn shell(state: &AppState, route: Route, ui: &ShellQuery) -> (NavView, User) {
    let user = state.profile.current().await;
    let mut surface = DocumentSurface::new();
    let mut shell = PageShell::new(route);

    if ShellQuery::is_open(&ui.menu) {
        shell.mobile_menu().open(&mut surface);
    }
    if ShellQuery::is_open(&ui.account) {
        shell.profile_menu().activate(&mut surface);
    }
    if let Some(event) = ui.event() {
        let closed = shell.handle_event(&mut surface, &event);
        tracing::debug!("Evento {:?} fechou {} menu(s)", event, closed);
    }

    let nav = NavView::new(&mut shell, &user, &surface);
    shell.unmount(&mut surface);
    if surface.listener_count() > 0 {
        tracing::error!("Listeners por remover após desmontar a barra: {}", surface.listener_count());
    }
    (nav, user)
}
