// src/ui/shell.rs
//! Casca de navegação: rota atual, menu móvel (Sheet) e menu do perfil
//! (Dropdown). Navegar fecha qualquer menu aberto.

use crate::ui::{
    dropdown::{Align, DropdownMenu, MenuItem},
    overlay::{Side, Sheet},
    surface::{route_event, DismissReason, Dismissable, DocumentSurface, InputEvent, InputSurface},
};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Home,
    Search,
    Submit,
    Profile,
    Settings,
    Activity(u32),
    EditActivity(u32),
}

impl Route {
    pub fn parse(path: &str) -> Option<Route> {
        let trimmed = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Some(Route::Login),
            ["home"] => Some(Route::Home),
            ["search"] => Some(Route::Search),
            ["submit"] => Some(Route::Submit),
            ["profile"] => Some(Route::Profile),
            ["settings"] => Some(Route::Settings),
            ["activity", id] => id.parse().ok().map(Route::Activity),
            ["edit-activity", id] => id.parse().ok().map(Route::EditActivity),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/".to_string(),
            Route::Home => "/home".to_string(),
            Route::Search => "/search".to_string(),
            Route::Submit => "/submit".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::Settings => "/settings".to_string(),
            Route::Activity(id) => format!("/activity/{}", id),
            Route::EditActivity(id) => format!("/edit-activity/{}", id),
        }
    }

    /// Secção da barra de navegação destacada para esta rota.
    pub fn section(&self) -> Option<Route> {
        match self {
            Route::Home | Route::Search | Route::Submit | Route::Profile => Some(*self),
            Route::Activity(_) => Some(Route::Search),
            Route::EditActivity(_) | Route::Settings => Some(Route::Profile),
            Route::Login => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

pub struct NavLink {
    pub route: Route,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { route: Route::Home, label: "Início" },
    NavLink { route: Route::Submit, label: "Enviar Atividade" },
    NavLink { route: Route::Search, label: "Buscar" },
    NavLink { route: Route::Profile, label: "Meu Perfil" },
];

#[derive(Debug)]
pub struct PageShell {
    route: Route,
    mobile_menu: Sheet,
    profile_menu: DropdownMenu,
}

impl PageShell {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            mobile_menu: Sheet::new(Side::Left),
            profile_menu: DropdownMenu::new(vec![
                MenuItem::link("profile", "Meu Perfil", "/profile"),
                MenuItem::link("settings", "Configurações", "/settings"),
                MenuItem::link("logout", "Sair", "/logout"),
            ])
            .aligned(Align::End),
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn mobile_menu(&mut self) -> &mut Sheet {
        &mut self.mobile_menu
    }

    pub fn profile_menu(&mut self) -> &mut DropdownMenu {
        &mut self.profile_menu
    }

    pub fn is_active(&self, route: Route) -> bool {
        self.route.section() == Some(route)
    }

    /// Transição de rota. Devolve a rota anterior.
    pub fn navigate(&mut self, route: Route, surface: &mut dyn InputSurface) -> Route {
        self.mobile_menu.dismiss(DismissReason::Navigation, surface);
        self.profile_menu.close(DismissReason::Navigation, surface);
        let previous = std::mem::replace(&mut self.route, route);
        tracing::debug!("Navegação {} -> {}", previous, route);
        previous
    }

    /// Evento global (clique fora, Escape) entregue aos dois menus.
    pub fn handle_event(&mut self, surface: &mut DocumentSurface, event: &InputEvent) -> usize {
        route_event(
            surface,
            event,
            &mut [&mut self.mobile_menu, &mut self.profile_menu],
        )
    }

    /// Escolha no menu do perfil. Devolve o destino do item; se for uma
    /// página da aplicação a casca navega para ela.
    pub fn choose_profile_item(
        &mut self,
        key: &str,
        surface: &mut dyn InputSurface,
    ) -> Result<Option<String>, crate::ui::UiError> {
        let mut href = None;
        self.profile_menu.activate_item(key, surface, |item| {
            href = item.href.clone();
        })?;
        if let Some(route) = href.as_deref().and_then(Route::parse) {
            self.navigate(route, surface);
        }
        Ok(href)
    }

    pub fn unmount(&mut self, surface: &mut dyn InputSurface) {
        self.mobile_menu.unmount(surface);
        self.profile_menu.unmount(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_page_route() {
        assert_eq!(Route::parse("/"), Some(Route::Login));
        assert_eq!(Route::parse("/home"), Some(Route::Home));
        assert_eq!(Route::parse("/search?q=frações"), Some(Route::Search));
        assert_eq!(Route::parse("/activity/7"), Some(Route::Activity(7)));
        assert_eq!(Route::parse("/edit-activity/2/"), Some(Route::EditActivity(2)));
        assert_eq!(Route::parse("/activity/abc"), None);
        assert_eq!(Route::parse("/admin"), None);
        assert_eq!(Route::EditActivity(2).path(), "/edit-activity/2");
    }

    #[test]
    fn navigation_closes_open_menus() {
        let mut surface = DocumentSurface::new();
        let mut shell = PageShell::new(Route::Home);
        shell.mobile_menu().open(&mut surface);
        assert!(surface.is_scroll_locked());

        let previous = shell.navigate(Route::Search, &mut surface);
        assert_eq!(previous, Route::Home);
        assert!(!shell.mobile_menu().is_open());
        assert!(!surface.is_scroll_locked());
        assert_eq!(surface.listener_count(), 0);
    }

    #[test]
    fn profile_menu_item_navigates() {
        let mut surface = DocumentSurface::new();
        let mut shell = PageShell::new(Route::Home);
        shell.profile_menu().activate(&mut surface);
        let target = shell.choose_profile_item("settings", &mut surface).unwrap();
        assert_eq!(target.as_deref(), Some("/settings"));
        assert_eq!(shell.route(), Route::Settings);
        assert!(shell.is_active(Route::Profile));
        assert_eq!(surface.listener_count(), 0);
    }

    #[test]
    fn logout_item_is_not_an_app_route() {
        let mut surface = DocumentSurface::new();
        let mut shell = PageShell::new(Route::Search);
        shell.profile_menu().activate(&mut surface);
        let target = shell.choose_profile_item("logout", &mut surface).unwrap();
        assert_eq!(target.as_deref(), Some("/logout"));
        assert_eq!(shell.route(), Route::Search);
        assert!(!shell.profile_menu().is_open());
    }

    #[test]
    fn outside_click_closes_both_menus() {
        let mut surface = DocumentSurface::new();
        let mut shell = PageShell::new(Route::Home);
        shell.mobile_menu().open(&mut surface);
        shell.profile_menu().activate(&mut surface);

        let closed = shell.handle_event(&mut surface, &InputEvent::pointer_down_outside_all());
        assert_eq!(closed, 2);
        assert!(!shell.mobile_menu().is_open());
        assert!(!shell.profile_menu().is_open());
        assert!(!surface.is_scroll_locked());
        assert_eq!(surface.listener_count(), 0);
    }

    #[test]
    fn escape_closes_only_the_sheet() {
        let mut surface = DocumentSurface::new();
        let mut shell = PageShell::new(Route::Home);
        shell.mobile_menu().open(&mut surface);
        shell.profile_menu().activate(&mut surface);

        let closed = shell.handle_event(&mut surface, &InputEvent::KeyDown(crate::ui::surface::Key::Escape));
        assert_eq!(closed, 1);
        assert!(!shell.mobile_menu().is_open());
        assert!(shell.profile_menu().is_open());
    }
}
