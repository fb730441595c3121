// src/ui/dropdown.rs
use crate::ui::{
    surface::{DismissReason, Dismissable, InputSurface, WidgetId},
    toggle::{Toggle, ToggleConfig, ToggleState},
    UiError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    Start,
    #[default]
    Center,
    End,
}

impl Align {
    pub fn css(self) -> &'static str {
        match self {
            Align::Start => "menu-start",
            Align::Center => "menu-center",
            Align::End => "menu-end",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub key: String,
    pub label: String,
    pub href: Option<String>,
}

impl MenuItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            href: None,
        }
    }

    pub fn link(key: impl Into<String>, label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            ..Self::new(key, label)
        }
    }
}

/// Menu de ações (ex.: menu do perfil). Só fecha com clique fora,
/// reativação do gatilho ou escolha de um item; Escape não se aplica.
#[derive(Debug)]
pub struct DropdownMenu {
    toggle: Toggle,
    items: Vec<MenuItem>,
    align: Align,
}

impl DropdownMenu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            toggle: Toggle::new(ToggleConfig::default()),
            items,
            align: Align::default(),
        }
    }

    pub fn aligned(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn align(&self) -> Align {
        self.align
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn state(&self) -> ToggleState {
        self.toggle.state()
    }

    pub fn is_open(&self) -> bool {
        self.toggle.is_open()
    }

    pub fn activate(&mut self, surface: &mut dyn InputSurface) -> ToggleState {
        self.toggle.activate(surface)
    }

    pub fn close(&mut self, reason: DismissReason, surface: &mut dyn InputSurface) -> bool {
        self.toggle.close(reason, surface)
    }

    pub fn activate_item(
        &mut self,
        key: &str,
        surface: &mut dyn InputSurface,
        on_select: impl FnOnce(&MenuItem),
    ) -> Result<(), UiError> {
        if !self.toggle.is_open() {
            return Err(UiError::NotOpen);
        }
        let item = self
            .items
            .iter()
            .find(|i| i.key == key)
            .ok_or_else(|| UiError::UnknownItem(key.to_string()))?;
        on_select(item);
        self.toggle.close(DismissReason::ItemSelected, surface);
        Ok(())
    }

    pub fn unmount(&mut self, surface: &mut dyn InputSurface) {
        self.toggle.unmount(surface);
    }
}

impl Dismissable for DropdownMenu {
    fn id(&self) -> WidgetId {
        self.toggle.id()
    }

    fn dismiss(&mut self, reason: DismissReason, surface: &mut dyn InputSurface) {
        self.toggle.close(reason, surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::surface::{route_event, DocumentSurface, InputEvent, Key};

    fn menu() -> DropdownMenu {
        DropdownMenu::new(vec![
            MenuItem::link("profile", "Meu Perfil", "/profile"),
            MenuItem::new("logout", "Sair"),
        ])
        .aligned(Align::End)
    }

    #[test]
    fn item_activation_closes_and_reports_item() {
        let mut surface = DocumentSurface::new();
        let mut m = menu();
        m.activate(&mut surface);
        let mut picked = String::new();
        m.activate_item("profile", &mut surface, |i| picked = i.key.clone())
            .unwrap();
        assert_eq!(picked, "profile");
        assert!(!m.is_open());
        assert_eq!(surface.listener_count(), 0);
    }

    #[test]
    fn escape_is_ignored_but_outside_click_closes() {
        let mut surface = DocumentSurface::new();
        let mut m = menu();
        m.activate(&mut surface);

        route_event(&mut surface, &InputEvent::KeyDown(Key::Escape), &mut [&mut m]);
        assert!(m.is_open());

        route_event(&mut surface, &InputEvent::pointer_down_outside_all(), &mut [&mut m]);
        assert!(!m.is_open());
    }

    #[test]
    fn second_activation_returns_to_closed() {
        let mut surface = DocumentSurface::new();
        let mut m = menu();
        assert_eq!(m.activate(&mut surface), ToggleState::Open);
        assert_eq!(m.activate(&mut surface), ToggleState::Closed);
        assert!(!m.is_open());
        assert_eq!(surface.listener_count(), 0);
        assert_eq!(m.activate_item("profile", &mut surface, |_| {}), Err(UiError::NotOpen));
    }

    #[test]
    fn unknown_item_keeps_menu_open() {
        let mut surface = DocumentSurface::new();
        let mut m = menu();
        m.activate(&mut surface);
        let err = m.activate_item("nada", &mut surface, |_| {});
        assert_eq!(err, Err(UiError::UnknownItem("nada".into())));
        assert!(m.is_open());
    }
}
