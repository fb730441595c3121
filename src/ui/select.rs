// src/ui/select.rs
use crate::ui::{
    surface::{DismissReason, Dismissable, InputSurface, Key, WidgetId},
    toggle::{Toggle, ToggleConfig, ToggleState},
    UiError,
};

pub const DEFAULT_PLACEHOLDER: &str = "Selecione uma opção";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Lista suspensa de opções fixas. Fecha ao clicar fora, com Escape,
/// ao reativar o gatilho ou ao escolher uma opção.
#[derive(Debug)]
pub struct Select {
    toggle: Toggle,
    options: Vec<SelectOption>,
    value: Option<String>,
    placeholder: String,
    required: bool,
}

impl Select {
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self {
            toggle: Toggle::new(ToggleConfig {
                escape: true,
                scroll_lock: false,
            }),
            options,
            value: None,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            required: false,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_value(mut self, value: Option<&str>) -> Self {
        self.set_value(value);
        self
    }

    pub fn state(&self) -> ToggleState {
        self.toggle.state()
    }

    pub fn is_open(&self) -> bool {
        self.toggle.is_open()
    }

    pub fn is_disabled(&self) -> bool {
        self.toggle.is_disabled()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn selected_option(&self) -> Option<&SelectOption> {
        let value = self.value.as_deref()?;
        self.options.iter().find(|o| o.value == value)
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.value.as_deref() == Some(value)
    }

    /// Texto do gatilho: rótulo escolhido ou placeholder.
    pub fn display_label(&self) -> &str {
        self.selected_option()
            .map(|o| o.label.as_str())
            .unwrap_or(&self.placeholder)
    }

    /// Valor vindo do dono da página. Valores fora da lista ficam como
    /// "sem seleção".
    pub fn set_value(&mut self, value: Option<&str>) {
        self.value = match value {
            Some(v) if self.options.iter().any(|o| o.value == v) => Some(v.to_string()),
            Some(v) => {
                tracing::debug!("Valor '{}' fora das opções, tratado como sem seleção", v);
                None
            }
            None => None,
        };
    }

    pub fn set_disabled(&mut self, disabled: bool, surface: &mut dyn InputSurface) {
        self.toggle.set_disabled(disabled, surface);
    }

    pub fn activate(&mut self, surface: &mut dyn InputSurface) -> ToggleState {
        self.toggle.activate(surface)
    }

    pub fn key_down(&mut self, key: Key, surface: &mut dyn InputSurface) -> ToggleState {
        match key {
            Key::Enter | Key::Space => {
                self.toggle.activate(surface);
            }
            Key::Escape => {
                self.toggle.close(DismissReason::Escape, surface);
            }
            _ => {}
        }
        self.toggle.state()
    }

    /// Escolhe uma opção da lista aberta: emite o valor ao dono e fecha.
    pub fn choose(
        &mut self,
        value: &str,
        surface: &mut dyn InputSurface,
        on_change: impl FnOnce(&str),
    ) -> Result<(), UiError> {
        if !self.toggle.is_open() {
            return Err(UiError::NotOpen);
        }
        if !self.options.iter().any(|o| o.value == value) {
            return Err(UiError::UnknownOption(value.to_string()));
        }
        self.value = Some(value.to_string());
        on_change(value);
        self.toggle.close(DismissReason::ItemSelected, surface);
        Ok(())
    }

    pub fn unmount(&mut self, surface: &mut dyn InputSurface) {
        self.toggle.unmount(surface);
    }
}

impl Dismissable for Select {
    fn id(&self) -> WidgetId {
        self.toggle.id()
    }

    fn dismiss(&mut self, reason: DismissReason, surface: &mut dyn InputSurface) {
        self.toggle.close(reason, surface);
    }
}
