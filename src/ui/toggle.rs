// src/ui/toggle.rs
//! Máquina CLOSED/OPEN partilhada por select, dropdown, sheet e modal.

use crate::ui::surface::{DismissReason, InputSurface, ListenerId, WidgetId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToggleConfig {
    pub escape: bool,      // fecha com a tecla Escape
    pub scroll_lock: bool, // bloqueia o scroll da página enquanto aberto
}

#[derive(Debug)]
pub struct Toggle {
    id: WidgetId,
    state: ToggleState,
    disabled: bool,
    config: ToggleConfig,
    listeners: Vec<ListenerId>,
    locked: bool,
}

impl Toggle {
    pub fn new(config: ToggleConfig) -> Self {
        Self {
            id: WidgetId::new(),
            state: ToggleState::Closed,
            disabled: false,
            config,
            listeners: Vec::new(),
            locked: false,
        }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn state(&self) -> ToggleState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ToggleState::Open
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Clique no gatilho: alterna, exceto quando desativado.
    pub fn activate(&mut self, surface: &mut dyn InputSurface) -> ToggleState {
        if self.disabled {
            tracing::trace!("Toggle {:?} desativado, ativação ignorada", self.id);
            return self.state;
        }
        match self.state {
            ToggleState::Closed => self.open(surface),
            ToggleState::Open => self.close(DismissReason::Trigger, surface),
        };
        self.state
    }

    /// Devolve `true` se houve transição.
    pub fn open(&mut self, surface: &mut dyn InputSurface) -> bool {
        if self.disabled || self.is_open() {
            return false;
        }
        self.state = ToggleState::Open;
        self.install(surface);
        true
    }

    pub fn close(&mut self, reason: DismissReason, surface: &mut dyn InputSurface) -> bool {
        if !self.is_open() {
            return false;
        }
        self.state = ToggleState::Closed;
        self.uninstall(surface);
        tracing::trace!("Toggle {:?} fechado ({:?})", self.id, reason);
        true
    }

    pub fn set_disabled(&mut self, disabled: bool, surface: &mut dyn InputSurface) {
        self.disabled = disabled;
        if disabled {
            self.close(DismissReason::Disabled, surface);
        }
    }

    /// O widget saiu da página: nenhum ouvinte pode sobreviver-lhe.
    pub fn unmount(&mut self, surface: &mut dyn InputSurface) {
        self.close(DismissReason::Unmounted, surface);
    }

    fn install(&mut self, surface: &mut dyn InputSurface) {
        self.listeners.push(surface.on_pointer_down_outside(self.id));
        if self.config.escape {
            self.listeners.push(surface.on_escape(self.id));
        }
        if self.config.scroll_lock {
            surface.lock_scroll();
            self.locked = true;
        }
    }

    fn uninstall(&mut self, surface: &mut dyn InputSurface) {
        for id in self.listeners.drain(..) {
            surface.remove_listener(id);
        }
        if self.locked {
            surface.unlock_scroll();
            self.locked = false;
        }
    }
}
