// src/ui/overlay.rs
//! Sheet (gaveta lateral) e Modal. Ambos bloqueiam o scroll da página
//! enquanto abertos; o Sheet também fecha com Escape.

use crate::ui::{
    surface::{DismissReason, Dismissable, InputSurface, WidgetId},
    toggle::{Toggle, ToggleConfig, ToggleState},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    Left,
    #[default]
    Right,
    Top,
    Bottom,
}

impl Side {
    pub fn css(self) -> &'static str {
        match self {
            Side::Left => "sheet-left",
            Side::Right => "sheet-right",
            Side::Top => "sheet-top",
            Side::Bottom => "sheet-bottom",
        }
    }
}

#[derive(Debug)]
pub struct Sheet {
    toggle: Toggle,
    side: Side,
}

impl Sheet {
    pub fn new(side: Side) -> Self {
        Self {
            toggle: Toggle::new(ToggleConfig {
                escape: true,
                scroll_lock: true,
            }),
            side,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn state(&self) -> ToggleState {
        self.toggle.state()
    }

    pub fn is_open(&self) -> bool {
        self.toggle.is_open()
    }

    /// O gatilho do Sheet só abre; fechar é pelo botão X, Escape ou overlay.
    pub fn open(&mut self, surface: &mut dyn InputSurface) -> bool {
        self.toggle.open(surface)
    }

    pub fn close(&mut self, surface: &mut dyn InputSurface) -> bool {
        self.toggle.close(DismissReason::Trigger, surface)
    }

    /// Estado controlado pelo dono (`open` + `on_open_change`).
    pub fn set_open(&mut self, open: bool, surface: &mut dyn InputSurface) {
        if open {
            self.toggle.open(surface);
        } else {
            self.toggle.close(DismissReason::Trigger, surface);
        }
    }

    pub fn unmount(&mut self, surface: &mut dyn InputSurface) {
        self.toggle.unmount(surface);
    }
}

impl Dismissable for Sheet {
    fn id(&self) -> WidgetId {
        self.toggle.id()
    }

    fn dismiss(&mut self, reason: DismissReason, surface: &mut dyn InputSurface) {
        self.toggle.close(reason, surface);
    }
}

#[derive(Debug)]
pub struct Modal {
    toggle: Toggle,
}

impl Modal {
    pub fn new() -> Self {
        Self {
            toggle: Toggle::new(ToggleConfig {
                escape: false,
                scroll_lock: true,
            }),
        }
    }

    pub fn state(&self) -> ToggleState {
        self.toggle.state()
    }

    pub fn is_open(&self) -> bool {
        self.toggle.is_open()
    }

    pub fn open(&mut self, surface: &mut dyn InputSurface) -> bool {
        self.toggle.open(surface)
    }

    pub fn close(&mut self, surface: &mut dyn InputSurface) -> bool {
        self.toggle.close(DismissReason::Trigger, surface)
    }

    pub fn unmount(&mut self, surface: &mut dyn InputSurface) {
        self.toggle.unmount(surface);
    }
}

impl Default for Modal {
    fn default() -> Self {
        Self::new()
    }
}

impl Dismissable for Modal {
    fn id(&self) -> WidgetId {
        self.toggle.id()
    }

    fn dismiss(&mut self, reason: DismissReason, surface: &mut dyn InputSurface) {
        self.toggle.close(reason, surface);
    }
}
