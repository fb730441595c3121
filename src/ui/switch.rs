// src/ui/switch.rs
use crate::ui::surface::Key;

/// Interruptor ligado/desligado. Não abre nada, logo não usa a superfície.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Switch {
    checked: bool,
    disabled: bool,
}

impl Switch {
    pub fn new(checked: bool) -> Self {
        Self {
            checked,
            disabled: false,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Clique: emite o novo valor ao dono e devolve-o.
    pub fn toggle(&mut self, on_change: impl FnOnce(bool)) -> bool {
        if self.disabled {
            return self.checked;
        }
        self.checked = !self.checked;
        on_change(self.checked);
        self.checked
    }

    pub fn key_down(&mut self, key: Key, on_change: impl FnOnce(bool)) -> bool {
        match key {
            Key::Enter | Key::Space => self.toggle(on_change),
            _ => self.checked,
        }
    }

    /// Aplica o valor submetido por um formulário HTML (checkbox ausente = desligado).
    pub fn sync(&mut self, checked: bool, on_change: impl FnOnce(bool)) {
        if self.checked != checked {
            self.toggle(on_change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_emits_negated_value() {
        let mut s = Switch::new(true);
        let mut seen = None;
        assert!(!s.toggle(|v| seen = Some(v)));
        assert_eq!(seen, Some(false));
    }

    #[test]
    fn disabled_switch_does_not_emit() {
        let mut s = Switch::new(false).disabled();
        assert!(!s.toggle(|_| panic!("desativado")));
        assert!(!s.key_down(Key::Space, |_| panic!("desativado")));
    }

    #[test]
    fn sync_only_emits_on_difference() {
        let mut s = Switch::new(true);
        s.sync(true, |_| panic!("sem mudança"));
        let mut count = 0;
        s.sync(false, |_| count += 1);
        assert_eq!(count, 1);
        assert!(!s.is_checked());
    }
}
