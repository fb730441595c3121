// src/ui/surface.rs
//! Capacidade de entrada injetada nos widgets.
//!
//! Os widgets não conhecem nenhum loop de eventos: enquanto estão abertos
//! registam ouvintes ("clique fora" e "Escape") numa [`InputSurface`] e
//! removem-nos ao fechar. [`DocumentSurface`] é a implementação em memória
//! usada pelas páginas e pelos testes.

use std::collections::HashSet;
use uuid::Uuid;

/// Identifica a raiz renderizada de um widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(Uuid);

impl WidgetId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WidgetId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(Uuid);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerKind {
    PointerDownOutside,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Space,
    Tab,
    Char(char),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// `path` contém todas as raízes de widget que envolvem o alvo do clique,
    /// da mais interna para a mais externa. Vazio = clique na página.
    PointerDown { path: Vec<WidgetId> },
    KeyDown(Key),
}

impl InputEvent {
    pub fn pointer_down_on(path: impl IntoIterator<Item = WidgetId>) -> Self {
        InputEvent::PointerDown {
            path: path.into_iter().collect(),
        }
    }

    pub fn pointer_down_outside_all() -> Self {
        InputEvent::PointerDown { path: Vec::new() }
    }
}

/// Porque é que um widget voltou a CLOSED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    Trigger,
    PointerDownOutside,
    Escape,
    ItemSelected,
    Disabled,
    Unmounted,
    Navigation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dismissal {
    pub widget: WidgetId,
    pub reason: DismissReason,
}

pub trait InputSurface {
    fn on_pointer_down_outside(&mut self, root: WidgetId) -> ListenerId;
    fn on_escape(&mut self, root: WidgetId) -> ListenerId;
    /// Devolve `false` se o ouvinte já não existia.
    fn remove_listener(&mut self, id: ListenerId) -> bool;
    fn lock_scroll(&mut self) {}
    fn unlock_scroll(&mut self) {}
}

#[derive(Debug, Clone, Copy)]
struct Listener {
    id: ListenerId,
    root: WidgetId,
    kind: ListenerKind,
}

#[derive(Debug, Default)]
pub struct DocumentSurface {
    listeners: Vec<Listener>, // por ordem de registo
    scroll_locks: usize, // contador: overlays podem estar aninhados
}

impl DocumentSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locks > 0
    }

    fn register(&mut self, root: WidgetId, kind: ListenerKind) -> ListenerId {
        let id = ListenerId(Uuid::new_v4());
        self.listeners.push(Listener { id, root, kind });
        tracing::trace!("Ouvinte {:?} registado para {:?}", kind, root);
        id
    }

    /// Calcula quais widgets devem fechar com este evento. Não altera nada:
    /// quem possui os widgets aplica as dispensas (ver [`route_event`]).
    pub fn dispatch(&self, event: &InputEvent) -> Vec<Dismissal> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();

        for listener in &self.listeners {
            let reason = match (event, listener.kind) {
                (InputEvent::PointerDown { path }, ListenerKind::PointerDownOutside)
                    if !path.contains(&listener.root) =>
                {
                    DismissReason::PointerDownOutside
                }
                (InputEvent::KeyDown(Key::Escape), ListenerKind::Escape) => DismissReason::Escape,
                _ => continue,
            };
            if seen.insert(listener.root) {
                out.push(Dismissal {
                    widget: listener.root,
                    reason,
                });
            }
        }
        out
    }
}

impl InputSurface for DocumentSurface {
    fn on_pointer_down_outside(&mut self, root: WidgetId) -> ListenerId {
        self.register(root, ListenerKind::PointerDownOutside)
    }

    fn on_escape(&mut self, root: WidgetId) -> ListenerId {
        self.register(root, ListenerKind::Escape)
    }

    fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        self.listeners.len() < before
    }

    fn lock_scroll(&mut self) {
        self.scroll_locks += 1;
    }

    fn unlock_scroll(&mut self) {
        self.scroll_locks = self.scroll_locks.saturating_sub(1);
    }
}

/// Widget que pode ser fechado por um evento global.
pub trait Dismissable {
    fn id(&self) -> WidgetId;
    fn dismiss(&mut self, reason: DismissReason, surface: &mut dyn InputSurface);
}

/// Entrega um evento à superfície e fecha os widgets afetados.
/// Devolve quantos widgets foram fechados.
pub fn route_event(
    surface: &mut DocumentSurface,
    event: &InputEvent,
    widgets: &mut [&mut dyn Dismissable],
) -> usize {
    let dismissals = surface.dispatch(event);
    let mut closed = 0;
    for d in dismissals {
        if let Some(w) = widgets.iter_mut().find(|w| w.id() == d.widget) {
            w.dismiss(d.reason, surface);
            closed += 1;
        }
    }
    closed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_inside_root_is_not_a_dismissal() {
        let mut surface = DocumentSurface::new();
        let a = WidgetId::new();
        let b = WidgetId::new();
        surface.on_pointer_down_outside(a);
        surface.on_pointer_down_outside(b);

        let hits = surface.dispatch(&InputEvent::pointer_down_on([a]));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].widget, b);
        assert_eq!(hits[0].reason, DismissReason::PointerDownOutside);
    }

    #[test]
    fn escape_only_reaches_escape_listeners() {
        let mut surface = DocumentSurface::new();
        let a = WidgetId::new();
        let b = WidgetId::new();
        surface.on_pointer_down_outside(a);
        surface.on_pointer_down_outside(b);
        surface.on_escape(b);

        let hits = surface.dispatch(&InputEvent::KeyDown(Key::Escape));
        assert_eq!(hits, vec![Dismissal { widget: b, reason: DismissReason::Escape }]);
        assert!(surface.dispatch(&InputEvent::KeyDown(Key::Enter)).is_empty());
    }

    #[test]
    fn dismissals_follow_registration_order() {
        let mut surface = DocumentSurface::new();
        let roots: Vec<WidgetId> = (0..5).map(|_| WidgetId::new()).collect();
        for root in &roots {
            surface.on_pointer_down_outside(*root);
        }
        let hits: Vec<WidgetId> = surface
            .dispatch(&InputEvent::pointer_down_outside_all())
            .into_iter()
            .map(|d| d.widget)
            .collect();
        assert_eq!(hits, roots);
    }

    #[test]
    fn removing_listener_twice_reports_false() {
        let mut surface = DocumentSurface::new();
        let id = surface.on_escape(WidgetId::new());
        assert!(surface.remove_listener(id));
        assert!(!surface.remove_listener(id));
        assert_eq!(surface.listener_count(), 0);
    }

    #[test]
    fn scroll_lock_is_counted() {
        let mut surface = DocumentSurface::new();
        surface.lock_scroll();
        surface.lock_scroll();
        surface.unlock_scroll();
        assert!(surface.is_scroll_locked());
        surface.unlock_scroll();
        surface.unlock_scroll();
        assert!(!surface.is_scroll_locked());
    }
}
