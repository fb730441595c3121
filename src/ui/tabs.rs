// src/ui/tabs.rs
use crate::ui::UiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabKey {
    pub key: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Selection {
    Internal(Option<String>),
    // o dono fornece o valor e recebe as mudanças por callback
    Controlled(Option<String>),
}

/// Exatamente uma aba ativa entre um conjunto fixo de chaves.
/// Um valor desconhecido não mostra nenhum painel.
#[derive(Debug, Clone)]
pub struct Tabs {
    keys: Vec<TabKey>,
    selection: Selection,
}

impl Tabs {
    pub fn new(keys: Vec<TabKey>, default: &str) -> Self {
        let mut tabs = Self {
            keys,
            selection: Selection::Internal(None),
        };
        tabs.selection = Selection::Internal(tabs.known(default));
        tabs
    }

    pub fn controlled(keys: Vec<TabKey>, value: Option<&str>) -> Self {
        let mut tabs = Self {
            keys,
            selection: Selection::Controlled(None),
        };
        tabs.set_value(value);
        tabs
    }

    pub fn from_pairs(pairs: &[(&str, &str)], default: &str) -> Self {
        let keys = pairs
            .iter()
            .map(|(k, l)| TabKey {
                key: (*k).to_string(),
                label: (*l).to_string(),
            })
            .collect();
        Self::new(keys, default)
    }

    fn known(&self, key: &str) -> Option<String> {
        self.keys
            .iter()
            .any(|k| k.key == key)
            .then(|| key.to_string())
    }

    pub fn keys(&self) -> &[TabKey] {
        &self.keys
    }

    pub fn current(&self) -> Option<&str> {
        match &self.selection {
            Selection::Internal(v) | Selection::Controlled(v) => v.as_deref(),
        }
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.current() == Some(key)
    }

    /// Painel a renderizar (no máximo um).
    pub fn visible_panel(&self) -> Option<&TabKey> {
        let current = self.current()?;
        self.keys.iter().find(|k| k.key == current)
    }

    /// Atualização vinda do dono (modo controlado) ou reposição externa.
    pub fn set_value(&mut self, value: Option<&str>) {
        let resolved = value.and_then(|v| {
            let k = self.known(v);
            if k.is_none() {
                tracing::debug!("Aba '{}' desconhecida, nenhum painel ativo", v);
            }
            k
        });
        match &mut self.selection {
            Selection::Internal(v) | Selection::Controlled(v) => *v = resolved,
        }
    }

    /// Clique numa aba. `Ok(false)` quando a aba já estava ativa.
    pub fn select(&mut self, key: &str, on_change: impl FnOnce(&str)) -> Result<bool, UiError> {
        if self.known(key).is_none() {
            return Err(UiError::UnknownTab(key.to_string()));
        }
        if self.is_active(key) {
            return Ok(false);
        }
        if let Selection::Internal(v) = &mut self.selection {
            *v = Some(key.to_string());
        }
        on_change(key);
        Ok(true)
    }
}
