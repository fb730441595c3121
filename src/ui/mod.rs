// src/ui/mod.rs
//! Widgets sem dependência de framework: apenas estado e transições.
//! As páginas (ver `forms` e `web`) possuem os dados; os widgets só
//! abrem, fecham e devolvem a escolha do utilizador por callback.

pub mod dropdown;
pub mod overlay;
pub mod select;
pub mod shell;
pub mod surface;
pub mod switch;
pub mod tabs;
pub mod toggle;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    #[error("Opção desconhecida: {0}")]
    UnknownOption(String),

    #[error("Item de menu desconhecido: {0}")]
    UnknownItem(String),

    #[error("Aba desconhecida: {0}")]
    UnknownTab(String),

    #[error("O widget está fechado")]
    NotOpen,
}
