// src/lib.rs
//! EducaFácil: páginas axum + askama sobre widgets sem framework.
//! O binário (`main.rs`) só lê a configuração e serve `web::routes::create_app`.

pub mod config;
pub mod error;
pub mod forms;
pub mod models;
pub mod services;
pub mod state;
pub mod templates;
pub mod ui;
pub mod web;
