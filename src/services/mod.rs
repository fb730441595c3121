// src/services/mod.rs
pub mod activity_service;
pub mod auth_service;
pub mod seed;
pub mod settings_service;
pub mod user_service;
