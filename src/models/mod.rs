// src/models/mod.rs
pub mod activity;
pub mod settings;
pub mod user;
