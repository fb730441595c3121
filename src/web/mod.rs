// src/web/mod.rs
pub mod activity_handlers;
pub mod auth_handlers;
pub mod home_handlers;
pub mod mw_auth;
pub mod nav_handlers;
pub mod page;
pub mod profile_handlers;
pub mod routes;
pub mod search_handlers;
pub mod settings_handlers;

#[cfg(test)]
mod tests;
