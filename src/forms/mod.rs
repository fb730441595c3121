// src/forms/mod.rs
pub mod account_form;
pub mod activity_form;
pub mod field_state;
pub mod password_form;
pub mod profile_form;
pub mod validation;
