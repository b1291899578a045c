// src/services/mod.rs
pub mod auth_service;
pub mod record_service;
pub mod user_service;
