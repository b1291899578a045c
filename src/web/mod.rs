// src/web/mod.rs
pub mod auth_handlers;
pub mod machine_handlers;
pub mod maintenance_handlers;
pub mod record_handlers;
pub mod report_handlers;
pub mod routes;
pub mod user_handlers;
