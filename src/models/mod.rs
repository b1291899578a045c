// src/models/mod.rs
pub mod intervention;
pub mod machine;
pub mod maintenance;
pub mod report;
pub mod table;
pub mod user;

pub use table::{JsonObject, Table};
