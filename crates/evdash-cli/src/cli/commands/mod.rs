//! CLI command handlers.

pub mod config;
pub mod dashboard;
pub mod events;
pub mod import;
pub mod store;
mod table;
