//! Core data layer for evdash.
//!
//! Everything here is terminal-agnostic: the bilingual event model, dataset
//! loading, list filtering, spreadsheet import, the persisted store of
//! imported events, derived view data, configuration, and logging setup.

pub mod config;
pub mod dataset;
pub mod filter;
pub mod i18n;
pub mod import;
pub mod insights;
mod lenient;
pub mod logging;
pub mod model;
pub mod store;
