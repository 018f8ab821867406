//! Dataset loading.
//!
//! The dashboard shows the bundled records first, followed by any records
//! imported from spreadsheets and kept in the [`EventStore`].

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::Config;
use crate::model::Event;
use crate::store::EventStore;

/// Records compiled into the binary.
const BUNDLED_DATASET: &str = include_str!("../data/events.json");

/// The object form of a dataset document. `events` is required so a
/// misspelled key is an error rather than an empty dataset.
#[derive(Deserialize)]
struct DatasetDocument {
    events: Vec<Event>,
}

/// Accepts `{"events": [...]}` or a bare array. The shape is picked from the
/// first token so serde's own error, with line and column, reaches the user.
fn parse_events(json: &str) -> Result<Vec<Event>> {
    match json.trim_start().chars().next() {
        Some('[') => Ok(serde_json::from_str(json)?),
        Some('{') => Ok(serde_json::from_str::<DatasetDocument>(json)?.events),
        _ => anyhow::bail!("Dataset must be an object with \"events\" or an array of events"),
    }
}

/// The full in-memory list of events, in display order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    events: Vec<Event>,
    imported: usize,
}

impl Dataset {
    /// Parses the bundled records.
    pub fn bundled() -> Result<Self> {
        Self::parse(BUNDLED_DATASET).context("Failed to parse bundled dataset")
    }

    /// Parses a dataset document from a file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read dataset from {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("Failed to parse dataset from {}", path.display()))
    }

    /// Parses a dataset document from JSON text.
    pub fn parse(json: &str) -> Result<Self> {
        Ok(Self {
            events: parse_events(json)?,
            imported: 0,
        })
    }

    /// Builds the startup dataset for a config: base records (bundled or
    /// `dataset_path`) followed by everything in the store.
    pub fn for_config(config: &Config) -> Result<Self> {
        let base = match config.dataset_path.as_deref() {
            Some(path) => Self::load_from(Path::new(path))?,
            None => Self::bundled()?,
        };
        let store = EventStore::new(config.store_path());
        let imported = store.load()?;
        tracing::debug!(
            base = base.len(),
            imported = imported.len(),
            store = %store.path().display(),
            "dataset loaded"
        );
        Ok(base.with_imported(imported))
    }

    /// Appends previously imported records after the current ones.
    #[must_use]
    pub fn with_imported(mut self, events: Vec<Event>) -> Self {
        self.extend_imported(events);
        self
    }

    pub fn extend_imported(&mut self, events: Vec<Event>) {
        self.imported += events.len();
        self.events.extend(events);
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, index: usize) -> Option<&Event> {
        self.events.get(index)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of records that came from the store or a live import.
    pub fn imported_count(&self) -> usize {
        self.imported
    }
}

impl From<Vec<Event>> for Dataset {
    fn from(events: Vec<Event>) -> Self {
        Self {
            events,
            imported: 0,
        }
    }
}
