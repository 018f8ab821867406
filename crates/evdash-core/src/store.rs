//! Persisted list of imported events.
//!
//! A single JSON array on disk holds every record ever imported. Appends
//! rewrite the whole file atomically; there is no versioning, dedup, or size
//! limit.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::model::Event;

/// File name of the store inside the evdash home directory.
pub const STORE_FILE_NAME: &str = "events_data.json";

#[derive(Debug, Clone)]
pub struct EventStore {
    path: PathBuf,
}

impl EventStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads all stored records. A missing file is an empty store.
    pub fn load(&self) -> Result<Vec<Event>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read event store {}", self.path.display()))?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse event store {}", self.path.display()))
    }

    /// Number of stored records.
    pub fn count(&self) -> Result<usize> {
        Ok(self.load()?.len())
    }

    /// Appends records after the existing ones and returns the new total.
    pub fn append(&self, events: Vec<Event>) -> Result<usize> {
        let mut all = self.load()?;
        let added = events.len();
        all.extend(events);
        self.write(&all)?;
        tracing::info!(
            added,
            total = all.len(),
            path = %self.path.display(),
            "appended events to store"
        );
        Ok(all.len())
    }

    /// Deletes the store file. Returns false if there was nothing to delete.
    pub fn clear(&self) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path)
            .with_context(|| format!("Failed to remove event store {}", self.path.display()))?;
        tracing::info!(path = %self.path.display(), "cleared event store");
        Ok(true)
    }

    /// Writes via temp file + rename so a crash never leaves a torn store.
    fn write(&self, events: &[Event]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(events).context("Failed to serialize events")?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)
            .with_context(|| format!("Failed to write event store to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::i18n::{Language, LocalizedText};

    fn named(name: &str) -> Event {
        Event {
            event_name: LocalizedText::same(name),
            ..Event::default()
        }
    }

    /// Missing file reads as an empty store.
    #[test]
    fn test_load_missing_store_is_empty() {
        let dir = tempdir().unwrap();
        let store = EventStore::new(dir.path().join(STORE_FILE_NAME));
        assert!(store.load().unwrap().is_empty());
        assert_eq!(store.count().unwrap(), 0);
    }

    /// Appending N records grows the store by exactly N and keeps the old ones.
    #[test]
    fn test_append_preserves_existing_records() {
        let dir = tempdir().unwrap();
        let store = EventStore::new(dir.path().join("nested").join(STORE_FILE_NAME));

        assert_eq!(store.append(vec![named("first")]).unwrap(), 1);
        assert_eq!(
            store.append(vec![named("second"), named("third")]).unwrap(),
            3
        );

        let events = store.load().unwrap();
        let names: Vec<&str> = events.iter().map(|e| e.name(Language::En)).collect();
        assert_eq!(names, ["first", "second", "third"]);
        assert!(!dir.path().join("nested").join("events_data.json.tmp").exists());
    }

    #[test]
    fn test_append_empty_batch_keeps_count() {
        let dir = tempdir().unwrap();
        let store = EventStore::new(dir.path().join(STORE_FILE_NAME));
        store.append(vec![named("only")]).unwrap();
        assert_eq!(store.append(Vec::new()).unwrap(), 1);
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = tempdir().unwrap();
        let store = EventStore::new(dir.path().join(STORE_FILE_NAME));
        assert!(!store.clear().unwrap());

        store.append(vec![named("gone")]).unwrap();
        assert!(store.clear().unwrap());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_corrupt_store_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(STORE_FILE_NAME);
        fs::write(&path, "[{").unwrap();

        let err = EventStore::new(&path).load().unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse event store"));
    }
}
