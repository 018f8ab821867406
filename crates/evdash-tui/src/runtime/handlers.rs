//! Effect handlers for the dashboard runtime.
//!
//! Handlers are pure async functions that return a `UiEvent`. The runtime
//! spawns them through `spawn_task` and forwards the result to the inbox.
//! File work runs on the blocking pool.

use std::path::PathBuf;

use evdash_core::import;
use evdash_core::model::Event;
use evdash_core::store::EventStore;

use crate::events::{SavedImport, UiEvent};

/// Parses a spreadsheet into an import preview.
pub async fn import_parse(path: PathBuf) -> UiEvent {
    tokio::task::spawn_blocking(move || {
        let result = import::import_file(&path).map_err(|e| format!("{e:#}"));
        UiEvent::ImportParsed(result)
    })
    .await
    .unwrap_or_else(|e| UiEvent::ImportParsed(Err(format!("Task failed: {e}"))))
}

/// Appends confirmed events to the store.
///
/// The saved events travel back with the result so the reducer can merge them
/// into the live dataset.
pub async fn import_save(store: EventStore, events: Vec<Event>) -> UiEvent {
    tokio::task::spawn_blocking(move || {
        let result = store
            .append(events.clone())
            .map(|total| SavedImport { events, total })
            .map_err(|e| format!("{e:#}"));
        UiEvent::ImportSaved(result)
    })
    .await
    .unwrap_or_else(|e| UiEvent::ImportSaved(Err(format!("Task failed: {e}"))))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use evdash_core::i18n::LocalizedText;
    use tempfile::TempDir;

    use super::*;

    fn named(name: &str) -> Event {
        Event {
            event_name: LocalizedText::same(name),
            ..Event::default()
        }
    }

    #[tokio::test]
    async fn test_import_parse_reads_csv() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("events.csv");
        fs::write(
            &path,
            "Event Name English,City English\nTech Summit,Riyadh\nHealth Expo,Jeddah\n",
        )
        .unwrap();

        let UiEvent::ImportParsed(Ok(batch)) = import_parse(path).await else {
            panic!("expected a parsed batch");
        };
        assert_eq!(batch.len(), 2);
    }

    #[tokio::test]
    async fn test_import_parse_reports_unsupported_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "hello").unwrap();

        let UiEvent::ImportParsed(Err(error)) = import_parse(path).await else {
            panic!("expected a parse error");
        };
        assert!(!error.is_empty());
    }

    #[tokio::test]
    async fn test_import_save_returns_store_total() {
        let dir = TempDir::new().unwrap();
        let store = EventStore::new(dir.path().join("events_data.json"));
        store.append(vec![named("Earlier")]).unwrap();

        let UiEvent::ImportSaved(Ok(saved)) =
            import_save(store.clone(), vec![named("A"), named("B")]).await
        else {
            panic!("expected a saved import");
        };
        assert_eq!(saved.events.len(), 2);
        assert_eq!(saved.total, 3);
        assert_eq!(store.count().unwrap(), 3);
    }
}
