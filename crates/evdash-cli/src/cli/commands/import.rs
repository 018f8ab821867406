//! Import command handler.

use std::path::Path;

use anyhow::{Context, Result};
use evdash_core::config::Config;
use evdash_core::import;
use evdash_core::store::EventStore;

use super::table::new_table;

/// Rows shown in the preview before it is cut short.
const PREVIEW_ROWS: usize = 20;

pub fn run(config: &Config, file: &Path, dry_run: bool) -> Result<()> {
    let batch = import::import_file(file)?;
    let lang = config.language;

    for header in &batch.missing_headers {
        eprintln!("Warning: column '{header}' not found; those fields will be empty");
    }
    if batch.skipped_rows > 0 {
        eprintln!("Skipped {} blank rows", batch.skipped_rows);
    }
    if batch.is_empty() {
        println!("No events found in {}", file.display());
        return Ok(());
    }

    let mut table = new_table(["Name", "City", "Start", "End"]);
    for event in batch.events.iter().take(PREVIEW_ROWS) {
        table.add_row(vec![
            event.name(lang).to_string(),
            event.city.display(lang).to_string(),
            event.start_date.clone().unwrap_or_default(),
            event.end_date.clone().unwrap_or_default(),
        ]);
    }
    println!("{table}");
    if batch.len() > PREVIEW_ROWS {
        println!("… and {} more", batch.len() - PREVIEW_ROWS);
    }

    let count = batch.len();
    if dry_run {
        println!("Dry run: parsed {count} events ({}), nothing saved.", batch.format);
        return Ok(());
    }

    let store = EventStore::new(config.store_path());
    let total = store
        .append(batch.events)
        .with_context(|| format!("save imported events to {}", store.path().display()))?;
    println!("Imported {count} events ({total} stored)");
    Ok(())
}
