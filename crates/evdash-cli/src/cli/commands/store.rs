//! Store command handlers.

use anyhow::{Context, Result};
use evdash_core::config::Config;
use evdash_core::store::EventStore;

pub fn path(config: &Config) {
    println!("{}", config.store_path().display());
}

pub fn clear(config: &Config) -> Result<()> {
    let store = EventStore::new(config.store_path());
    let count = store.count().context("read store")?;
    if store.clear().context("clear store")? {
        println!("Removed {count} imported events ({})", store.path().display());
    } else {
        println!("Store is already empty.");
    }
    Ok(())
}
