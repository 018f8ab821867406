//! Dashboard command handler.

use anyhow::{Context, Result};
use evdash_core::config::Config;
use evdash_core::dataset::Dataset;

use crate::modes;

pub async fn run(config: &Config) -> Result<()> {
    let dataset = Dataset::for_config(config).context("load events")?;

    modes::run_dashboard(config, dataset)
        .await
        .context("dashboard failed")
}
