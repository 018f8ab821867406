//! Full-screen event dashboard for evdash.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod mutations;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod strings;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};

use anyhow::Result;
use evdash_core::config::{Config, paths};
use evdash_core::dataset::Dataset;
use evdash_core::logging;
pub use runtime::DashboardRuntime;

/// Runs the interactive dashboard until the user quits.
///
/// Must be called from inside a tokio runtime; imports run as background
/// tasks.
pub async fn run_dashboard(config: &Config, dataset: Dataset) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The dashboard requires a terminal.\n\
             Use `evdash events list` for non-interactive output."
        );
    }

    // Logging goes to a file while the alternate screen owns the terminal.
    let _log_guard = match logging::init_file_logging(config) {
        Ok(guard) => guard,
        Err(error) => {
            writeln!(stderr(), "Warning: file logging disabled: {error:#}")?;
            None
        }
    };

    let mut err = stderr();
    writeln!(err, "Event Dashboard")?;
    writeln!(
        err,
        "Events: {} ({} imported)",
        dataset.len(),
        dataset.imported_count()
    )?;
    let config_path = paths::config_path();
    if config_path.exists() {
        writeln!(err, "Config file: {}", config_path.display())?;
    }
    err.flush()?;

    tracing::info!(
        events = dataset.len(),
        imported = dataset.imported_count(),
        language = config.language.code(),
        "starting dashboard"
    );

    let mut runtime = DashboardRuntime::new(config, dataset)?;
    runtime.run()?;
    drop(runtime);

    tracing::info!("dashboard closed");
    writeln!(stderr(), "Goodbye!")?;

    Ok(())
}
