//! Runtime execution modes.
//!
//! The full-screen dashboard is an optional feature; one-shot commands work
//! without it.

#[cfg(feature = "tui")]
pub use evdash_tui::run_dashboard;

#[cfg(not(feature = "tui"))]
pub async fn run_dashboard(
    _config: &evdash_core::config::Config,
    _dataset: evdash_core::dataset::Dataset,
) -> anyhow::Result<()> {
    anyhow::bail!("Dashboard support is disabled in this build (feature \"tui\").");
}
