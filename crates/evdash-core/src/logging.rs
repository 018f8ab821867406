//! Tracing setup.
//!
//! The dashboard owns the terminal, so it logs to a daily-rolling file under
//! `${EVDASH_HOME}/logs`. Plain CLI commands log to stderr.

use std::path::Path;
use std::{env, fs, io};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, paths};

/// Environment variable that overrides the configured filter.
pub const LOG_ENV: &str = "EVDASH_LOG";

const LOG_FILE_PREFIX: &str = "evdash.log";

/// Filter from `EVDASH_LOG`, else `level`, else "info".
pub fn env_filter(level: &str) -> EnvFilter {
    resolve_filter(env::var(LOG_ENV).ok().as_deref(), level)
}

/// An unparsable override is skipped; an unparsable level becomes "info".
fn resolve_filter(env_directives: Option<&str>, level: &str) -> EnvFilter {
    env_directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Installs a file subscriber for the interactive dashboard.
///
/// Returns `None` when file logging is disabled. Keep the guard alive for the
/// whole session or buffered lines are lost.
pub fn init_file_logging(config: &Config) -> Result<Option<WorkerGuard>> {
    if !config.logging.file {
        return Ok(None);
    }
    init_file_logging_in(&paths::logs_dir(), &config.logging.level).map(Some)
}

pub fn init_file_logging_in(dir: &Path, level: &str) -> Result<WorkerGuard> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))?;

    Ok(guard)
}

/// Installs a stderr subscriber for one-shot commands.
///
/// A second call is a no-op.
pub fn init_stderr_logging(level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(io::stderr)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_directives_are_used() {
        let filter = resolve_filter(None, "evdash_core=debug,warn");
        assert!(filter.to_string().contains("evdash_core=debug"));
    }

    #[test]
    fn test_invalid_level_falls_back_to_info() {
        let filter = resolve_filter(None, "[[[not a filter");
        assert_eq!(filter.to_string(), "info");
    }

    #[test]
    fn test_env_directives_override_level() {
        let filter = resolve_filter(Some("trace"), "warn");
        assert_eq!(filter.to_string(), "trace");

        let filter = resolve_filter(Some("[[[bad"), "warn");
        assert_eq!(filter.to_string(), "warn");
    }
}
