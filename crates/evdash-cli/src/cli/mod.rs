//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use evdash_core::config::Config;
use evdash_core::i18n::Language;
use evdash_core::logging;

mod commands;

/// Log level for one-shot commands; `EVDASH_LOG` overrides it.
const COMMAND_LOG_LEVEL: &str = "warn";

#[derive(Parser)]
#[command(name = "evdash")]
#[command(version)]
#[command(about = "Bilingual event dashboard for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Display language (en or ar), overriding the config
    #[arg(long, global = true, value_name = "LANG")]
    lang: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Browse events without the dashboard
    Events {
        #[command(subcommand)]
        command: EventCommands,
    },

    /// Import events from a spreadsheet (.csv, .xlsx, .xls)
    Import {
        /// Spreadsheet to read
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Parse and preview without saving
        #[arg(long)]
        dry_run: bool,
    },

    /// Manage the imported-events store
    Store {
        #[command(subcommand)]
        command: StoreCommands,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum EventCommands {
    /// Lists events as a table
    List {
        /// Only events in this region (localized value, or "all")
        #[arg(long)]
        region: Option<String>,

        /// Only events of this type (localized value, or "all")
        #[arg(long = "type", value_name = "TYPE")]
        event_type: Option<String>,
    },
    /// Shows one event in both languages
    Show {
        /// Position in `events list`
        #[arg(value_name = "INDEX")]
        index: usize,
    },
}

#[derive(clap::Subcommand)]
enum StoreCommands {
    /// Show the path to the store file
    Path,
    /// Delete every imported event
    Clear,
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Generate a fresh config from Rust defaults
    Generate,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let mut config = Config::load().context("load config")?;

    if let Some(lang) = cli.lang.as_deref() {
        config.language = lang.parse::<Language>()?;
    }

    // default to the dashboard
    let Some(command) = cli.command else {
        return commands::dashboard::run(&config).await;
    };

    logging::init_stderr_logging(COMMAND_LOG_LEVEL);

    match command {
        Commands::Events { command } => match command {
            EventCommands::List { region, event_type } => {
                commands::events::list(&config, region.as_deref(), event_type.as_deref())
            }
            EventCommands::Show { index } => commands::events::show(&config, index),
        },

        Commands::Import { file, dry_run } => commands::import::run(&config, &file, dry_run),

        Commands::Store { command } => match command {
            StoreCommands::Path => {
                commands::store::path(&config);
                Ok(())
            }
            StoreCommands::Clear => commands::store::clear(&config),
        },

        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::Generate => commands::config::generate(),
        },
    }
}
