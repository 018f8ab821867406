//! Configuration management for evdash.
//!
//! Loads configuration from ${EVDASH_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::i18n::{Label, Language};

/// Presentation of the overview tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Description, sessions, topics and tags as text
    #[default]
    Standard,
    /// Bar charts of section sizes
    Charts,
    /// Share breakdowns
    Pie,
    /// Raised cards for topics, sessions, categories and roles
    #[serde(alias = "3d")]
    Cards,
    /// Dates, sessions and dated news in order
    Timeline,
}

impl ViewMode {
    pub fn all() -> &'static [ViewMode] {
        &[
            ViewMode::Standard,
            ViewMode::Charts,
            ViewMode::Pie,
            ViewMode::Cards,
            ViewMode::Timeline,
        ]
    }

    /// The next mode, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let all = Self::all();
        let index = all.iter().position(|m| *m == self).unwrap_or(0);
        all[(index + 1) % all.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        let all = Self::all();
        let index = all.iter().position(|m| *m == self).unwrap_or(0);
        all[(index + all.len() - 1) % all.len()]
    }

    /// Config file spelling.
    pub fn display_name(self) -> &'static str {
        match self {
            ViewMode::Standard => "standard",
            ViewMode::Charts => "charts",
            ViewMode::Pie => "pie",
            ViewMode::Cards => "cards",
            ViewMode::Timeline => "timeline",
        }
    }

    pub fn label(self) -> Label {
        match self {
            ViewMode::Standard => Label::new("Standard View", "العرض القياسي"),
            ViewMode::Charts => Label::new("Charts", "الرسوم البيانية"),
            ViewMode::Pie => Label::new("Pie Charts", "مخططات دائرية"),
            ViewMode::Cards => Label::new("3D Charts", "مخططات ثلاثية الأبعاد"),
            ViewMode::Timeline => Label::new("Timeline", "الجدول الزمني"),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. "info" or "evdash_core=debug".
    pub level: String,
    /// Write dashboard logs to files under `${EVDASH_HOME}/logs`.
    pub file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Config::DEFAULT_LOG_LEVEL.to_string(),
            file: true,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display language at startup
    pub language: Language,

    /// Overview view mode at startup
    pub view_mode: ViewMode,

    /// Optional JSON dataset replacing the bundled records
    pub dataset_path: Option<String>,

    /// Optional store file override (relative to EVDASH_HOME unless absolute)
    pub store_file: Option<String>,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Merges user config values into the default template.
///
/// Keeps comments and new sections from the template while preserving the
/// user's values.
fn merge_with_template(user_config: &str) -> Result<String> {
    use toml_edit::DocumentMut;

    let mut doc: DocumentMut = default_config_template()
        .parse()
        .context("Failed to parse default config template")?;
    let user_doc: DocumentMut = user_config.parse().context("Failed to parse user config")?;

    merge_items(doc.as_table_mut(), user_doc.as_table());

    Ok(doc.to_string())
}

/// Recursively merges items from source table into target table.
fn merge_items(target: &mut toml_edit::Table, source: &toml_edit::Table) {
    use toml_edit::Item;

    for (key, value) in source {
        match value {
            Item::Value(v) => {
                target[key] = Item::Value(v.clone());
            }
            Item::Table(src_table) => {
                if let Some(Item::Table(target_table)) = target.get_mut(key) {
                    merge_items(target_table, src_table);
                } else {
                    target[key] = Item::Table(src_table.clone());
                }
            }
            Item::ArrayOfTables(src_arr) => {
                target[key] = Item::ArrayOfTables(src_arr.clone());
            }
            Item::None => {}
        }
    }
}

pub mod paths {
    //! Path resolution for evdash configuration and data.
    //!
    //! EVDASH_HOME resolution order:
    //! 1. EVDASH_HOME environment variable (if set)
    //! 2. ~/.config/evdash (default)
    //! 3. ./.evdash when no home directory can be determined

    use std::path::PathBuf;

    use crate::store::STORE_FILE_NAME;

    pub const HOME_ENV: &str = "EVDASH_HOME";

    pub fn evdash_home() -> PathBuf {
        if let Ok(home) = std::env::var(HOME_ENV) {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".evdash"),
            |h| h.join(".config").join("evdash"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        evdash_home().join("config.toml")
    }

    /// Default location of the imported-events store.
    pub fn store_path() -> PathBuf {
        evdash_home().join(STORE_FILE_NAME)
    }

    /// Directory for dashboard log files.
    pub fn logs_dir() -> PathBuf {
        evdash_home().join("logs")
    }
}

impl Config {
    const DEFAULT_LOG_LEVEL: &str = "info";

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Resolved store file: `store_file` if set, else the home default.
    pub fn store_path(&self) -> PathBuf {
        match self.store_file.as_deref() {
            Some(file) if Path::new(file).is_absolute() => PathBuf::from(file),
            Some(file) => paths::evdash_home().join(file),
            None => paths::store_path(),
        }
    }

    /// Saves only the language field to the config file.
    pub fn save_language(language: Language) -> Result<()> {
        Self::save_language_to(&paths::config_path(), language)
    }

    /// Saves only the language field to a specific config file path.
    ///
    /// Creates the file from the template if it doesn't exist, otherwise
    /// merges user values into the latest template first.
    pub fn save_language_to(path: &Path, language: Language) -> Result<()> {
        Self::update_field(path, "language", language.code())
    }

    /// Saves only the view_mode field to the config file.
    pub fn save_view_mode(mode: ViewMode) -> Result<()> {
        Self::save_view_mode_to(&paths::config_path(), mode)
    }

    pub fn save_view_mode_to(path: &Path, mode: ViewMode) -> Result<()> {
        Self::update_field(path, "view_mode", mode.display_name())
    }

    fn update_field(path: &Path, key: &str, new_value: &str) -> Result<()> {
        use toml_edit::{DocumentMut, value};

        let contents = if path.exists() {
            let user_config = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            merge_with_template(&user_config)?
        } else {
            default_config_template().to_string()
        };

        let mut doc: DocumentMut = contents
            .parse()
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        doc[key] = value(new_value);

        Self::write_config(path, &doc.to_string())
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Generates a fresh config TOML from Rust defaults, laid over the
    /// commented template.
    pub fn generate() -> Result<String> {
        use toml_edit::DocumentMut;

        let generated_toml = toml::to_string(&Config::default())
            .context("Failed to serialize default config to TOML")?;

        let mut doc: DocumentMut = default_config_template()
            .parse()
            .context("Failed to parse default config template")?;
        let generated_doc: DocumentMut = generated_toml
            .parse()
            .context("Failed to parse generated config")?;

        merge_items(doc.as_table_mut(), generated_doc.as_table());

        Ok(doc.to_string())
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    /// Missing file returns defaults.
    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nonexistent.toml")).unwrap();
        assert_eq!(config.language, Language::En);
        assert_eq!(config.view_mode, ViewMode::Standard);
        assert!(config.dataset_path.is_none());
        assert_eq!(config.logging.level, "info");
    }

    /// Partial config merges with defaults.
    #[test]
    fn test_load_partial_config_merges_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "language = \"ar\"\nview_mode = \"3d\"\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.language, Language::Ar);
        assert_eq!(config.view_mode, ViewMode::Cards);
        assert!(config.logging.file);
    }

    #[test]
    fn test_load_invalid_config_reports_path() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "language = \"fr\"\n").unwrap();

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    /// Init creates the file with the commented template and parent dirs.
    #[test]
    fn test_init_creates_config_with_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("subdir").join("config.toml");

        Config::init(&config_path).unwrap();

        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("language = \"en\""));
        assert!(contents.contains("# dataset_path ="));
    }

    /// Init never overwrites an existing file.
    #[test]
    fn test_init_fails_if_exists() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "").unwrap();

        assert!(Config::init(&config_path).is_err());
    }

    /// Saving one field keeps the user's other values and the template comments.
    #[test]
    fn test_save_language_preserves_other_fields() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "view_mode = \"timeline\"\n").unwrap();

        Config::save_language_to(&config_path, Language::Ar).unwrap();

        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("# Display language"));
        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.language, Language::Ar);
        assert_eq!(config.view_mode, ViewMode::Timeline);
    }

    #[test]
    fn test_save_view_mode_creates_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        Config::save_view_mode_to(&config_path, ViewMode::Pie).unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.view_mode, ViewMode::Pie);
    }

    #[test]
    fn test_generate_round_trips_defaults() {
        let generated = Config::generate().unwrap();
        assert!(generated.contains("[logging]"));
        let config: Config = toml::from_str(&generated).unwrap();
        assert_eq!(config.language, Language::En);
    }

    #[test]
    fn test_store_path_absolute_override() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("custom.json");
        let config = Config {
            store_file: Some(file.display().to_string()),
            ..Config::default()
        };
        assert_eq!(config.store_path(), file);
    }

    #[test]
    fn test_view_mode_cycles() {
        assert_eq!(ViewMode::Timeline.next(), ViewMode::Standard);
        assert_eq!(ViewMode::Standard.prev(), ViewMode::Timeline);
        assert_eq!(ViewMode::Cards.label().en, "3D Charts");
    }
}
