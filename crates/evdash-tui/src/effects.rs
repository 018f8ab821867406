//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only, so the reducer never touches
//! the filesystem or the browser directly.

use std::path::PathBuf;

use evdash_core::config::ViewMode;
use evdash_core::i18n::Language;
use evdash_core::model::Event;

use crate::common::TaskId;

#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Open a URL in the system browser.
    OpenBrowser { url: String },

    /// Persist the language preference to config.
    PersistLanguage { language: Language },

    /// Persist the overview view mode to config.
    PersistViewMode { mode: ViewMode },

    /// Parse a spreadsheet on the blocking pool.
    ParseImport { task: Option<TaskId>, path: PathBuf },

    /// Append parsed events to the store.
    SaveImport {
        task: Option<TaskId>,
        events: Vec<Event>,
    },
}
