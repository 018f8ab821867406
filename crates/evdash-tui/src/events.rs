//! UI event types.
//!
//! All external inputs (terminal, background task results) are converted to
//! `UiEvent` before the reducer sees them.
//!
//! ## Task Lifecycle Events
//!
//! Background work uses a uniform lifecycle:
//! - The runtime emits `UiEvent::TaskStarted` once a task is actually spawned
//! - The runtime emits `UiEvent::TaskCompleted` with the result event when done
//! - The reducer is the only place that mutates `TaskState`

use crossterm::event::Event as CrosstermEvent;
use evdash_core::import::ImportBatch;
use evdash_core::model::Event;

use crate::common::{TaskCompleted, TaskKind, TaskStarted};

/// Events appended to the store by a finished save.
#[derive(Debug)]
pub struct SavedImport {
    pub events: Vec<Event>,
    /// Store size after the append.
    pub total: usize,
}

/// Unified event enum for the dashboard.
#[derive(Debug)]
pub enum UiEvent {
    /// Timer tick (spinner, status expiry).
    Tick,

    /// Emitted once per loop iteration before other events, with the
    /// terminal dimensions for layout.
    Frame { width: u16, height: u16 },

    /// Terminal input event (key, mouse, paste, resize).
    Terminal(CrosstermEvent),

    /// Task lifecycle: runtime started a task.
    TaskStarted {
        kind: TaskKind,
        started: TaskStarted,
    },

    /// Task lifecycle: runtime completed a task (wraps the result event).
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },

    /// Spreadsheet parse finished (Err carries the display chain).
    ImportParsed(Result<ImportBatch, String>),

    /// Store append finished.
    ImportSaved(Result<SavedImport, String>),
}
