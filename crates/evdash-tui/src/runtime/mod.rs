//! Dashboard runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! Background handlers send `UiEvent`s to `inbox_tx`, and the runtime drains
//! `inbox_rx` each iteration alongside terminal input.
//!
//! Structure:
//! - `mod.rs`: Core runtime (DashboardRuntime, event loop, effect dispatch)
//! - `inbox.rs`: Inbox channel types
//! - `handlers.rs`: Import parse and save handlers

mod handlers;
mod inbox;

use std::future::Future;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event;
use evdash_core::config::Config;
use evdash_core::dataset::Dataset;
use evdash_core::store::EventStore;
use inbox::{UiEventReceiver, UiEventSender};
use tokio::sync::mpsc;

use crate::common::{TaskCompleted, TaskId, TaskKind, TaskMeta, TaskStarted};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::terminal::{self, DashboardTerminal};
use crate::{render, update};

/// Frame cadence while something is moving (spinner, recent input).
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Poll duration when idle. Longer timeout reduces CPU usage.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen dashboard runtime.
///
/// Owns the terminal and state. Runs the event loop and executes effects.
/// Terminal state is restored on drop and on panic.
pub struct DashboardRuntime {
    terminal: DashboardTerminal,
    pub state: AppState,
    /// Where confirmed imports are appended.
    store: EventStore,
    inbox_tx: UiEventSender,
    inbox_rx: UiEventReceiver,
    last_tick: Instant,
    /// Last terminal event, for fast ticks during interaction.
    last_terminal_event: Instant,
}

impl DashboardRuntime {
    /// Creates the runtime and takes over the terminal.
    pub fn new(config: &Config, dataset: Dataset) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();

        let terminal = match terminal::enter() {
            Ok(terminal) => terminal,
            Err(error) => {
                let _ = terminal::leave();
                return Err(error.context("Failed to set up terminal"));
            }
        };
        let state = AppState::new(config, dataset);
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        let now = Instant::now();
        Ok(Self {
            terminal,
            state,
            store: EventStore::new(config.store_path()),
            inbox_tx,
            inbox_rx,
            last_tick: now,
            last_terminal_event: now,
        })
    }

    /// Runs the main event loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.tui.should_quit {
            let mut events = self.collect_events()?;

            // Layout must be current before keys and clicks are handled.
            let size = self.terminal.size()?;
            events.insert(
                0,
                UiEvent::Frame {
                    width: size.width,
                    height: size.height,
                },
            );

            for event in events {
                if matches!(&event, UiEvent::Terminal(_)) {
                    self.last_terminal_event = Instant::now();
                }

                // Only Tick triggers render; input is batched to the next tick.
                let marks_dirty = matches!(&event, UiEvent::Tick);

                let effects = update::update(&mut self.state, event);
                if marks_dirty {
                    dirty = true;
                }
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    /// Collects events from the inbox and the terminal, then a Tick if due.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let recent_terminal_activity = self.last_terminal_event.elapsed() < IDLE_POLL_DURATION;
        let needs_fast_poll = self.state.tui.tasks.is_any_running() || recent_terminal_activity;

        let tick_interval = if needs_fast_poll {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        let time_until_tick = tick_interval.saturating_sub(self.last_tick.elapsed());

        // Don't block when there is already work queued.
        let poll_duration = if events.is_empty() {
            time_until_tick
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns an async task with a uniform TaskStarted/TaskCompleted lifecycle.
    fn spawn_task<F, Fut>(&self, kind: TaskKind, id: TaskId, meta: TaskMeta, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        let _ = tx.send(UiEvent::TaskStarted {
            kind,
            started: TaskStarted { id, meta },
        });
        tokio::spawn(async move {
            let inner = f().await;
            let completed = TaskCompleted {
                id,
                result: Box::new(inner),
            };
            let _ = tx.send(UiEvent::TaskCompleted { kind, completed });
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.tui.should_quit = true;
            }
            UiEffect::OpenBrowser { url } => {
                if let Err(error) = open::that(&url) {
                    tracing::warn!(%url, %error, "failed to open browser");
                }
            }

            // The new value is already live in state; a failed write only
            // loses it for the next session.
            UiEffect::PersistLanguage { language } => {
                if let Err(error) = Config::save_language(language) {
                    tracing::warn!(error = format!("{error:#}"), "failed to persist language");
                }
            }
            UiEffect::PersistViewMode { mode } => {
                if let Err(error) = Config::save_view_mode(mode) {
                    tracing::warn!(error = format!("{error:#}"), "failed to persist view mode");
                }
            }

            UiEffect::ParseImport { task, path } => {
                let Some(id) = task else {
                    tracing::error!("parse effect without a task id");
                    return;
                };
                let meta = import_task_meta(&path);
                tracing::info!(path = %path.display(), "parsing spreadsheet");
                self.spawn_task(TaskKind::ImportParse, id, meta, move || {
                    handlers::import_parse(path)
                });
            }
            UiEffect::SaveImport { task, events } => {
                let Some(id) = task else {
                    tracing::error!("save effect without a task id");
                    return;
                };
                let meta = import_task_meta(self.store.path());
                let store = self.store.clone();
                self.spawn_task(TaskKind::ImportSave, id, meta, move || {
                    handlers::import_save(store, events)
                });
            }
        }
    }
}

/// File name shown by the status line while an import task runs.
fn import_task_meta(path: &Path) -> TaskMeta {
    let file_name = path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    );
    TaskMeta::Import { file_name }
}

impl Drop for DashboardRuntime {
    fn drop(&mut self) {
        let _ = terminal::leave();
    }
}
