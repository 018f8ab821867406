//! Overlay modules for the dashboard.
//!
//! Overlays are modal UI components that temporarily take over keyboard input.
//! Each overlay is self-contained: it owns its state, key handler, and render function.
//!
//! ## Module Structure
//!
//! - `filter_picker.rs`: Region / type filter picker (`f`)
//! - `profile.rs`: Enriched speaker or company profile (`p`)
//! - `import.rs`: Spreadsheet import flow (`i`)
//! - `render_utils.rs`: Shared rendering utilities for overlays
//!
//! ## Extension Trait
//!
//! `OverlayExt` provides convenience methods for `Option<Overlay>` to encapsulate
//! the common patterns used in the reducer.

pub mod filter_picker;
pub mod import;
pub mod profile;
pub mod render_utils;

use crossterm::event::KeyEvent;
pub use filter_picker::FilterPickerState;
pub use import::{ImportPhase, ImportState};
pub use profile::ProfileState;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::effects::UiEffect;
use crate::features::detail::ProfileTarget;
use crate::mutations::StateMutation;
use crate::state::TuiState;

// ============================================================================
// OverlayRequest / OverlayTransition / OverlayUpdate
// ============================================================================

/// Requests to open a new overlay.
#[derive(Debug)]
pub enum OverlayRequest {
    FilterPicker,
    Profile {
        event: usize,
        target: ProfileTarget,
    },
    Import,
}

/// Transition returned by overlay key handlers.
#[derive(Debug)]
pub enum OverlayTransition {
    Stay,
    Close,
    Open(OverlayRequest),
}

/// Update returned by overlay key handlers.
#[derive(Debug)]
pub struct OverlayUpdate {
    pub transition: OverlayTransition,
    pub mutations: Vec<StateMutation>,
    pub effects: Vec<UiEffect>,
}

impl OverlayUpdate {
    fn new(transition: OverlayTransition) -> Self {
        Self {
            transition,
            mutations: Vec::new(),
            effects: Vec::new(),
        }
    }

    pub fn stay() -> Self {
        Self::new(OverlayTransition::Stay)
    }

    pub fn close() -> Self {
        Self::new(OverlayTransition::Close)
    }

    pub fn open(request: OverlayRequest) -> Self {
        Self::new(OverlayTransition::Open(request))
    }

    #[must_use]
    pub fn with_mutations(mut self, mutations: Vec<StateMutation>) -> Self {
        self.mutations = mutations;
        self
    }

    #[must_use]
    pub fn with_ui_effects(mut self, effects: Vec<UiEffect>) -> Self {
        self.effects = effects;
        self
    }
}

// ============================================================================
// Overlay
// ============================================================================

#[derive(Debug)]
pub enum Overlay {
    FilterPicker(FilterPickerState),
    Profile(ProfileState),
    Import(ImportState),
}

impl Overlay {
    pub fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) {
        match self {
            Overlay::FilterPicker(p) => p.render(frame, area, tui),
            Overlay::Profile(p) => p.render(frame, area, tui),
            Overlay::Import(i) => i.render(frame, area, tui),
        }
    }

    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        match self {
            Overlay::FilterPicker(p) => p.handle_key(tui, key),
            Overlay::Profile(p) => p.handle_key(tui, key),
            Overlay::Import(i) => i.handle_key(tui, key),
        }
    }

    pub fn as_import_mut(&mut self) -> Option<&mut ImportState> {
        match self {
            Overlay::Import(i) => Some(i),
            _ => None,
        }
    }
}

/// Dispatches a key to the active overlay.
///
/// Returns `None` when no overlay is open, so the caller falls through to the
/// pane key handlers.
pub fn handle_overlay_key(
    tui: &TuiState,
    overlay: &mut Option<Overlay>,
    key: KeyEvent,
) -> Option<OverlayUpdate> {
    overlay.as_mut().map(|overlay| overlay.handle_key(tui, key))
}

/// Routes bracketed paste into the import path field.
pub fn handle_paste(overlay: &mut Option<Overlay>, text: &str) {
    if let Some(import) = overlay.as_mut().and_then(Overlay::as_import_mut) {
        import.paste(text);
    }
}

// ============================================================================
// OverlayExt - Extension trait for Option<Overlay>
// ============================================================================

/// Extension trait for `Option<Overlay>` providing convenience render helpers.
pub trait OverlayExt {
    /// Renders the overlay if one is active.
    fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState);
}

impl OverlayExt for Option<Overlay> {
    fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) {
        if let Some(overlay) = self {
            overlay.render(frame, area, tui);
        }
    }
}
