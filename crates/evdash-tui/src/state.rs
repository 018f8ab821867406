//! Application state composition.
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── dataset: Dataset          (bundled + imported events)
//! │   ├── filter: EventFilter       (region / type selection)
//! │   ├── list: EventListState      (visible events, selection)
//! │   ├── detail: DetailState       (tab, view mode, scroll, cursor)
//! │   ├── status: StatusLineState   (transient messages)
//! │   ├── task_seq / tasks          (background task lifecycle)
//! │   └── layout: LayoutState       (pane rectangles from the last frame)
//! └── overlay: Option<Overlay>      (modal overlays)
//! ```
//!
//! Overlays live beside `TuiState` so their handlers can take `&mut self`
//! while reading the rest of the state.

use evdash_core::config::Config;
use evdash_core::dataset::Dataset;
use evdash_core::filter::{EventFilter, FilterChoice, FilterField};
use evdash_core::i18n::Language;
use evdash_core::model::Event;
use ratatui::layout::Rect;

use crate::common::{TaskSeq, Tasks};
use crate::features::detail::DetailState;
use crate::features::event_list::EventListState;
use crate::features::statusline::StatusLineState;
use crate::overlays::Overlay;

// ============================================================================
// AppState
// ============================================================================

pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    pub fn new(config: &Config, dataset: Dataset) -> Self {
        Self {
            tui: TuiState::new(config, dataset),
            overlay: None,
        }
    }
}

// ============================================================================
// TuiState
// ============================================================================

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    List,
    Detail,
}

/// Pane rectangles computed by the frame handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutState {
    /// Whole terminal area.
    pub screen: Rect,
    pub header: Rect,
    pub sidebar: Rect,
    pub detail: Rect,
    pub status: Rect,
}

pub struct TuiState {
    pub dataset: Dataset,
    pub language: Language,
    pub filter: EventFilter,
    pub list: EventListState,
    pub detail: DetailState,
    pub focus: Focus,
    pub status: StatusLineState,
    pub task_seq: TaskSeq,
    pub tasks: Tasks,
    pub layout: LayoutState,
    pub spinner_frame: usize,
    pub should_quit: bool,
}

impl TuiState {
    pub fn new(config: &Config, dataset: Dataset) -> Self {
        let mut state = Self {
            dataset,
            language: config.language,
            filter: EventFilter::default(),
            list: EventListState::default(),
            detail: DetailState::new(config.view_mode),
            focus: Focus::default(),
            status: StatusLineState::default(),
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            layout: LayoutState::default(),
            spinner_frame: 0,
            should_quit: false,
        };
        state.refresh_list();
        state
    }

    pub fn selected_event(&self) -> Option<&Event> {
        self.list
            .selected_index()
            .and_then(|index| self.dataset.get(index))
    }

    /// Re-applies the filter. A different selection starts the detail pane
    /// from the top; the active tab is kept.
    pub fn refresh_list(&mut self) {
        let visible = self.filter.apply(self.dataset.events(), self.language);
        if self.list.refresh(visible) {
            self.detail.reset_position();
        }
    }

    pub fn on_selection_changed(&mut self) {
        self.detail.reset_position();
    }

    pub fn set_filter(&mut self, field: FilterField, choice: FilterChoice) {
        self.filter.set(field, choice);
        self.refresh_list();
    }

    pub fn reset_filter(&mut self) {
        self.filter = EventFilter::default();
        self.refresh_list();
    }

    /// Switches the display language.
    ///
    /// Active filter values are carried over to the new language so the same
    /// events stay visible, and the selected event and tab are kept.
    pub fn set_language(&mut self, language: Language) {
        if self.language == language {
            return;
        }
        self.filter
            .translate(self.dataset.events(), self.language, language);
        self.language = language;
        self.refresh_list();
    }
}
