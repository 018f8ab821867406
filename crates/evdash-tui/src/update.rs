//! Dashboard reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! This is the single source of truth for how events modify state.

use std::time::Instant;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use evdash_core::import::ImportBatch;
use ratatui::layout::{Position, Rect};

use crate::effects::UiEffect;
use crate::events::{SavedImport, UiEvent};
use crate::features::detail::update::{
    DetailContext, handle_detail_key, open_link, open_profile,
};
use crate::features::detail::{self, DetailTab};
use crate::features::event_list::{self, ITEM_HEIGHT, handle_list_key};
use crate::features::statusline::StatusMessage;
use crate::mutations::{FilterMutation, StateMutation};
use crate::overlays::{self, Overlay};
use crate::render::app_layout;
use crate::state::{AppState, Focus, TuiState};
use crate::strings;

/// Lines scrolled per mouse wheel notch in the detail pane.
const WHEEL_LINES: isize = 3;

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    let mut effects = match event {
        UiEvent::Tick => {
            app.tui.spinner_frame = app.tui.spinner_frame.wrapping_add(1);
            app.tui.status.expire(Instant::now());
            vec![]
        }
        UiEvent::Frame { width, height } => {
            handle_frame(&mut app.tui, width, height);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::TaskStarted { kind, started } => {
            tracing::debug!(?kind, id = started.id.0, "task started");
            app.tui.tasks.state_mut(kind).on_started(&started);
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            let ok = app.tui.tasks.state_mut(kind).finish_if_active(completed.id);
            if ok {
                update(app, *completed.result)
            } else {
                tracing::debug!(?kind, id = completed.id.0, "ignoring stale task completion");
                vec![]
            }
        }
        UiEvent::ImportParsed(result) => {
            handle_import_parsed(app, result);
            vec![]
        }
        UiEvent::ImportSaved(result) => {
            handle_import_saved(app, result);
            vec![]
        }
    };
    assign_task_ids(&mut app.tui, &mut effects);
    effects
}

/// Gives background-task effects their lifecycle id.
fn assign_task_ids(tui: &mut TuiState, effects: &mut [UiEffect]) {
    for effect in effects {
        match effect {
            UiEffect::ParseImport { task, .. } | UiEffect::SaveImport { task, .. }
                if task.is_none() =>
            {
                *task = Some(tui.task_seq.next_id());
            }
            _ => {}
        }
    }
}

// ============================================================================
// Import results
// ============================================================================

fn handle_import_parsed(app: &mut AppState, result: Result<ImportBatch, String>) {
    if let Err(error) = &result {
        tracing::warn!(%error, "spreadsheet parse failed");
    }
    match app.overlay.as_mut().and_then(Overlay::as_import_mut) {
        Some(import) if import.is_parsing() => import.on_parsed(result),
        // The overlay was closed while parsing; nothing is waiting for it.
        _ => tracing::debug!("dropping parse result without an import overlay"),
    }
}

fn handle_import_saved(app: &mut AppState, result: Result<SavedImport, String>) {
    let lang = app.tui.language;
    match result {
        Ok(SavedImport { events, total }) => {
            let added = events.len();
            tracing::info!(added, total, "imported events saved");
            app.tui.dataset.extend_imported(events);
            app.tui.refresh_list();
            app.tui.status.show(StatusMessage::success(format!(
                "{} +{added} ({total} {})",
                strings::IMPORT_SUCCESS.get(lang),
                strings::STORED.get(lang),
            )));
            if matches!(app.overlay, Some(Overlay::Import(_))) {
                app.overlay = None;
            }
        }
        Err(error) => {
            tracing::warn!(%error, "saving imported events failed");
            app.tui.status.show(StatusMessage::error(format!(
                "{}: {error}",
                strings::IMPORT_FAILED.get(lang)
            )));
            if let Some(import) = app.overlay.as_mut().and_then(Overlay::as_import_mut) {
                import.on_save_failed(error);
            }
        }
    }
}

// ============================================================================
// StateMutation Dispatcher
// ============================================================================

fn apply_mutations(tui: &mut TuiState, mutations: Vec<StateMutation>) {
    for mutation in mutations {
        match mutation {
            StateMutation::Filter(FilterMutation::Set { field, choice }) => {
                tui.set_filter(field, choice);
            }
            StateMutation::Filter(FilterMutation::Reset) => tui.reset_filter(),
            StateMutation::Status(message) => tui.status.show(message),
        }
    }
}

fn apply_overlay_update(app: &mut AppState, update: overlays::OverlayUpdate) -> Vec<UiEffect> {
    let mut effects = update.effects;
    match update.transition {
        overlays::OverlayTransition::Stay => {}
        overlays::OverlayTransition::Close => {
            app.overlay = None;
        }
        overlays::OverlayTransition::Open(request) => {
            effects.extend(open_overlay_request(app, request));
        }
    }
    effects
}

fn open_overlay_request(app: &mut AppState, request: overlays::OverlayRequest) -> Vec<UiEffect> {
    match request {
        overlays::OverlayRequest::FilterPicker => {
            let (state, effects) = overlays::FilterPickerState::open(&app.tui);
            app.overlay = Some(Overlay::FilterPicker(state));
            effects
        }
        overlays::OverlayRequest::Profile { event, target } => {
            let (state, effects) = overlays::ProfileState::open(event, target);
            app.overlay = Some(Overlay::Profile(state));
            effects
        }
        overlays::OverlayRequest::Import => {
            if app.tui.tasks.is_any_running() {
                app.tui.status.show(StatusMessage::info(
                    strings::IMPORT_BUSY.get(app.tui.language),
                ));
                return vec![];
            }
            let (state, effects) = overlays::ImportState::open(&app.tui);
            app.overlay = Some(Overlay::Import(state));
            effects
        }
    }
}

// ============================================================================
// Frame Handler (layout, viewport sync)
// ============================================================================

/// Per-frame housekeeping: pane layout, list viewport, and detail scroll
/// reconciled against freshly laid-out content.
fn handle_frame(tui: &mut TuiState, width: u16, height: u16) {
    let layout = app_layout(Rect::new(0, 0, width, height));
    tui.layout = layout;

    let list_rows = event_list::list_area(layout.sidebar).height / ITEM_HEIGHT;
    tui.list.sync_viewport(usize::from(list_rows));

    let lang = tui.language;
    let cursor = (tui.focus == Focus::Detail).then_some(tui.detail.cursor);
    let laid_out = tui.selected_event().map(|event| {
        let body = detail::detail_body_area(layout.detail, event, lang);
        let content = detail::build_content(event, &tui.detail, lang, body.width as usize, cursor);
        (content, body.height as usize)
    });
    if let Some((content, viewport_height)) = laid_out {
        tui.detail.sync_layout(&content, viewport_height);
    }
}

// ============================================================================
// Terminal Event Handlers
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Mouse(mouse) => {
            if app.overlay.is_none() {
                handle_mouse(&mut app.tui, mouse);
            }
            vec![]
        }
        Event::Paste(text) => {
            overlays::handle_paste(&mut app.overlay, &text);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_mouse(tui: &mut TuiState, mouse: MouseEvent) {
    let at = Position::new(mouse.column, mouse.row);
    let in_sidebar = tui.layout.sidebar.contains(at);
    let in_detail = tui.layout.detail.contains(at);

    match mouse.kind {
        MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
            let down = matches!(mouse.kind, MouseEventKind::ScrollDown);
            if in_sidebar {
                if tui.list.move_by(if down { 1 } else { -1 }) {
                    tui.on_selection_changed();
                }
            } else if in_detail {
                tui.detail
                    .scroll_by(if down { WHEEL_LINES } else { -WHEEL_LINES });
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if in_sidebar {
                tui.focus = Focus::List;
                if let Some(pos) = event_list::position_at(tui, tui.layout.sidebar, mouse.row)
                    && tui.list.select(pos)
                {
                    tui.on_selection_changed();
                }
            } else if in_detail {
                tui.focus = Focus::Detail;
            }
        }
        _ => {}
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    // Try to dispatch to the active overlay
    if let Some(mut update) = overlays::handle_overlay_key(&app.tui, &mut app.overlay, key) {
        apply_mutations(&mut app.tui, std::mem::take(&mut update.mutations));
        return apply_overlay_update(app, update);
    }

    if let Some(effects) = handle_global_key(app, key) {
        return effects;
    }

    let tui = &mut app.tui;
    match tui.focus {
        Focus::List => match key.code {
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Enter => {
                if tui.selected_event().is_some() {
                    tui.focus = Focus::Detail;
                }
                vec![]
            }
            _ => {
                if handle_list_key(&mut tui.list, key) == Some(true) {
                    tui.on_selection_changed();
                }
                vec![]
            }
        },
        Focus::Detail => match key.code {
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Esc => {
                tui.focus = Focus::List;
                vec![]
            }
            _ => {
                let Some((index, event)) = tui
                    .list
                    .selected_index()
                    .and_then(|index| tui.dataset.get(index).map(|event| (index, event)))
                else {
                    return vec![];
                };
                let ctx = DetailContext {
                    index,
                    event,
                    lang: tui.language,
                };
                let Some((effects, mutations, request)) =
                    handle_detail_key(&mut tui.detail, &ctx, key)
                else {
                    return vec![];
                };
                apply_mutations(&mut app.tui, mutations);
                with_overlay_request(app, effects, request)
            }
        },
    }
}

/// Keys that work regardless of which pane has focus.
///
/// Returns `None` when the key is left to the focused pane.
fn handle_global_key(app: &mut AppState, key: KeyEvent) -> Option<Vec<UiEffect>> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let tui = &mut app.tui;

    let effects = match key.code {
        KeyCode::Char('c') if ctrl => vec![UiEffect::Quit],
        KeyCode::Char('q') => vec![UiEffect::Quit],
        KeyCode::Char('L') => {
            let language = tui.language.toggle();
            tui.set_language(language);
            tracing::info!(%language, "language switched");
            vec![UiEffect::PersistLanguage { language }]
        }
        KeyCode::Char('v' | 'V') => {
            let mode = if key.code == KeyCode::Char('v') {
                tui.detail.view_mode.next()
            } else {
                tui.detail.view_mode.prev()
            };
            tui.detail.set_tab(DetailTab::Overview);
            tui.detail.set_view_mode(mode);
            vec![UiEffect::PersistViewMode { mode }]
        }
        KeyCode::Char('f') => open_overlay_request(app, overlays::OverlayRequest::FilterPicker),
        KeyCode::Char('i') => open_overlay_request(app, overlays::OverlayRequest::Import),
        KeyCode::Char('c') => {
            if tui.filter.is_active() {
                tui.reset_filter();
            }
            vec![]
        }
        KeyCode::Tab => {
            tui.detail.set_tab(tui.detail.tab.next());
            vec![]
        }
        KeyCode::BackTab => {
            tui.detail.set_tab(tui.detail.tab.prev());
            vec![]
        }
        KeyCode::Char(c @ '1'..='7') => {
            if let Some(tab) = c.to_digit(10).and_then(DetailTab::from_number) {
                tui.detail.set_tab(tab);
            }
            vec![]
        }
        KeyCode::Char(c @ ('o' | 'p')) => {
            let Some((index, event)) = tui
                .list
                .selected_index()
                .and_then(|index| tui.dataset.get(index).map(|event| (index, event)))
            else {
                return Some(vec![]);
            };
            let ctx = DetailContext {
                index,
                event,
                lang: tui.language,
            };
            let (effects, mutations, request) = if c == 'o' {
                open_link(&tui.detail, &ctx)
            } else {
                open_profile(&tui.detail, &ctx)
            };
            apply_mutations(&mut app.tui, mutations);
            with_overlay_request(app, effects, request)
        }
        _ => return None,
    };
    Some(effects)
}

fn with_overlay_request(
    app: &mut AppState,
    effects: Vec<UiEffect>,
    request: Option<overlays::OverlayRequest>,
) -> Vec<UiEffect> {
    if let Some(request) = request
        && app.overlay.is_none()
    {
        let mut overlay_effects = open_overlay_request(app, request);
        overlay_effects.extend(effects);
        return overlay_effects;
    }
    effects
}
