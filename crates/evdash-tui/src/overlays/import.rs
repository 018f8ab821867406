//! Spreadsheet import overlay.
//!
//! Flow: type or paste a path, `Enter` parses it in the background, the
//! preview lists the parsed rows, `Enter` again appends them to the store.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use evdash_core::i18n::Language;
use evdash_core::import::{ImportBatch, resolve_input_path};
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table, Wrap};

use super::OverlayUpdate;
use super::render_utils::{
    InputHint, InputLine, OverlayConfig, render_input_line, render_overlay, render_separator,
};
use crate::common::truncate_with_ellipsis;
use crate::effects::UiEffect;
use crate::features::statusline::spinner_glyph;
use crate::state::TuiState;
use crate::strings;

const OVERLAY_WIDTH: u16 = 84;
const OVERLAY_HEIGHT: u16 = 22;

/// Rows above the phase body: prompt, input, separator.
const HEADER_ROWS: u16 = 3;

#[derive(Debug, Clone)]
pub enum ImportPhase {
    Editing,
    Parsing,
    Preview(ImportBatch),
    Saving,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct ImportState {
    pub input: String,
    pub phase: ImportPhase,
}

impl ImportState {
    pub fn open(_tui: &TuiState) -> (Self, Vec<UiEffect>) {
        (
            Self {
                input: String::new(),
                phase: ImportPhase::Editing,
            },
            vec![],
        )
    }

    pub fn is_parsing(&self) -> bool {
        matches!(self.phase, ImportPhase::Parsing)
    }

    fn is_busy(&self) -> bool {
        matches!(self.phase, ImportPhase::Parsing | ImportPhase::Saving)
    }

    /// Appends pasted text to the path, dropping line breaks.
    pub fn paste(&mut self, text: &str) {
        if self.is_busy() {
            return;
        }
        self.input
            .extend(text.chars().filter(|c| !matches!(c, '\n' | '\r')));
        self.phase = ImportPhase::Editing;
    }

    pub fn on_parsed(&mut self, result: Result<ImportBatch, String>) {
        self.phase = match result {
            Ok(batch) => ImportPhase::Preview(batch),
            Err(message) => ImportPhase::Failed(message),
        };
    }

    pub fn on_save_failed(&mut self, message: String) {
        self.phase = ImportPhase::Failed(message);
    }

    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc | KeyCode::Char('c') if key.code == KeyCode::Esc || ctrl => {
                return OverlayUpdate::close();
            }
            _ => {}
        }

        match &self.phase {
            ImportPhase::Parsing | ImportPhase::Saving => OverlayUpdate::stay(),
            ImportPhase::Preview(batch) => match key.code {
                KeyCode::Enter if !batch.is_empty() => {
                    let events = batch.events.clone();
                    self.phase = ImportPhase::Saving;
                    OverlayUpdate::stay()
                        .with_ui_effects(vec![UiEffect::SaveImport { task: None, events }])
                }
                KeyCode::Backspace | KeyCode::Char('e') => {
                    self.phase = ImportPhase::Editing;
                    OverlayUpdate::stay()
                }
                _ => OverlayUpdate::stay(),
            },
            ImportPhase::Editing | ImportPhase::Failed(_) => self.handle_edit_key(tui, key, ctrl),
        }
    }

    fn handle_edit_key(&mut self, tui: &TuiState, key: KeyEvent, ctrl: bool) -> OverlayUpdate {
        match key.code {
            KeyCode::Enter => {
                let Some(path) = resolve_input_path(&self.input) else {
                    return OverlayUpdate::stay();
                };
                if tui.tasks.is_any_running() {
                    self.phase =
                        ImportPhase::Failed(strings::IMPORT_BUSY.get(tui.language).to_string());
                    return OverlayUpdate::stay();
                }
                self.phase = ImportPhase::Parsing;
                OverlayUpdate::stay().with_ui_effects(vec![UiEffect::ParseImport { task: None, path }])
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.phase = ImportPhase::Editing;
                OverlayUpdate::stay()
            }
            KeyCode::Char('u') if ctrl => {
                self.input.clear();
                self.phase = ImportPhase::Editing;
                OverlayUpdate::stay()
            }
            KeyCode::Char(c) if !ctrl => {
                self.input.push(c);
                self.phase = ImportPhase::Editing;
                OverlayUpdate::stay()
            }
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) {
        let lang = tui.language;
        let hints: &[InputHint<'_>] = match &self.phase {
            ImportPhase::Editing | ImportPhase::Failed(_) => &[
                InputHint {
                    key: "Enter",
                    action: "read file",
                },
                InputHint {
                    key: "Ctrl+U",
                    action: "clear",
                },
                InputHint {
                    key: "Esc",
                    action: "close",
                },
            ],
            ImportPhase::Preview(_) => &[
                InputHint {
                    key: "Enter",
                    action: "save",
                },
                InputHint {
                    key: "e",
                    action: "edit path",
                },
                InputHint {
                    key: "Esc",
                    action: "cancel",
                },
            ],
            ImportPhase::Parsing | ImportPhase::Saving => &[InputHint {
                key: "Esc",
                action: "hide",
            }],
        };
        let layout = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: strings::UPLOAD_EVENT_DATA.get(lang),
                border_color: Color::Green,
                width: OVERLAY_WIDTH,
                height: OVERLAY_HEIGHT,
                hints,
            },
        );
        let body = layout.body;
        if body.height < HEADER_ROWS {
            return;
        }

        frame.render_widget(
            Paragraph::new(Span::styled(
                strings::IMPORT_PATH_PROMPT.get(lang),
                Style::default().fg(Color::DarkGray),
            )),
            Rect::new(body.x, body.y, body.width, 1),
        );
        render_input_line(
            frame,
            Rect::new(body.x, body.y + 1, body.width, 1),
            &InputLine {
                value: &self.input,
                placeholder: Some("~/Downloads/events.xlsx"),
                prompt: "> ",
                color: Color::Green,
            },
        );
        render_separator(frame, body, 2);

        let rest = Rect::new(
            body.x,
            body.y + HEADER_ROWS,
            body.width,
            body.height - HEADER_ROWS,
        );
        match &self.phase {
            ImportPhase::Editing => {
                frame.render_widget(
                    Paragraph::new(Span::styled(
                        strings::REQUIRED_COLUMNS.get(lang),
                        Style::default().fg(Color::DarkGray),
                    ))
                    .wrap(Wrap { trim: true }),
                    rest,
                );
            }
            ImportPhase::Parsing | ImportPhase::Saving => {
                let label = if self.is_parsing() {
                    strings::PARSING
                } else {
                    strings::SAVING
                };
                frame.render_widget(
                    Paragraph::new(Line::from(vec![
                        Span::styled(
                            spinner_glyph(tui.spinner_frame),
                            Style::default().fg(Color::Yellow),
                        ),
                        Span::raw(" "),
                        Span::styled(label.get(lang), Style::default().fg(Color::Yellow)),
                    ])),
                    rest,
                );
            }
            ImportPhase::Failed(message) => {
                frame.render_widget(
                    Paragraph::new(vec![
                        Line::from(Span::styled(
                            strings::IMPORT_FAILED.get(lang),
                            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                        )),
                        Line::from(Span::styled(message.clone(), Style::default().fg(Color::Red))),
                    ])
                    .wrap(Wrap { trim: true }),
                    rest,
                );
            }
            ImportPhase::Preview(batch) => render_preview(frame, rest, batch, lang),
        }
    }
}

fn preview_summary(batch: &ImportBatch, lang: Language) -> Vec<Line<'static>> {
    let file_name = batch
        .source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{} {}", batch.len(), strings::ROWS.get(lang)),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {file_name} ({})", batch.format),
            Style::default().fg(Color::DarkGray),
        ),
    ])];
    if batch.is_empty() {
        lines.push(Line::from(Span::styled(
            strings::NO_ROWS.get(lang),
            Style::default().fg(Color::Yellow),
        )));
    }
    if batch.skipped_rows > 0 {
        lines.push(Line::from(Span::styled(
            format!("{}: {}", strings::SKIPPED_ROWS.get(lang), batch.skipped_rows),
            Style::default().fg(Color::DarkGray),
        )));
    }
    if !batch.missing_headers.is_empty() {
        lines.push(Line::from(Span::styled(
            format!(
                "{}: {}",
                strings::MISSING_COLUMNS.get(lang),
                batch.missing_headers.join(", ")
            ),
            Style::default().fg(Color::Yellow),
        )));
    }
    lines
}

fn render_preview(frame: &mut Frame, area: Rect, batch: &ImportBatch, lang: Language) {
    let summary = preview_summary(batch, lang);
    let summary_height = (summary.len() as u16).min(area.height);
    frame.render_widget(
        Paragraph::new(summary),
        Rect::new(area.x, area.y, area.width, summary_height),
    );
    if batch.is_empty() || area.height <= summary_height + 1 {
        return;
    }

    let table_area = Rect::new(
        area.x,
        area.y + summary_height + 1,
        area.width,
        area.height - summary_height - 1,
    );
    let name_width = (table_area.width as usize).saturating_sub(42).max(10);
    let header = Row::new(
        [strings::NAME, strings::CITY, strings::START, strings::END]
            .map(|label| Cell::from(label.get(lang))),
    )
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    // One row is taken by the header.
    let room = table_area.height.saturating_sub(1) as usize;
    let mut rows: Vec<Row<'static>> = batch
        .events
        .iter()
        .take(room)
        .map(|event| {
            Row::new([
                Cell::from(truncate_with_ellipsis(event.name(lang), name_width)),
                Cell::from(truncate_with_ellipsis(event.city.display(lang), 16)),
                Cell::from(event.start_date.clone().unwrap_or_default()),
                Cell::from(event.end_date.clone().unwrap_or_default()),
            ])
        })
        .collect();
    if batch.len() > room && room > 0 {
        rows.pop();
        rows.push(Row::new([Cell::from(format!(
            "… +{}",
            batch.len() - room + 1
        ))])
        .style(Style::default().fg(Color::DarkGray)));
    }

    let table = Table::new(
        rows,
        [
            Constraint::Min(10),
            Constraint::Length(16),
            Constraint::Length(11),
            Constraint::Length(11),
        ],
    )
    .header(header)
    .column_spacing(1);
    frame.render_widget(table, table_area);
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use evdash_core::config::Config;
    use evdash_core::dataset::Dataset;
    use evdash_core::i18n::LocalizedText;
    use evdash_core::import::SpreadsheetFormat;
    use evdash_core::model::Event;

    use super::*;
    use crate::common::{TaskId, TaskKind, TaskMeta, TaskStarted};
    use crate::overlays::OverlayTransition;

    fn tui() -> TuiState {
        TuiState::new(&Config::default(), Dataset::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(state: &mut ImportState, tui: &TuiState, text: &str) {
        for c in text.chars() {
            state.handle_key(tui, key(KeyCode::Char(c)));
        }
    }

    fn batch(names: &[&str]) -> ImportBatch {
        ImportBatch {
            source: PathBuf::from("/tmp/events.csv"),
            format: SpreadsheetFormat::Csv,
            events: names
                .iter()
                .map(|name| Event {
                    event_name: LocalizedText::same(*name),
                    ..Event::default()
                })
                .collect(),
            skipped_rows: 1,
            missing_headers: vec![],
        }
    }

    #[test]
    fn test_enter_requests_parse_of_trimmed_path() {
        let tui = tui();
        let (mut state, _) = ImportState::open(&tui);
        type_text(&mut state, &tui, "'/tmp/events.csv'");

        let update = state.handle_key(&tui, key(KeyCode::Enter));
        assert!(state.is_parsing());
        assert!(matches!(
            update.effects.as_slice(),
            [UiEffect::ParseImport { path, .. }] if path == &PathBuf::from("/tmp/events.csv")
        ));
    }

    #[test]
    fn test_blank_path_does_nothing() {
        let tui = tui();
        let (mut state, _) = ImportState::open(&tui);
        let update = state.handle_key(&tui, key(KeyCode::Enter));
        assert!(update.effects.is_empty());
        assert!(matches!(state.phase, ImportPhase::Editing));
    }

    #[test]
    fn test_busy_tasks_reject_new_parse() {
        let mut tui = tui();
        tui.tasks
            .state_mut(TaskKind::ImportSave)
            .on_started(&TaskStarted {
                id: TaskId(1),
                meta: TaskMeta::None,
            });
        let (mut state, _) = ImportState::open(&tui);
        type_text(&mut state, &tui, "a.csv");

        let update = state.handle_key(&tui, key(KeyCode::Enter));
        assert!(update.effects.is_empty());
        assert!(matches!(state.phase, ImportPhase::Failed(_)));
    }

    #[test]
    fn test_preview_enter_saves_parsed_events() {
        let tui = tui();
        let (mut state, _) = ImportState::open(&tui);
        state.on_parsed(Ok(batch(&["Expo", "Forum"])));

        let update = state.handle_key(&tui, key(KeyCode::Enter));
        assert!(matches!(state.phase, ImportPhase::Saving));
        assert!(matches!(update.transition, OverlayTransition::Stay));
        assert!(matches!(
            update.effects.as_slice(),
            [UiEffect::SaveImport { events, .. }] if events.len() == 2
        ));

        // Keys are ignored while saving.
        let update = state.handle_key(&tui, key(KeyCode::Enter));
        assert!(update.effects.is_empty());
    }

    #[test]
    fn test_empty_preview_cannot_be_saved() {
        let tui = tui();
        let (mut state, _) = ImportState::open(&tui);
        state.on_parsed(Ok(batch(&[])));
        let update = state.handle_key(&tui, key(KeyCode::Enter));
        assert!(update.effects.is_empty());

        let lines = preview_summary(&batch(&[]), Language::En);
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_paste_strips_newlines_and_resets_failure() {
        let tui = tui();
        let (mut state, _) = ImportState::open(&tui);
        state.on_parsed(Err("boom".to_string()));
        state.paste("/tmp/a.xlsx\n");
        assert_eq!(state.input, "/tmp/a.xlsx");
        assert!(matches!(state.phase, ImportPhase::Editing));
    }
}
