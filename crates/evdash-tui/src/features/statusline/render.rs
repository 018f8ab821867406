use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::state::StatusKind;
use crate::common::{TaskKind, TaskMeta};
use crate::state::{Focus, TuiState};
use crate::strings;

/// Spinner frames for running tasks.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Ticks per spinner frame.
const SPINNER_SPEED_DIVISOR: usize = 2;

/// Spinner glyph for the given tick count.
pub fn spinner_glyph(tick: usize) -> &'static str {
    SPINNER_FRAMES[(tick / SPINNER_SPEED_DIVISOR) % SPINNER_FRAMES.len()]
}

/// Renders the bottom status line: task progress, a transient message or
/// key hints on the left, counts and language on the right.
pub fn render_status_line(state: &TuiState, frame: &mut Frame, area: Rect) {
    let lang = state.language;
    let hint = Style::default().fg(Color::DarkGray);

    let left: Vec<Span<'static>> = if let Some((kind, meta)) = state.tasks.running_meta() {
        let label = match kind {
            TaskKind::ImportParse => strings::PARSING,
            TaskKind::ImportSave => strings::SAVING,
        };
        let mut spans = vec![
            Span::styled(spinner_glyph(state.spinner_frame), Style::default().fg(Color::Yellow)),
            Span::raw(" "),
            Span::styled(label.get(lang), Style::default().fg(Color::Yellow)),
        ];
        if let TaskMeta::Import { file_name } = meta {
            spans.push(Span::styled(format!(" {file_name}"), hint));
        }
        spans
    } else if let Some(message) = &state.status.message {
        let color = match message.kind {
            StatusKind::Info => Color::Cyan,
            StatusKind::Success => Color::Green,
            StatusKind::Error => Color::Red,
        };
        vec![Span::styled(message.text.clone(), Style::default().fg(color))]
    } else {
        let keys: &[(&str, &str)] = match state.focus {
            Focus::List => &[
                ("↑↓", "select"),
                ("→", "details"),
                ("f", "filter"),
                ("L", "language"),
                ("i", "import"),
                ("q", "quit"),
            ],
            Focus::Detail => &[
                ("Tab", "section"),
                ("↑↓", "move"),
                ("Enter", "expand"),
                ("v", "view"),
                ("o", "open"),
                ("Esc", "back"),
            ],
        };
        let mut spans = Vec::new();
        for (i, (key, action)) in keys.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
            spans.push(Span::styled(format!(" {action}"), hint));
        }
        spans
    };

    let mut right = format!(
        "{}/{} {}",
        state.list.visible.len(),
        state.dataset.len(),
        strings::EVENTS.get(lang)
    );
    let imported = state.dataset.imported_count();
    if imported > 0 {
        right.push_str(&format!(" · {imported} {}", strings::IMPORTED.get(lang)));
    }
    right.push_str(&format!(" · {} ", lang.native_name()));

    let right_width = right.chars().count() as u16;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(right_width)])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(left)).alignment(Alignment::Left),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(right, hint))).alignment(Alignment::Right),
        chunks[1],
    );
}
