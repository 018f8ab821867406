//! Pure view/render functions for the dashboard.
//!
//! Functions here take `&AppState`, draw to a ratatui Frame, and never mutate
//! state or return effects.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::features::detail::render_detail;
use crate::features::event_list::render_event_list;
use crate::features::statusline::render_status_line;
use crate::overlays::OverlayExt;
use crate::state::{AppState, LayoutState, TuiState};
use crate::strings;

/// Height of the title row.
const HEADER_HEIGHT: u16 = 1;

/// Height of the status line.
const STATUS_HEIGHT: u16 = 1;

/// Sidebar width bounds; it takes a third of the screen in between.
const MIN_SIDEBAR_WIDTH: u16 = 28;
const MAX_SIDEBAR_WIDTH: u16 = 44;

/// Splits the screen into header, sidebar, detail pane and status line.
pub fn app_layout(area: Rect) -> LayoutState {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);

    let sidebar_width = (area.width / 3)
        .clamp(MIN_SIDEBAR_WIDTH, MAX_SIDEBAR_WIDTH)
        .min(area.width);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
        .split(rows[1]);

    LayoutState {
        screen: area,
        header: rows[0],
        sidebar: columns[0],
        detail: columns[1],
        status: rows[2],
    }
}

/// Renders the entire dashboard to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let state = &app.tui;
    let layout = app_layout(area);

    render_header(state, frame, layout.header);
    render_event_list(state, frame, layout.sidebar);
    render_detail(state, frame, layout.detail);
    render_status_line(state, frame, layout.status);

    app.overlay.render(frame, area, state);
}

/// Title on the reading side, the language toggle on the other.
fn render_header(state: &TuiState, frame: &mut Frame, area: Rect) {
    let lang = state.language;
    let title = Line::from(vec![
        Span::styled("◆ ", Style::default().fg(Color::Magenta)),
        Span::styled(
            strings::APP_TITLE.get(lang),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    let toggle = Line::from(vec![
        Span::styled("[L] ", Style::default().fg(Color::Cyan)),
        Span::styled(
            lang.toggle().native_name(),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let (title_alignment, toggle_alignment) = if lang.is_rtl() {
        (Alignment::Right, Alignment::Left)
    } else {
        (Alignment::Left, Alignment::Right)
    };
    frame.render_widget(Paragraph::new(title).alignment(title_alignment), area);
    frame.render_widget(Paragraph::new(toggle).alignment(toggle_alignment), area);
}
