use evdash_core::i18n::Language;
use evdash_core::model::Event;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Tabs,
};
use unicode_width::UnicodeWidthStr;

use super::state::{DetailState, DetailTab};
use super::{build_content, hero};
use crate::state::{Focus, TuiState};
use crate::strings;

/// Width reserved for the scrollbar right of the tab body.
const SCROLLBAR_WIDTH: u16 = 1;

/// Tab bar plus the rule under it.
const TAB_BAR_HEIGHT: u16 = 2;

struct DetailAreas {
    hero: Rect,
    tabs: Rect,
    rule: Rect,
    body: Rect,
}

fn pane_block(focused: bool) -> Block<'static> {
    let border = if focused { Color::Cyan } else { Color::DarkGray };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn split(inner: Rect, event: &Event, lang: Language) -> DetailAreas {
    let hero_height = hero::build(event, lang, inner.width as usize).lines.len() as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(hero_height),
            Constraint::Length(1),
            Constraint::Length(TAB_BAR_HEIGHT - 1),
            Constraint::Min(0),
        ])
        .split(inner);
    DetailAreas {
        hero: chunks[0],
        tabs: chunks[1],
        rule: chunks[2],
        body: chunks[3],
    }
}

/// Text area of the tab body for a detail pane at `area`, scrollbar excluded.
pub fn detail_body_area(area: Rect, event: &Event, lang: Language) -> Rect {
    let inner = pane_block(false).inner(area);
    let body = split(inner, event, lang).body;
    Rect {
        width: body.width.saturating_sub(SCROLLBAR_WIDTH),
        ..body
    }
}

pub fn render_detail(state: &TuiState, frame: &mut Frame, area: Rect) {
    let lang = state.language;
    let focused = state.focus == Focus::Detail;
    let block = pane_block(focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(event) = state.selected_event() else {
        let message = if state.list.visible.is_empty() {
            strings::NO_MATCHING_EVENTS
        } else {
            strings::SELECT_EVENT
        };
        let placeholder = Paragraph::new(Line::from(Span::styled(
            message.get(lang),
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center);
        let y = inner.y + inner.height / 2;
        frame.render_widget(placeholder, Rect { y, height: 1, ..inner });
        return;
    };

    let detail = &state.detail;
    let areas = split(inner, event, lang);
    let alignment = if lang.is_rtl() {
        Alignment::Right
    } else {
        Alignment::Left
    };

    let hero = hero::build(event, lang, areas.hero.width as usize);
    frame.render_widget(Paragraph::new(hero.lines).alignment(alignment), areas.hero);

    render_tab_bar(detail, lang, frame, areas.tabs);
    render_rule(detail, lang, frame, areas.rule);

    let text_area = Rect {
        width: areas.body.width.saturating_sub(SCROLLBAR_WIDTH),
        ..areas.body
    };
    let cursor = focused.then_some(detail.cursor);
    let content = build_content(event, detail, lang, text_area.width as usize, cursor);
    let total = content.lines.len();
    let viewport = text_area.height as usize;
    let offset = detail.scroll.min(total.saturating_sub(viewport));
    let visible: Vec<Line<'static>> = content
        .lines
        .into_iter()
        .skip(offset)
        .take(viewport)
        .collect();
    frame.render_widget(Paragraph::new(visible).alignment(alignment), text_area);

    if total > viewport {
        let mut scrollbar_state = ScrollbarState::new(total.saturating_sub(viewport))
            .position(offset)
            .viewport_content_length(viewport);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None)
                .thumb_style(Style::default().fg(Color::Cyan))
                .track_style(Style::default().fg(Color::DarkGray)),
            areas.body,
            &mut scrollbar_state,
        );
    }
}

fn render_tab_bar(detail: &DetailState, lang: Language, frame: &mut Frame, area: Rect) {
    let titles: Vec<Line<'static>> = DetailTab::all()
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.label().get(lang))))
        .collect();
    let tabs = Tabs::new(titles)
        .select(detail.tab.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::styled("│", Style::default().fg(Color::DarkGray)));
    frame.render_widget(tabs, area);
}

/// Rule under the tab bar. On the overview it also names the view mode.
fn render_rule(detail: &DetailState, lang: Language, frame: &mut Frame, area: Rect) {
    let rule_style = Style::default().fg(Color::DarkGray);
    let width = area.width as usize;
    let line = if detail.tab == DetailTab::Overview {
        let label = format!(" ◆ {} [v] ", detail.view_mode.label().get(lang));
        let label_width = label.width();
        let lead = 2.min(width);
        Line::from(vec![
            Span::styled("─".repeat(lead), rule_style),
            Span::styled(label, Style::default().fg(Color::Magenta)),
            Span::styled(
                "─".repeat(width.saturating_sub(lead + label_width)),
                rule_style,
            ),
        ])
    } else {
        Line::from(Span::styled("─".repeat(width), rule_style))
    };
    frame.render_widget(Paragraph::new(line), area);
}
