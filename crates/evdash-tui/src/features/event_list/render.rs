use evdash_core::filter::{FilterChoice, FilterField};
use evdash_core::i18n::{Label, Language};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::common::truncate_with_ellipsis;
use crate::state::{Focus, TuiState};
use crate::strings;

/// Rows per list item: name, then dates and location.
pub const ITEM_HEIGHT: u16 = 2;

/// Filter summary rows above the list.
const FILTER_HEIGHT: u16 = 2;

/// Width of the selection marker column.
const MARKER_WIDTH: usize = 2;

fn sidebar_block(state: &TuiState) -> Block<'static> {
    let lang = state.language;
    let border = if state.focus == Focus::List {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let title = format!(
        " {} ({}/{}) ",
        strings::EVENTS.get(lang),
        state.list.visible.len(),
        state.dataset.len()
    );
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(title)
        .title_style(Style::default().fg(border).add_modifier(Modifier::BOLD))
}

/// Area holding list items inside a sidebar at `area`.
pub fn list_area(area: Rect) -> Rect {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    Rect {
        y: inner.y + FILTER_HEIGHT.min(inner.height),
        height: inner.height.saturating_sub(FILTER_HEIGHT),
        ..inner
    }
}

/// List position under screen row `row`, if any.
pub fn position_at(state: &TuiState, area: Rect, row: u16) -> Option<usize> {
    let list = list_area(area);
    if row < list.y || row >= list.y + list.height {
        return None;
    }
    let pos = state.list.offset + usize::from((row - list.y) / ITEM_HEIGHT);
    (pos < state.list.visible.len()).then_some(pos)
}

pub fn render_event_list(state: &TuiState, frame: &mut Frame, area: Rect) {
    let lang = state.language;
    let block = sidebar_block(state);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    render_filter_summary(state, frame, Rect {
        height: FILTER_HEIGHT.min(inner.height),
        ..inner
    });

    let list_area = list_area(area);
    if state.list.visible.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            strings::NO_MATCHING_EVENTS.get(lang),
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(empty, list_area);
        return;
    }

    let text_width = (list_area.width as usize).saturating_sub(MARKER_WIDTH);
    let items: Vec<ListItem<'static>> = state
        .list
        .visible
        .iter()
        .filter_map(|&index| state.dataset.get(index))
        .map(|event| {
            let name = truncate_with_ellipsis(event.name(lang), text_width);
            let mut meta: Vec<String> = Vec::new();
            let dates = event.date_range();
            if !dates.is_empty() {
                meta.push(dates);
            }
            let location = event.location(lang);
            if !location.is_empty() {
                meta.push(location);
            }
            let meta = truncate_with_ellipsis(&meta.join(" · "), text_width);
            ListItem::new(vec![
                Line::from(Span::styled(name, Style::default().add_modifier(Modifier::BOLD))),
                Line::from(Span::styled(meta, Style::default().fg(Color::DarkGray))),
            ])
        })
        .collect();

    let mut list_state = ListState::default()
        .with_offset(state.list.offset)
        .with_selected(state.list.selected);
    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(Color::Magenta)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");
    frame.render_stateful_widget(list, list_area, &mut list_state);
}

fn render_filter_summary(state: &TuiState, frame: &mut Frame, area: Rect) {
    let lang = state.language;
    let lines: Vec<Line<'static>> = FilterField::all()
        .iter()
        .map(|&field| {
            let choice = state.filter.choice(field);
            let value = choice_label(field, choice, lang);
            let style = if choice.is_all() {
                Style::default().fg(Color::Gray)
            } else {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            };
            let label = field_labels(field).0;
            let prefix = format!("{}: ", label.get(lang));
            let room = (area.width as usize).saturating_sub(prefix.chars().count());
            Line::from(vec![
                Span::styled(prefix, Style::default().fg(Color::DarkGray)),
                Span::styled(truncate_with_ellipsis(&value, room), style),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

/// Field name and its "all" label.
pub fn field_labels(field: FilterField) -> (Label, Label) {
    match field {
        FilterField::Region => (strings::REGION, strings::ALL_REGIONS),
        FilterField::EventType => (strings::TYPE, strings::ALL_TYPES),
    }
}

/// Display text of a filter choice.
pub fn choice_label(field: FilterField, choice: &FilterChoice, lang: Language) -> String {
    match choice {
        FilterChoice::All => field_labels(field).1.get(lang).to_string(),
        FilterChoice::Value(value) => value.clone(),
    }
}
