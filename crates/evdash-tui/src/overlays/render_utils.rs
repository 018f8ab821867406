use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::common::truncate_start_with_ellipsis;

/// Centers a `width` x `height` popup in `area`, shrinking it to fit.
pub fn calculate_overlay_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Clears the popup background and draws its border and title.
pub fn render_overlay_container(frame: &mut Frame, area: Rect, title: &str, border_color: Color) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {title} "))
        .title_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(block, area);
}

pub struct OverlayConfig<'a> {
    pub title: &'a str,
    pub border_color: Color,
    pub width: u16,
    pub height: u16,
    pub hints: &'a [InputHint<'a>],
}

pub struct OverlayLayout {
    pub popup: Rect,
    pub body: Rect,
    pub footer: Rect,
}

/// Inner rectangles of a popup, without drawing anything.
pub fn overlay_layout(area: Rect, config: &OverlayConfig<'_>) -> OverlayLayout {
    let popup = calculate_overlay_area(area, config.width, config.height);
    let inner = Rect::new(
        popup.x + 1,
        popup.y + 1,
        popup.width.saturating_sub(2),
        popup.height.saturating_sub(2),
    );
    let footer_height = u16::from(!config.hints.is_empty());
    let body_height = inner.height.saturating_sub(footer_height);
    OverlayLayout {
        popup,
        body: Rect::new(inner.x, inner.y, inner.width, body_height),
        footer: Rect::new(inner.x, inner.y + body_height, inner.width, footer_height),
    }
}

/// Draws a popup container with its hint footer and returns its layout.
pub fn render_overlay(frame: &mut Frame, area: Rect, config: &OverlayConfig<'_>) -> OverlayLayout {
    let layout = overlay_layout(area, config);
    render_overlay_container(frame, layout.popup, config.title, config.border_color);
    if !config.hints.is_empty() {
        render_hints(frame, layout.footer, config.hints, config.border_color);
    }
    layout
}

pub struct InputHint<'a> {
    pub key: &'a str,
    pub action: &'a str,
}

impl<'a> InputHint<'a> {
    pub fn new(key: &'a str, action: &'a str) -> Self {
        Self { key, action }
    }
}

/// A prompt-style text input line.
pub struct InputLine<'a> {
    pub value: &'a str,
    pub placeholder: Option<&'a str>,
    pub prompt: &'a str,
    pub color: Color,
}

/// Renders "> <text>█", keeping the end of long values visible.
pub fn render_input_line(frame: &mut Frame, area: Rect, input: &InputLine<'_>) {
    let max_text_width = area.width.saturating_sub(input.prompt.len() as u16 + 1) as usize;
    let mut spans = vec![Span::styled(
        input.prompt,
        Style::default().fg(Color::DarkGray),
    )];

    match (input.value.is_empty(), input.placeholder) {
        (true, Some(placeholder)) => {
            spans.push(Span::styled("█", Style::default().fg(input.color)));
            spans.push(Span::styled(
                truncate_start_with_ellipsis(placeholder, max_text_width),
                Style::default().fg(Color::DarkGray),
            ));
        }
        _ => {
            spans.push(Span::styled(
                truncate_start_with_ellipsis(input.value, max_text_width),
                Style::default().fg(input.color),
            ));
            spans.push(Span::styled("█", Style::default().fg(input.color)));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub fn render_hints(frame: &mut Frame, area: Rect, hints: &[InputHint], highlight_color: Color) {
    let mut spans = Vec::new();
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(highlight_color)));
        spans.push(Span::styled(
            format!(" {}", hint.action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

/// Draws a horizontal rule `y_offset` rows into `area`.
pub fn render_separator(frame: &mut Frame, area: Rect, y_offset: u16) {
    if y_offset >= area.height {
        return;
    }
    let separator = "─".repeat(area.width as usize);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator,
            Style::default().fg(Color::DarkGray),
        ))),
        Rect::new(area.x, area.y + y_offset, area.width, 1),
    );
}
