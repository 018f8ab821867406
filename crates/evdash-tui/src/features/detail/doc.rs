//! Line builder for detail tabs.
//!
//! Tabs are laid out as pre-wrapped lines so the frame handler can measure
//! them and the renderer can scroll them without re-wrapping.

use evdash_core::i18n::{Label, Language, LocalizedText};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::common::{sanitize_for_display, wrap_text};

pub const HEADING_COLOR: Color = Color::Cyan;
pub const LABEL_COLOR: Color = Color::DarkGray;
pub const ACCENT_COLOR: Color = Color::Magenta;

/// Widest a bar may grow, in cells.
const MAX_BAR_WIDTH: usize = 40;

/// Laid-out tab body.
#[derive(Debug, Default)]
pub struct DetailContent {
    pub lines: Vec<Line<'static>>,
    /// First line of each selectable item, in cursor order.
    pub anchors: Vec<usize>,
}

pub struct Doc {
    lines: Vec<Line<'static>>,
    anchors: Vec<usize>,
    width: usize,
    pub lang: Language,
}

impl Doc {
    pub fn new(width: usize, lang: Language) -> Self {
        Self {
            lines: Vec::new(),
            anchors: Vec::new(),
            width: width.max(8),
            lang,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Shorthand for a record field in the active language.
    pub fn tr<'a>(&self, text: &'a LocalizedText) -> &'a str {
        text.display(self.lang)
    }

    pub fn label(&self, label: Label) -> &'static str {
        label.get(self.lang)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    pub fn line(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    /// Marks the next line as the start of a selectable item.
    pub fn anchor(&mut self) {
        self.anchors.push(self.lines.len());
    }

    /// Starts a selectable item: anchors it and writes its title with a
    /// selection marker.
    pub fn item(&mut self, selected: bool, title: &str) {
        self.anchor();
        let (marker, style) = if selected {
            (
                Span::styled(
                    "▶ ",
                    Style::default()
                        .fg(ACCENT_COLOR)
                        .add_modifier(Modifier::BOLD),
                ),
                Style::default()
                    .fg(ACCENT_COLOR)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                Span::raw("  "),
                Style::default().add_modifier(Modifier::BOLD),
            )
        };
        let title = if title.trim().is_empty() { "-" } else { title };
        self.wrapped(Some(marker), 2, title, style);
    }

    /// Key hint such as "[p] View Full Profile".
    pub fn hint(&mut self, key: &str, label: Label) {
        self.lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("[{key}] "), Style::default().fg(HEADING_COLOR)),
            Span::styled(label.get(self.lang), Style::default().fg(LABEL_COLOR)),
        ]));
    }

    pub fn heading(&mut self, label: Label) {
        self.heading_text(label.get(self.lang));
    }

    pub fn heading_text(&mut self, text: &str) {
        if !self.lines.is_empty() {
            self.blank();
        }
        self.lines.push(Line::from(Span::styled(
            format!("▍{}", sanitize_for_display(text)),
            Style::default()
                .fg(HEADING_COLOR)
                .add_modifier(Modifier::BOLD),
        )));
    }

    pub fn paragraph(&mut self, text: &str) {
        self.wrapped(None, 0, text, Style::default());
    }

    pub fn muted(&mut self, text: &str) {
        self.wrapped(None, 0, text, Style::default().fg(LABEL_COLOR));
    }

    pub fn styled(&mut self, text: &str, style: Style) {
        self.wrapped(None, 0, text, style);
    }

    /// "Label: value", skipped when the value is blank.
    pub fn field(&mut self, label: Label, value: &str) {
        if value.trim().is_empty() {
            return;
        }
        let prefix = Span::styled(
            format!("{}: ", label.get(self.lang)),
            Style::default().fg(LABEL_COLOR),
        );
        self.wrapped(Some(prefix), 2, value, Style::default());
    }

    /// Body text under an item, aligned with its title.
    pub fn indented(&mut self, text: &str, style: Style) {
        self.wrapped(Some(Span::raw("  ")), 2, text, style);
    }

    pub fn indented_field(&mut self, label: Label, value: &str) {
        if value.trim().is_empty() {
            return;
        }
        let prefix = Span::styled(
            format!("  {}: ", label.get(self.lang)),
            Style::default().fg(LABEL_COLOR),
        );
        self.wrapped(Some(prefix), 4, value, Style::default());
    }

    pub fn bullets<'a>(&mut self, items: impl IntoIterator<Item = &'a str>) {
        for item in items {
            self.bullet(item, Style::default());
        }
    }

    pub fn bullet(&mut self, item: &str, style: Style) {
        let prefix = Span::styled("• ", Style::default().fg(ACCENT_COLOR));
        self.wrapped(Some(prefix), 2, item, style);
    }

    /// Flows `[item]` tags across as many lines as needed.
    pub fn chips<'a>(&mut self, items: impl IntoIterator<Item = &'a str>, color: Color) {
        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut used = 0;
        for item in items {
            let item = item.trim();
            if item.is_empty() {
                continue;
            }
            let chip = format!("[{}]", sanitize_for_display(item));
            let chip_width = chip.width();
            if used > 0 && used + 1 + chip_width > self.width {
                self.lines.push(Line::from(std::mem::take(&mut spans)));
                used = 0;
            }
            if used > 0 {
                spans.push(Span::raw(" "));
                used += 1;
            }
            spans.push(Span::styled(chip, Style::default().fg(color)));
            used += chip_width;
        }
        if !spans.is_empty() {
            self.lines.push(Line::from(spans));
        }
    }

    /// Horizontal bar scaled against `max`.
    pub fn bar(&mut self, label: &str, value: usize, max: usize, label_width: usize, color: Color) {
        let label = crate::common::truncate_with_ellipsis(label, label_width);
        let pad = label_width.saturating_sub(label.width());
        let room = self
            .width
            .saturating_sub(label_width + 8)
            .clamp(1, MAX_BAR_WIDTH);
        let filled = if max == 0 {
            0
        } else {
            ((value * room) as f64 / max as f64).round() as usize
        };
        let filled = if value > 0 { filled.max(1) } else { 0 };
        self.lines.push(Line::from(vec![
            Span::raw(format!("{label}{} ", " ".repeat(pad))),
            Span::styled("█".repeat(filled), Style::default().fg(color)),
            Span::styled(
                "░".repeat(room - filled.min(room)),
                Style::default().fg(LABEL_COLOR),
            ),
            Span::raw(format!(" {value}")),
        ]));
    }

    /// Share bar: "label ▰▰▰▱▱ 40% (2)".
    pub fn share(&mut self, label: &str, percent: f64, count: usize, label_width: usize, color: Color) {
        const SEGMENTS: usize = 20;
        let label = crate::common::truncate_with_ellipsis(label, label_width);
        let pad = label_width.saturating_sub(label.width());
        let filled = ((percent / 100.0) * SEGMENTS as f64).round() as usize;
        let filled = filled.min(SEGMENTS);
        self.lines.push(Line::from(vec![
            Span::raw(format!("{label}{} ", " ".repeat(pad))),
            Span::styled("▰".repeat(filled), Style::default().fg(color)),
            Span::styled(
                "▱".repeat(SEGMENTS - filled),
                Style::default().fg(LABEL_COLOR),
            ),
            Span::raw(format!(" {percent:>3.0}% ({count})")),
        ]));
    }

    /// Wraps `text` after an optional prefix, indenting continuation lines.
    ///
    /// `indent` must not exceed the prefix width.
    pub fn wrapped(&mut self, prefix: Option<Span<'static>>, indent: usize, text: &str, style: Style) {
        let prefix_width = prefix.as_ref().map_or(0, |p| p.content.width());
        let wrap_width = self.width.saturating_sub(prefix_width).max(4);

        let mut wrapped = wrap_text(text, wrap_width).into_iter();
        let Some(first) = wrapped.next() else {
            return;
        };

        let mut spans = Vec::new();
        if let Some(prefix) = prefix {
            spans.push(prefix);
        }
        spans.push(Span::styled(first, style));
        self.lines.push(Line::from(spans));

        for line in wrapped {
            self.lines.push(Line::from(vec![
                Span::raw(" ".repeat(indent)),
                Span::styled(line, style),
            ]));
        }
    }

    pub fn finish(self) -> DetailContent {
        DetailContent {
            lines: self.lines,
            anchors: self.anchors,
        }
    }
}

/// Text content of a rendered line.
#[cfg(test)]
pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}
