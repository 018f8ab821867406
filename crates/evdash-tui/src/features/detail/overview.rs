//! Overview tab and its view modes.

use evdash_core::config::ViewMode;
use evdash_core::insights::{self, EventSummary, MilestoneKind};
use evdash_core::model::Event;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::doc::{ACCENT_COLOR, Doc, LABEL_COLOR};
use crate::common::truncate_with_ellipsis;
use crate::strings;

const CHART_LABEL_WIDTH: usize = 18;
const CARD_MAX_WIDTH: usize = 38;
const CHART_COLORS: &[Color] = &[
    Color::Blue,
    Color::Green,
    Color::Magenta,
    Color::Yellow,
    Color::Cyan,
    Color::Red,
];

/// Selectable items in the overview: major topics in the standard view.
pub fn item_count(event: &Event, mode: ViewMode) -> usize {
    match mode {
        ViewMode::Standard => event.major_topics.len(),
        ViewMode::Charts | ViewMode::Pie | ViewMode::Cards | ViewMode::Timeline => 0,
    }
}

pub fn build(doc: &mut Doc, event: &Event, mode: ViewMode, cursor: Option<usize>, expanded: &dyn Fn(usize) -> bool) {
    match mode {
        ViewMode::Standard => standard(doc, event, cursor, expanded),
        ViewMode::Charts => charts(doc, event),
        ViewMode::Pie => pie(doc, event),
        ViewMode::Cards => cards(doc, event),
        ViewMode::Timeline => timeline(doc, event),
    }
}

// ============================================================================
// Standard
// ============================================================================

fn standard(doc: &mut Doc, event: &Event, cursor: Option<usize>, expanded: &dyn Fn(usize) -> bool) {
    let description = doc.tr(&event.description);
    if !description.trim().is_empty() {
        doc.heading(strings::DESCRIPTION);
        doc.paragraph(description);
    }

    if !event.featured_sessions.is_empty() {
        doc.heading(strings::FEATURED_SESSIONS);
        numbered_sessions(doc, event);
    }

    if !event.major_topics.is_empty() {
        doc.heading(strings::MAJOR_TOPICS);
        for (i, topic) in event.major_topics.iter().enumerate() {
            let open = expanded(i);
            let arrow = if open { "▾" } else { "▸" };
            doc.item(cursor == Some(i), &format!("{arrow} {}", doc.tr(&topic.name)));
            if open {
                let description = doc.tr(&topic.description);
                if !description.trim().is_empty() {
                    doc.indented(description, Style::default());
                }
                if let Some(media) = topic.media.as_deref().filter(|m| !m.trim().is_empty()) {
                    doc.indented(media, Style::default().fg(LABEL_COLOR));
                }
            }
        }
    }

    let mode = doc.tr(&event.mode);
    if !mode.trim().is_empty() {
        doc.heading(strings::EVENT_MODE);
        doc.paragraph(mode);
    }

    let industry = doc.tr(&event.target_industry);
    if !industry.trim().is_empty() {
        doc.heading(strings::TARGET_INDUSTRY);
        doc.paragraph(industry);
    }

    chip_section(doc, strings::TARGET_ROLES, &event.target_roles, Color::Green);
    chip_section(doc, strings::TAGS, &event.tags_or_keywords, Color::Yellow);

    let endorsements = doc.tr(&event.government_endorsements);
    if !endorsements.trim().is_empty() {
        doc.heading(strings::GOVERNMENT_ENDORSEMENTS);
        doc.paragraph(endorsements);
    }

    let region = doc.tr(&event.region);
    if !region.trim().is_empty() {
        doc.heading(strings::REGION);
        let tag = doc.tr(&event.region_tag);
        if tag.trim().is_empty() || tag == region {
            doc.paragraph(region);
        } else {
            doc.paragraph(&format!("{region} ({tag})"));
        }
    }

    chip_section(doc, strings::CATEGORIES, &event.category_tags, Color::Blue);
    chip_section(doc, strings::MAIN_SECTORS, &event.main_sectors, ACCENT_COLOR);
}

pub(super) fn numbered_sessions(doc: &mut Doc, event: &Event) {
    for (i, session) in event.featured_sessions.iter().enumerate() {
        let prefix = Span::styled(
            format!("{:>2}. ", i + 1),
            Style::default().fg(ACCENT_COLOR),
        );
        doc.wrapped(
            Some(prefix),
            4,
            doc.tr(&session.title),
            Style::default().add_modifier(Modifier::BOLD),
        );
        let description = doc.tr(&session.description);
        if !description.trim().is_empty() {
            doc.wrapped(
                Some(Span::raw("    ")),
                4,
                description,
                Style::default().fg(LABEL_COLOR),
            );
        }
    }
}

pub(super) fn chip_section(
    doc: &mut Doc,
    label: evdash_core::i18n::Label,
    items: &[evdash_core::i18n::LocalizedText],
    color: Color,
) {
    if items.iter().all(|item| item.is_blank()) {
        return;
    }
    doc.heading(label);
    let lang = doc.lang;
    doc.chips(items.iter().map(|item| item.display(lang)), color);
}

// ============================================================================
// Charts
// ============================================================================

fn charts(doc: &mut Doc, event: &Event) {
    let lang = doc.lang;

    doc.heading(strings::EVENT_SUMMARY);
    let composition = EventSummary::of(event).composition();
    let max = composition.iter().map(|(_, n)| *n).max().unwrap_or(0);
    for (i, (label, count)) in composition.iter().enumerate() {
        doc.bar(label.get(lang), *count, max, CHART_LABEL_WIDTH, color_at(i));
    }

    let coverage = insights::topic_coverage(event);
    if !coverage.is_empty() {
        doc.heading(strings::TOPIC_COVERAGE);
        let max = coverage.iter().map(|(_, n)| *n).max().unwrap_or(0);
        for (topic, count) in &coverage {
            doc.bar(topic.display(lang), *count, max, CHART_LABEL_WIDTH, Color::Blue);
        }
    }

    for (title, distribution) in [
        (strings::SESSION_TYPES, insights::session_types(event)),
        (strings::INDUSTRIES, insights::industries(event)),
    ] {
        if distribution.is_empty() {
            continue;
        }
        doc.heading(title);
        let max = distribution.slices.iter().map(|s| s.count).max().unwrap_or(0);
        for (i, slice) in distribution.slices.iter().enumerate() {
            doc.bar(slice.label.display(lang), slice.count, max, CHART_LABEL_WIDTH, color_at(i));
        }
    }
}

// ============================================================================
// Pie
// ============================================================================

fn pie(doc: &mut Doc, event: &Event) {
    let lang = doc.lang;
    let mut any = false;
    for (title, distribution) in [
        (strings::SESSION_TYPES, insights::session_types(event)),
        (strings::SPONSORSHIP_ROLES, insights::sponsorship_roles(event)),
        (strings::MODE, insights::speaking_modes(event)),
    ] {
        if distribution.is_empty() {
            continue;
        }
        any = true;
        doc.heading(title);
        for (i, slice) in distribution.slices.iter().enumerate() {
            doc.share(
                slice.label.display(lang),
                distribution.percent(slice),
                slice.count,
                CHART_LABEL_WIDTH,
                color_at(i),
            );
        }
    }

    if !event.category_tags.is_empty() {
        any = true;
        doc.heading(strings::CATEGORIES_BREAKDOWN);
        let share = 100.0 / event.category_tags.len() as f64;
        for (i, category) in event.category_tags.iter().enumerate() {
            doc.share(category.display(lang), share, 1, CHART_LABEL_WIDTH, color_at(i));
        }
    }

    if !any {
        doc.muted(doc.label(strings::NO_CHART_DATA));
    }
}

// ============================================================================
// Cards
// ============================================================================

fn cards(doc: &mut Doc, event: &Event) {
    let lang = doc.lang;
    let sections: [(evdash_core::i18n::Label, Vec<&str>, Color); 4] = [
        (
            strings::TOPICS_3D,
            event.major_topics.iter().map(|t| t.name.display(lang)).collect(),
            Color::Blue,
        ),
        (
            strings::FEATURED_SESSIONS,
            event
                .featured_sessions
                .iter()
                .map(|s| s.title.display(lang))
                .collect(),
            Color::Green,
        ),
        (
            strings::CATEGORIES,
            event.category_tags.iter().map(|c| c.display(lang)).collect(),
            Color::Magenta,
        ),
        (
            strings::TARGET_ROLES,
            event.target_roles.iter().map(|r| r.display(lang)).collect(),
            Color::Yellow,
        ),
    ];

    let mut any = false;
    for (title, items, color) in sections {
        let items: Vec<&str> = items.into_iter().filter(|i| !i.trim().is_empty()).collect();
        if items.is_empty() {
            continue;
        }
        any = true;
        doc.heading(title);
        for item in items {
            card(doc, item, color);
        }
    }
    if !any {
        doc.muted(doc.label(strings::NO_CHART_DATA));
    }
}

/// Boxed card with a drop shadow, three rows plus the shadow row.
fn card(doc: &mut Doc, text: &str, color: Color) {
    let outer = doc.width().saturating_sub(1).min(CARD_MAX_WIDTH).max(8);
    let inner = outer - 4;
    let text = truncate_with_ellipsis(text, inner);
    let pad = inner.saturating_sub(text.width());
    let edge = Style::default().fg(color);
    let shadow = Style::default().fg(Color::DarkGray);

    doc.line(Line::from(Span::styled(
        format!("╭{}╮", "─".repeat(outer - 2)),
        edge,
    )));
    doc.line(Line::from(vec![
        Span::styled("│ ", edge),
        Span::styled(text, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" ".repeat(pad)),
        Span::styled(" │", edge),
        Span::styled("▒", shadow),
    ]));
    doc.line(Line::from(vec![
        Span::styled(format!("╰{}╯", "─".repeat(outer - 2)), edge),
        Span::styled("▒", shadow),
    ]));
    doc.line(Line::from(Span::styled(
        format!(" {}", "▒".repeat(outer)),
        shadow,
    )));
}

// ============================================================================
// Timeline
// ============================================================================

fn timeline(doc: &mut Doc, event: &Event) {
    let lang = doc.lang;
    let schedule = insights::schedule(event);

    doc.heading(strings::EVENT_TIMELINE);
    if schedule.milestones.is_empty() {
        doc.muted(doc.label(strings::NO_DATED_MILESTONES));
    }
    for milestone in &schedule.milestones {
        let (kind, color) = match milestone.kind {
            MilestoneKind::Start => (strings::MILESTONE_START, Color::Green),
            MilestoneKind::End => (strings::MILESTONE_END, Color::Red),
            MilestoneKind::News => (strings::MILESTONE_NEWS, Color::Blue),
            MilestoneKind::Arrival => (strings::MILESTONE_ARRIVAL, Color::Yellow),
        };
        let prefix = Span::styled(
            format!("{}  ● {} ", milestone.date.format("%Y-%m-%d"), kind.get(lang)),
            Style::default().fg(color),
        );
        doc.wrapped(Some(prefix), 14, milestone.label.display(lang), Style::default());
    }

    doc.blank();
    doc.field(strings::TOTAL_SESSIONS, &event.featured_sessions.len().to_string());
    if let Some(days) = schedule.days() {
        doc.field(strings::EVENT_DAYS, &days.to_string());
    }
    doc.field(strings::FORMAT, event.mode.display(lang));
    doc.field(strings::DURATION, event.duration.display(lang));

    if !event.featured_sessions.is_empty() {
        doc.heading(strings::SESSIONS_TIMELINE);
        let last = event.featured_sessions.len() - 1;
        for (i, session) in event.featured_sessions.iter().enumerate() {
            let joint = if i == last { "└─" } else { "├─" };
            let prefix = Span::styled(
                format!("{joint} {} {} ", doc.label(strings::SESSION), i + 1),
                Style::default().fg(ACCENT_COLOR),
            );
            doc.wrapped(Some(prefix), 3, session.title.display(lang), Style::default());
        }
    }
}

fn color_at(i: usize) -> Color {
    CHART_COLORS[i % CHART_COLORS.len()]
}

#[cfg(test)]
mod tests {
    use evdash_core::i18n::{Language, LocalizedText};
    use evdash_core::model::{Session, Topic};

    use super::*;
    use crate::features::detail::doc::line_text;

    fn event() -> Event {
        Event {
            event_name: LocalizedText::new("Summit", "قمة"),
            description: LocalizedText::new("A gathering", "تجمع"),
            start_date: Some("2025-03-01".to_string()),
            end_date: Some("2025-03-03".to_string()),
            featured_sessions: vec![Session {
                title: LocalizedText::new("Opening", "الافتتاح"),
                description: LocalizedText::default(),
            }],
            major_topics: vec![Topic {
                name: LocalizedText::new("Robotics", "الروبوتات"),
                description: LocalizedText::new("Factory automation", "أتمتة المصانع"),
                media: None,
            }],
            ..Event::default()
        }
    }

    fn render(event: &Event, mode: ViewMode, expanded: bool) -> Vec<String> {
        let mut doc = Doc::new(60, Language::En);
        build(&mut doc, event, mode, Some(0), &|_| expanded);
        doc.finish().lines.iter().map(line_text).collect()
    }

    #[test]
    fn test_standard_accordion_expands_topic() {
        let collapsed = render(&event(), ViewMode::Standard, false);
        assert!(collapsed.iter().any(|l| l.contains("▸ Robotics")));
        assert!(!collapsed.iter().any(|l| l.contains("Factory automation")));

        let open = render(&event(), ViewMode::Standard, true);
        assert!(open.iter().any(|l| l.contains("▾ Robotics")));
        assert!(open.iter().any(|l| l.contains("Factory automation")));
    }

    #[test]
    fn test_standard_skips_absent_sections() {
        let lines = render(&Event::default(), ViewMode::Standard, false);
        assert!(lines.is_empty());
    }

    #[test]
    fn test_every_mode_handles_minimal_event() {
        for &mode in ViewMode::all() {
            let _ = render(&Event::default(), mode, false);
        }
    }

    #[test]
    fn test_timeline_lists_dated_milestones() {
        let lines = render(&event(), ViewMode::Timeline, false);
        assert!(lines.iter().any(|l| l.starts_with("2025-03-01") && l.contains("Summit")));
        assert!(lines.iter().any(|l| l.contains("Event Days: 3")));
    }

    #[test]
    fn test_cards_draw_boxes() {
        let lines = render(&event(), ViewMode::Cards, false);
        assert!(lines.iter().any(|l| l.starts_with('╭')));
        assert!(lines.iter().any(|l| l.contains("Robotics")));
    }
}
