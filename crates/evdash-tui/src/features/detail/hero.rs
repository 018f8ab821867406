//! Event header shown above the tab bar.

use evdash_core::i18n::Language;
use evdash_core::model::Event;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use super::doc::{DetailContent, Doc, LABEL_COLOR};
use crate::strings;

/// Tallest the hero may grow before the tab body gets squeezed.
pub const MAX_HERO_HEIGHT: usize = 8;

pub fn build(event: &Event, lang: Language, width: usize) -> DetailContent {
    let mut doc = Doc::new(width, lang);

    doc.styled(
        event.name(lang),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let kind: Vec<&str> = [event.event_type.display(lang), event.organizer.display(lang)]
        .into_iter()
        .filter(|s| !s.trim().is_empty())
        .collect();
    if !kind.is_empty() {
        doc.styled(&kind.join(" · "), Style::default().fg(Color::Yellow));
    }

    let dates = event.date_range();
    doc.field(strings::DATES, &dates);
    doc.field(strings::DURATION, event.duration.display(lang));

    let mut location = event.location(lang);
    let venue = event.venue.display(lang);
    if !venue.trim().is_empty() {
        if location.is_empty() {
            location = venue.to_string();
        } else {
            location = format!("{venue}, {location}");
        }
    }
    doc.field(strings::LOCATION, &location);
    doc.field(strings::REGION, event.region.display(lang));

    let mode: Vec<&str> = [event.mode.display(lang), event.frequency.display(lang)]
        .into_iter()
        .filter(|s| !s.trim().is_empty())
        .collect();
    doc.field(strings::MODE, &mode.join(" · "));

    let links: Vec<Span<'static>> = [
        (strings::WEBSITE, event.official_website.as_deref()),
        (strings::REGISTER, event.registration_url.as_deref()),
        (strings::BROCHURE, event.brochure_link.as_deref()),
    ]
    .into_iter()
    .filter(|(_, url)| url.is_some_and(|u| !u.trim().is_empty()))
    .map(|(label, _)| Span::styled(format!("↗ {}  ", label.get(lang)), Style::default().fg(Color::Blue)))
    .collect();
    if !links.is_empty() {
        doc.line(Line::from(links));
    }

    let mut content = doc.finish();
    if content.lines.len() > MAX_HERO_HEIGHT {
        content.lines.truncate(MAX_HERO_HEIGHT);
        if let Some(last) = content.lines.last_mut() {
            last.spans.push(Span::styled(" …", Style::default().fg(LABEL_COLOR)));
        }
    }
    content
}

#[cfg(test)]
mod tests {
    use evdash_core::i18n::LocalizedText;

    use super::*;
    use crate::features::detail::doc::line_text;

    #[test]
    fn test_hero_lines() {
        let event = Event {
            event_name: LocalizedText::new("Future Industries Summit", "قمة الصناعات المستقبلية"),
            city: LocalizedText::new("Riyadh", "الرياض"),
            country: LocalizedText::new("Saudi Arabia", "السعودية"),
            start_date: Some("2025-03-01".to_string()),
            end_date: Some("2025-03-03".to_string()),
            official_website: Some("https://fis.example".to_string()),
            ..Event::default()
        };
        let lines: Vec<String> = build(&event, Language::Ar, 60)
            .lines
            .iter()
            .map(line_text)
            .collect();
        assert_eq!(lines[0], "قمة الصناعات المستقبلية");
        assert!(lines.iter().any(|l| l.contains("2025-03-01 - 2025-03-03")));
        assert!(lines.iter().any(|l| l.contains("الرياض, السعودية")));
        assert!(lines.iter().any(|l| l.contains("↗ الموقع")));
    }

    #[test]
    fn test_hero_height_is_capped() {
        let event = Event {
            event_name: LocalizedText::same("word ".repeat(200)),
            ..Event::default()
        };
        let content = build(&event, Language::En, 20);
        assert_eq!(content.lines.len(), MAX_HERO_HEIGHT);
    }
}
