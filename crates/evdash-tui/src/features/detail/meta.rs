use evdash_core::i18n::Language;
use evdash_core::model::Event;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use super::doc::{Doc, LABEL_COLOR};
use super::overview::chip_section;
use crate::strings;

const GAUGE_WIDTH: usize = 20;

/// A link listed on the meta tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaLink<'a> {
    pub label: String,
    pub url: &'a str,
}

/// Event links in display order: registration, source, website, brochure,
/// then social profiles by network name.
pub fn links(event: &Event, lang: Language) -> Vec<MetaLink<'_>> {
    let fixed = [
        (strings::REGISTRATION_URL, event.registration_url.as_deref()),
        (strings::SOURCE_URL, event.source_url.as_deref()),
        (strings::WEBSITE, event.official_website.as_deref()),
        (strings::BROCHURE, event.brochure_link.as_deref()),
    ];
    let fixed = fixed.into_iter().filter_map(|(label, url)| {
        url.filter(|u| !u.trim().is_empty()).map(|url| MetaLink {
            label: label.get(lang).to_string(),
            url,
        })
    });
    let social = event
        .social_links
        .iter()
        .filter(|(_, url)| !url.trim().is_empty())
        .map(|(network, url)| MetaLink {
            label: capitalize(network),
            url: url.as_str(),
        });
    fixed.chain(social).collect()
}

pub fn build(doc: &mut Doc, event: &Event, cursor: Option<usize>) {
    let lang = doc.lang;
    doc.heading(strings::META_ADMIN);
    doc.field(strings::SOURCE_CREDIBILITY, event.source_credibility.display(lang));
    doc.field(
        strings::LAST_UPDATED,
        event.last_updated.as_deref().unwrap_or_default(),
    );
    if let Some(score) = event.impact_score {
        impact_gauge(doc, score);
    }
    doc.field(strings::EXPECTED_ATTENDEES, event.expected_attendees.display(lang));
    doc.field(strings::ATTENDANCE_DETAILS, event.expected_attendance.display(lang));
    doc.field(strings::REGISTRATION_TYPE, event.registration_type.display(lang));
    doc.field(
        strings::CONTACT_EMAIL,
        event.contact_email.as_deref().unwrap_or_default(),
    );

    let event_links = links(event, lang);
    let fixed_count = event_links.len() - event
        .social_links
        .values()
        .filter(|url| !url.trim().is_empty())
        .count();
    for (i, link) in event_links.iter().enumerate() {
        if i == fixed_count {
            doc.heading(strings::SOCIAL_LINKS);
        }
        let selected = cursor == Some(i);
        doc.item(selected, &link.label);
        doc.indented(link.url, Style::default().fg(Color::Blue));
    }

    chip_section(doc, strings::KEYWORDS_AND_TAGS, &event.tags_or_keywords, Color::Yellow);
}

/// Impact score on a 0-100 scale.
fn impact_gauge(doc: &mut Doc, score: f64) {
    let score = score.clamp(0.0, 100.0);
    let filled = ((score / 100.0) * GAUGE_WIDTH as f64).round() as usize;
    let color = if score >= 75.0 {
        Color::Green
    } else if score >= 50.0 {
        Color::Yellow
    } else {
        Color::Red
    };
    doc.line(Line::from(vec![
        Span::styled(
            format!("{}: ", doc.label(strings::IMPACT_SCORE)),
            Style::default().fg(LABEL_COLOR),
        ),
        Span::styled("█".repeat(filled), Style::default().fg(color)),
        Span::styled(
            "░".repeat(GAUGE_WIDTH - filled),
            Style::default().fg(LABEL_COLOR),
        ),
        Span::styled(
            format!(" {score:.0}/100"),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]));
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::detail::doc::line_text;

    fn event() -> Event {
        let mut event = Event {
            registration_url: Some("https://reg.example".to_string()),
            official_website: Some("https://site.example".to_string()),
            brochure_link: Some("  ".to_string()),
            impact_score: Some(82.0),
            ..Event::default()
        };
        event
            .social_links
            .insert("twitter".to_string(), "https://x.com/summit".to_string());
        event
    }

    #[test]
    fn test_links_skip_blank_and_append_social() {
        let event = event();
        let links = links(&event, Language::En);
        let labels: Vec<&str> = links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, ["Registration URL", "Website", "Twitter"]);
        assert_eq!(links[2].url, "https://x.com/summit");
    }

    #[test]
    fn test_build_anchors_each_link() {
        let mut doc = Doc::new(60, Language::En);
        build(&mut doc, &event(), Some(0));
        let content = doc.finish();
        assert_eq!(content.anchors.len(), 3);
        let lines: Vec<String> = content.lines.iter().map(line_text).collect();
        assert!(lines.iter().any(|l| l.starts_with("Impact Score: ") && l.ends_with(" 82/100")));
        assert!(lines.iter().any(|l| l.contains("Social Links")));
    }
}
