use evdash_core::insights::SpeakerStats;
use evdash_core::model::{Event, Speaker};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use super::doc::{ACCENT_COLOR, Doc, LABEL_COLOR};
use crate::strings;

pub fn build(doc: &mut Doc, event: &Event, cursor: Option<usize>) {
    if event.speakers.is_empty() {
        doc.heading(strings::NO_SPEAKERS);
        doc.muted(doc.label(strings::NO_SPEAKERS_HINT));
        return;
    }

    doc.heading(strings::FEATURED_SPEAKERS);
    stats_line(doc, &SpeakerStats::of(event));

    for (i, speaker) in event.speakers.iter().enumerate() {
        doc.blank();
        speaker_card(doc, speaker, cursor == Some(i));
    }
}

fn speaker_card(doc: &mut Doc, speaker: &Speaker, selected: bool) {
    let lang = doc.lang;
    let mut title = speaker.name.display(lang).to_string();
    if speaker.mock_generated {
        title.push_str(&format!(" [{}]", doc.label(strings::AI_GENERATED)));
    }
    doc.item(selected, &title);

    let role = speaker.role_title_at_organization.display(lang);
    let org = speaker.organization.display(lang);
    let affiliation = match (role.trim().is_empty(), org.trim().is_empty()) {
        (false, false) => format!("{role} · {org}"),
        (false, true) => role.to_string(),
        (true, false) => org.to_string(),
        (true, true) => String::new(),
    };
    if !affiliation.is_empty() {
        doc.indented(&affiliation, Style::default().fg(Color::Yellow));
    }

    let mut session: Vec<String> = Vec::new();
    let session_type = speaker.session_type.display(lang);
    if !session_type.trim().is_empty() {
        session.push(session_type.to_string());
    }
    let session_title = speaker.assigned_session_title.display(lang);
    if !session_title.trim().is_empty() {
        session.push(session_title.to_string());
    }
    if let Some(minutes) = speaker.planned_session_length_minutes {
        session.push(format!("{minutes} {}", doc.label(strings::MINUTES)));
    }
    if speaker.is_virtual() {
        session.push(doc.label(strings::VIRTUAL).to_string());
    }
    if !session.is_empty() {
        doc.indented(&session.join(" · "), Style::default().fg(ACCENT_COLOR));
    }

    let background = speaker.background_short.display(lang);
    if !background.trim().is_empty() {
        doc.indented(background, Style::default().fg(LABEL_COLOR));
    }

    let expertise: Vec<&str> = speaker
        .expertise
        .iter()
        .map(|e| e.display(lang))
        .filter(|e| !e.trim().is_empty())
        .collect();
    if !expertise.is_empty() {
        doc.indented_field(strings::EXPERTISE, &expertise.join(", "));
    }

    if let Some(details) = &speaker.in_person_details {
        let arrival: Vec<&str> = [
            details.arrival_city.display(lang),
            details.arrival_date.as_deref().unwrap_or_default(),
        ]
        .into_iter()
        .filter(|s| !s.trim().is_empty())
        .collect();
        if !arrival.is_empty() {
            doc.indented_field(strings::ARRIVAL, &arrival.join(", "));
        }
    }

    if selected && speaker.enriched_profile.is_some() {
        doc.hint("p", strings::VIEW_PROFILE);
    }
}

fn stats_line(doc: &mut Doc, stats: &SpeakerStats) {
    let lang = doc.lang;
    let mut spans = Vec::new();
    for (label, value) in [
        (strings::TOTAL_SPEAKERS, stats.total),
        (strings::VIRTUAL, stats.virtual_count),
        (strings::KEYNOTES, stats.keynotes),
        (strings::COMPANIES, stats.organizations),
    ] {
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("{}: ", label.get(lang)),
            Style::default().fg(LABEL_COLOR),
        ));
        spans.push(Span::styled(
            value.to_string(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ));
    }
    doc.line(Line::from(spans));
}

#[cfg(test)]
mod tests {
    use evdash_core::i18n::{Language, LocalizedText};
    use evdash_core::model::{InPersonDetails, SpeakerProfile};

    use super::*;
    use crate::features::detail::doc::line_text;

    fn speaker(name: &str) -> Speaker {
        Speaker {
            name: LocalizedText::same(name),
            role_title_at_organization: LocalizedText::new("CTO", "المدير التقني"),
            organization: LocalizedText::same("Acme"),
            session_type: LocalizedText::same("Keynote"),
            planned_session_length_minutes: Some(30),
            ..Speaker::default()
        }
    }

    fn render(event: &Event, cursor: Option<usize>) -> Vec<String> {
        let mut doc = Doc::new(80, Language::En);
        build(&mut doc, event, cursor);
        doc.finish().lines.iter().map(line_text).collect()
    }

    #[test]
    fn test_empty_state() {
        let lines = render(&Event::default(), None);
        assert!(lines[0].contains("No Speakers Yet"));
    }

    #[test]
    fn test_speaker_card_lines() {
        let mut virtual_speaker = speaker("Lina");
        virtual_speaker.in_person_details = Some(InPersonDetails {
            speaking_mode: LocalizedText::same("Virtual"),
            ..InPersonDetails::default()
        });
        let event = Event {
            speakers: vec![speaker("Omar"), virtual_speaker],
            ..Event::default()
        };
        let lines = render(&event, None);
        assert!(lines.iter().any(|l| l.contains("Total Speakers: 2") && l.contains("Virtual: 1")));
        assert!(lines.iter().any(|l| l.contains("CTO · Acme")));
        assert!(lines.iter().any(|l| l.contains("Keynote · 30 min")));
    }

    #[test]
    fn test_profile_hint_only_for_selected_enriched_speaker() {
        let mut enriched = speaker("Omar");
        enriched.enriched_profile = Some(SpeakerProfile::default());
        enriched.mock_generated = true;
        let event = Event {
            speakers: vec![enriched],
            ..Event::default()
        };
        assert!(!render(&event, None).iter().any(|l| l.contains("[p]")));
        let lines = render(&event, Some(0));
        assert!(lines.iter().any(|l| l.contains("[p] View Full Profile")));
        assert!(lines.iter().any(|l| l.contains("Omar [AI]")));
    }
}
