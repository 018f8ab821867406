use evdash_core::insights::ParticipantStats;
use evdash_core::model::Event;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use super::doc::{Doc, LABEL_COLOR};
use crate::strings;

pub fn build(doc: &mut Doc, event: &Event, cursor: Option<usize>, expanded: &dyn Fn(usize) -> bool) {
    if event.participants_details.is_empty() {
        doc.muted(doc.label(strings::NO_PARTICIPANTS));
        return;
    }

    doc.heading(strings::EVENT_PARTICIPANTS);
    stats_line(doc, &ParticipantStats::of(event));

    let lang = doc.lang;
    for (i, participant) in event.participants_details.iter().enumerate() {
        doc.blank();
        let selected = cursor == Some(i);
        doc.item(selected, participant.name.display(lang));

        let subtitle: Vec<&str> = [
            participant.sponsorship_role.display(lang),
            participant.industry.display(lang),
        ]
        .into_iter()
        .filter(|s| !s.trim().is_empty())
        .collect();
        if !subtitle.is_empty() {
            doc.indented(&subtitle.join(" · "), Style::default().fg(Color::Yellow));
        }

        let brief = participant.profile_brief.display(lang);
        if !brief.trim().is_empty() {
            doc.indented(brief, Style::default().fg(LABEL_COLOR));
        }

        let open = expanded(i);
        if open {
            doc.indented_field(strings::HEADQUARTERS, participant.headquarters.display(lang));
            doc.indented_field(strings::FOUNDED, participant.founded.display(lang));
            doc.indented_field(strings::CEO, participant.ceo.display(lang));
            doc.indented_field(strings::WHY_ATTEND, participant.why_attend.display(lang));
            doc.indented_field(
                strings::CONTRIBUTION,
                participant.what_they_contributed.display(lang),
            );
            let products: Vec<&str> = participant
                .products
                .iter()
                .map(|p| p.display(lang))
                .filter(|p| !p.trim().is_empty())
                .collect();
            if !products.is_empty() {
                doc.indented_field(strings::PRODUCTS, &products.join(", "));
            }
        }

        if selected {
            doc.hint("Enter", if open { strings::LESS } else { strings::MORE });
            if event.company_profile(participant).is_some() {
                doc.hint("p", strings::FULL_PROFILE);
            }
        }
    }
}

fn stats_line(doc: &mut Doc, stats: &ParticipantStats) {
    let lang = doc.lang;
    let mut spans = Vec::new();
    for (label, value) in [
        (strings::TOTAL_PARTICIPANTS, stats.total),
        (strings::SPONSORS, stats.sponsors),
        (strings::INDUSTRIES, stats.industries),
        (strings::WITH_PRODUCTS, stats.with_products),
    ] {
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("{}: ", label.get(lang)),
            Style::default().fg(LABEL_COLOR),
        ));
        spans.push(Span::styled(value.to_string(), Style::default().fg(Color::Green)));
    }
    doc.line(Line::from(spans));
}
