use evdash_core::insights;
use evdash_core::model::Event;
use ratatui::style::Color;

use super::doc::Doc;
use super::overview::{chip_section, numbered_sessions};
use crate::strings;

pub fn build(doc: &mut Doc, event: &Event) {
    let summary = doc.tr(&event.agenda_summary);
    if !summary.trim().is_empty() {
        doc.heading(strings::AGENDA_SUMMARY);
        doc.paragraph(summary);
    }

    chip_section(doc, strings::KEY_TOPICS, &event.key_topics, Color::Cyan);

    if event.start_date.is_some() || event.end_date.is_some() {
        doc.heading(strings::EVENT_SCHEDULE);
        doc.field(strings::START_DATE, event.start_date.as_deref().unwrap_or_default());
        doc.field(strings::END_DATE, event.end_date.as_deref().unwrap_or_default());
        if let Some(days) = insights::schedule(event).days() {
            let duration = format!("{days} {}", doc.label(strings::DAYS));
            doc.field(strings::DURATION, &duration);
        }
    }

    if !event.featured_sessions.is_empty() {
        doc.heading(strings::FEATURED_SESSIONS);
        numbered_sessions(doc, event);
    }

    if doc.is_empty() {
        doc.muted(doc.label(strings::NO_AGENDA));
    }
}
