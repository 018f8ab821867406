use evdash_core::model::Event;
use ratatui::style::Color;

use super::doc::Doc;
use super::overview::chip_section;
use crate::strings;

pub fn build(doc: &mut Doc, event: &Event) {
    if !event.has_organizations() {
        doc.muted(doc.label(strings::NO_ORGANIZATIONS));
        return;
    }

    doc.heading(strings::ORGANIZATIONS_AND_PARTNERS);
    let lang = doc.lang;
    for (label, list) in [
        (strings::REPRESENTED_ORGANIZATIONS, &event.represented_organizations),
        (strings::SPONSORS, &event.sponsors),
        (strings::STRATEGIC_PARTNERS, &event.strategic_partners),
    ] {
        if list.iter().all(|item| item.is_blank()) {
            continue;
        }
        doc.heading(label);
        doc.bullets(
            list.iter()
                .map(|item| item.display(lang))
                .filter(|item| !item.trim().is_empty()),
        );
    }
    chip_section(doc, strings::LEADING_PARTNERS, &event.leading_partners, Color::Green);
}
