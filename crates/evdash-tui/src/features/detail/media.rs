use evdash_core::model::Event;
use ratatui::style::{Color, Style};

use super::doc::{Doc, LABEL_COLOR};
use crate::strings;

/// Media partners first, then news items.
pub fn item_count(event: &Event) -> usize {
    event.media_partners.len() + event.news_details.len()
}

/// Link behind the item at `cursor`, if it has one.
pub fn link_at(event: &Event, cursor: usize) -> Option<&str> {
    let partners = event.media_partners.len();
    let link = if cursor < partners {
        event.media_partners[cursor].profile_link.as_deref()
    } else {
        event
            .news_details
            .get(cursor - partners)
            .and_then(|news| news.url.as_deref())
    };
    link.filter(|url| !url.trim().is_empty())
}

pub fn build(doc: &mut Doc, event: &Event, cursor: Option<usize>) {
    if item_count(event) == 0 {
        doc.muted(doc.label(strings::NO_MEDIA));
        return;
    }

    let lang = doc.lang;
    doc.heading(strings::MEDIA_AND_PRESS);

    if !event.media_partners.is_empty() {
        doc.heading(strings::MEDIA_PARTNERS);
        for (i, partner) in event.media_partners.iter().enumerate() {
            let selected = cursor == Some(i);
            doc.item(selected, partner.name.display(lang));
            let kind = partner.kind.display(lang);
            if !kind.trim().is_empty() {
                doc.indented(kind, Style::default().fg(Color::Yellow));
            }
            let description = partner.description.display(lang);
            if !description.trim().is_empty() {
                doc.indented(description, Style::default().fg(LABEL_COLOR));
            }
            if selected && link_at(event, i).is_some() {
                doc.hint("o", strings::VISIT_PROFILE);
            }
        }
    }

    if !event.news_details.is_empty() {
        doc.heading(strings::NEWS_COVERAGE);
        let offset = event.media_partners.len();
        for (i, news) in event.news_details.iter().enumerate() {
            let index = offset + i;
            let selected = cursor == Some(index);
            doc.item(selected, news.headline.display(lang));
            let byline: Vec<&str> = [
                news.source.display(lang),
                news.date.as_deref().unwrap_or_default(),
            ]
            .into_iter()
            .filter(|s| !s.trim().is_empty())
            .collect();
            if !byline.is_empty() {
                doc.indented(&byline.join(" · "), Style::default().fg(Color::Yellow));
            }
            let summary = news.summary.display(lang);
            if !summary.trim().is_empty() {
                doc.indented(summary, Style::default().fg(LABEL_COLOR));
            }
            if selected && link_at(event, index).is_some() {
                doc.hint("o", strings::READ_ARTICLE);
            }
        }
    }
}
