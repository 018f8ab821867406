//! Detail pane for the selected event.
//!
//! Each tab is laid out into a [`DetailContent`] by its builder module. The
//! same layout feeds the frame handler (scroll and cursor reconciliation)
//! and the renderer, so item anchors always match what is on screen.

mod agenda;
pub mod doc;
pub mod hero;
mod media;
mod meta;
mod organizations;
mod overview;
mod participants;
mod render;
mod speakers;
mod state;
pub mod update;

use evdash_core::config::ViewMode;
use evdash_core::i18n::Language;
use evdash_core::model::Event;

pub use doc::DetailContent;
pub use meta::{MetaLink, links as meta_links};
pub use render::{detail_body_area, render_detail};
pub use state::{DetailState, DetailTab};

use doc::Doc;

/// Lays out the active tab of `event`.
///
/// `cursor` is the highlighted item, or `None` when the pane is unfocused.
pub fn build_content(
    event: &Event,
    detail: &DetailState,
    lang: Language,
    width: usize,
    cursor: Option<usize>,
) -> DetailContent {
    let mut doc = Doc::new(width, lang);
    let expanded = |i: usize| detail.is_expanded(i);
    match detail.tab {
        DetailTab::Overview => overview::build(&mut doc, event, detail.view_mode, cursor, &expanded),
        DetailTab::Agenda => agenda::build(&mut doc, event),
        DetailTab::Participants => participants::build(&mut doc, event, cursor, &expanded),
        DetailTab::Speakers => speakers::build(&mut doc, event, cursor),
        DetailTab::Organizations => organizations::build(&mut doc, event),
        DetailTab::Media => media::build(&mut doc, event, cursor),
        DetailTab::Meta => meta::build(&mut doc, event, cursor),
    }
    doc.finish()
}

/// Number of selectable items on `tab`. Matches the anchors of
/// [`build_content`].
pub fn item_count(event: &Event, tab: DetailTab, mode: ViewMode) -> usize {
    match tab {
        DetailTab::Overview => overview::item_count(event, mode),
        DetailTab::Participants => event.participants_details.len(),
        DetailTab::Speakers => event.speakers.len(),
        DetailTab::Media => media::item_count(event),
        DetailTab::Meta => meta::links(event, Language::En).len(),
        DetailTab::Agenda | DetailTab::Organizations => 0,
    }
}

/// True when Enter expands or collapses the item under the cursor.
pub fn is_expandable(tab: DetailTab, mode: ViewMode) -> bool {
    match tab {
        DetailTab::Overview => mode == ViewMode::Standard,
        DetailTab::Participants => true,
        _ => false,
    }
}

/// Link to open for the current selection.
///
/// Media and meta items open their own link; everywhere else the event's
/// official website is used.
pub fn selected_link<'a>(event: &'a Event, detail: &DetailState) -> Option<&'a str> {
    let own = match detail.tab {
        DetailTab::Media => media::link_at(event, detail.cursor),
        DetailTab::Meta => meta::links(event, Language::En)
            .get(detail.cursor)
            .map(|link| link.url),
        _ => None,
    };
    own.or_else(|| {
        event
            .official_website
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    })
}

/// Profile reachable from the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileTarget {
    Speaker(usize),
    Company(usize),
}

pub fn profile_target(event: &Event, detail: &DetailState) -> Option<ProfileTarget> {
    let i = detail.cursor;
    match detail.tab {
        DetailTab::Speakers => event
            .speakers
            .get(i)
            .filter(|s| s.enriched_profile.is_some())
            .map(|_| ProfileTarget::Speaker(i)),
        DetailTab::Participants => event
            .participants_details
            .get(i)
            .filter(|p| event.company_profile(p).is_some())
            .map(|_| ProfileTarget::Company(i)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use evdash_core::i18n::LocalizedText;
    use evdash_core::model::{MediaPartner, Participant, Speaker, Topic};

    use super::*;

    fn rich_event() -> Event {
        Event {
            major_topics: vec![Topic::default(), Topic::default()],
            participants_details: vec![Participant::default(); 3],
            speakers: vec![Speaker::default(); 2],
            media_partners: vec![MediaPartner {
                profile_link: Some("https://media.example".to_string()),
                ..MediaPartner::default()
            }],
            official_website: Some("https://site.example".to_string()),
            source_url: Some("https://source.example".to_string()),
            event_name: LocalizedText::same("Expo"),
            ..Event::default()
        }
    }

    #[test]
    fn test_item_count_matches_anchors() {
        let event = rich_event();
        for &tab in DetailTab::all() {
            for &mode in ViewMode::all() {
                let mut detail = DetailState::new(mode);
                detail.set_tab(tab);
                for lang in [Language::En, Language::Ar] {
                    let content = build_content(&event, &detail, lang, 50, Some(0));
                    assert_eq!(
                        content.anchors.len(),
                        item_count(&event, tab, mode),
                        "{tab:?} {mode:?} {lang:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_selected_link_prefers_item_link() {
        let event = rich_event();
        let mut detail = DetailState::new(ViewMode::Standard);
        assert_eq!(selected_link(&event, &detail), Some("https://site.example"));

        detail.set_tab(DetailTab::Media);
        assert_eq!(selected_link(&event, &detail), Some("https://media.example"));

        detail.set_tab(DetailTab::Meta);
        assert_eq!(selected_link(&event, &detail), Some("https://source.example"));
    }

    #[test]
    fn test_profile_target_requires_enriched_profile() {
        let mut event = rich_event();
        let mut detail = DetailState::new(ViewMode::Standard);
        detail.set_tab(DetailTab::Speakers);
        assert_eq!(profile_target(&event, &detail), None);

        event.speakers[0].enriched_profile = Some(Default::default());
        assert_eq!(
            profile_target(&event, &detail),
            Some(ProfileTarget::Speaker(0))
        );
    }
}
