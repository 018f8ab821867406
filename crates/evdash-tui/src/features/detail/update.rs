//! Detail pane key handling.

use crossterm::event::{KeyCode, KeyEvent};
use evdash_core::i18n::Language;
use evdash_core::model::Event;

use super::{
    DetailState, DetailTab, ProfileTarget, is_expandable, item_count, profile_target,
    selected_link,
};
use crate::effects::UiEffect;
use crate::features::statusline::StatusMessage;
use crate::mutations::StateMutation;
use crate::overlays::OverlayRequest;
use crate::strings;

/// The selected event as seen by the detail key handler.
pub struct DetailContext<'a> {
    /// Dataset index of the selected event.
    pub index: usize,
    pub event: &'a Event,
    pub lang: Language,
}

pub type DetailKeyResult = (Vec<UiEffect>, Vec<StateMutation>, Option<OverlayRequest>);

/// Handles keys while the detail pane has focus.
///
/// Returns `None` when the key is not a detail key.
pub fn handle_detail_key(
    detail: &mut DetailState,
    ctx: &DetailContext<'_>,
    key: KeyEvent,
) -> Option<DetailKeyResult> {
    let count = item_count(ctx.event, detail.tab, detail.view_mode);
    let mut result: DetailKeyResult = (vec![], vec![], None);

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            if !detail.move_cursor(-1, count) {
                detail.scroll_by(-1);
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if !detail.move_cursor(1, count) {
                detail.scroll_by(1);
            }
        }
        KeyCode::PageUp => detail.page(false),
        KeyCode::PageDown => detail.page(true),
        KeyCode::Home | KeyCode::Char('g') => {
            detail.cursor = 0;
            detail.scroll_to_top();
        }
        KeyCode::End | KeyCode::Char('G') => {
            detail.cursor = count.saturating_sub(1);
            detail.scroll_to_bottom();
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if count > 0 && is_expandable(detail.tab, detail.view_mode) {
                detail.toggle_expanded();
            } else if detail.tab == DetailTab::Speakers
                && let Some(target) = profile_target(ctx.event, detail)
            {
                result.2 = Some(profile_request(ctx, target));
            }
        }
        KeyCode::Char('p') => return Some(open_profile(detail, ctx)),
        KeyCode::Char('o') => return Some(open_link(detail, ctx)),
        _ => return None,
    }
    Some(result)
}

/// `p`: profile of the item under the cursor, or a status note.
pub fn open_profile(detail: &DetailState, ctx: &DetailContext<'_>) -> DetailKeyResult {
    match profile_target(ctx.event, detail) {
        Some(target) => (vec![], vec![], Some(profile_request(ctx, target))),
        None => (
            vec![],
            vec![StateMutation::Status(StatusMessage::info(
                strings::NO_PROFILE.get(ctx.lang),
            ))],
            None,
        ),
    }
}

/// `o`: opens the selected link in the browser, or notes there is none.
pub fn open_link(detail: &DetailState, ctx: &DetailContext<'_>) -> DetailKeyResult {
    match selected_link(ctx.event, detail) {
        Some(url) => {
            tracing::debug!(url, "opening link");
            (
                vec![UiEffect::OpenBrowser {
                    url: url.to_string(),
                }],
                vec![],
                None,
            )
        }
        None => (
            vec![],
            vec![StateMutation::Status(StatusMessage::info(
                strings::NO_LINK.get(ctx.lang),
            ))],
            None,
        ),
    }
}

fn profile_request(ctx: &DetailContext<'_>, target: ProfileTarget) -> OverlayRequest {
    OverlayRequest::Profile {
        event: ctx.index,
        target,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use evdash_core::config::ViewMode;
    use evdash_core::i18n::LocalizedText;
    use evdash_core::model::{Participant, Speaker, SpeakerProfile};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn event() -> Event {
        Event {
            participants_details: vec![
                Participant {
                    name: LocalizedText::same("Acme"),
                    ..Participant::default()
                },
                Participant {
                    name: LocalizedText::same("Globex"),
                    ..Participant::default()
                },
            ],
            speakers: vec![Speaker {
                name: LocalizedText::same("Sara"),
                enriched_profile: Some(SpeakerProfile::default()),
                ..Speaker::default()
            }],
            ..Event::default()
        }
    }

    fn ctx(event: &Event) -> DetailContext<'_> {
        DetailContext {
            index: 3,
            event,
            lang: Language::En,
        }
    }

    #[test]
    fn test_cursor_moves_and_expands_participants() {
        let event = event();
        let mut detail = DetailState::new(ViewMode::Standard);
        detail.set_tab(DetailTab::Participants);

        handle_detail_key(&mut detail, &ctx(&event), key(KeyCode::Down));
        handle_detail_key(&mut detail, &ctx(&event), key(KeyCode::Down));
        assert_eq!(detail.cursor, 1);

        handle_detail_key(&mut detail, &ctx(&event), key(KeyCode::Enter));
        assert!(detail.is_expanded(1));
        handle_detail_key(&mut detail, &ctx(&event), key(KeyCode::Enter));
        assert!(!detail.is_expanded(1));
    }

    #[test]
    fn test_enter_on_speaker_opens_profile() {
        let event = event();
        let mut detail = DetailState::new(ViewMode::Standard);
        detail.set_tab(DetailTab::Speakers);

        let (_, _, request) =
            handle_detail_key(&mut detail, &ctx(&event), key(KeyCode::Enter)).unwrap();
        assert!(matches!(
            request,
            Some(OverlayRequest::Profile {
                event: 3,
                target: ProfileTarget::Speaker(0)
            })
        ));
    }

    #[test]
    fn test_missing_profile_and_link_report_status() {
        let event = event();
        let mut detail = DetailState::new(ViewMode::Standard);
        detail.set_tab(DetailTab::Participants);

        let (effects, mutations, request) =
            handle_detail_key(&mut detail, &ctx(&event), key(KeyCode::Char('p'))).unwrap();
        assert!(effects.is_empty() && request.is_none());
        assert!(matches!(
            mutations.as_slice(),
            [StateMutation::Status(message)] if message.text == "No enriched profile"
        ));

        let (effects, mutations, _) =
            handle_detail_key(&mut detail, &ctx(&event), key(KeyCode::Char('o'))).unwrap();
        assert!(effects.is_empty());
        assert_eq!(mutations.len(), 1);
    }

    #[test]
    fn test_link_falls_back_to_website() {
        let mut event = event();
        event.official_website = Some("https://expo.example".to_string());
        let detail = DetailState::new(ViewMode::Standard);
        let (effects, _, _) = open_link(&detail, &ctx(&event));
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::OpenBrowser { url }] if url == "https://expo.example"
        ));
    }

    #[test]
    fn test_unknown_key_is_not_consumed() {
        let event = event();
        let mut detail = DetailState::new(ViewMode::Standard);
        assert!(handle_detail_key(&mut detail, &ctx(&event), key(KeyCode::Char('z'))).is_none());
    }
}
