//! Enriched speaker and company profile modal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use evdash_core::i18n::{Label, Language, LocalizedText};
use evdash_core::model::{CompanyProfile, Event, Headline, Participant, PersonRole, Speaker};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use super::OverlayUpdate;
use super::render_utils::{InputHint, OverlayConfig, overlay_layout, render_overlay};
use crate::effects::UiEffect;
use crate::features::detail::ProfileTarget;
use crate::features::detail::doc::{ACCENT_COLOR, DetailContent, Doc, LABEL_COLOR};
use crate::state::TuiState;
use crate::strings;

const MAX_WIDTH: u16 = 90;

#[derive(Debug, Clone)]
pub struct ProfileState {
    /// Dataset index of the event the profile belongs to.
    pub event: usize,
    pub target: ProfileTarget,
    pub scroll: usize,
}

impl ProfileState {
    pub fn open(event: usize, target: ProfileTarget) -> (Self, Vec<UiEffect>) {
        (
            Self {
                event,
                target,
                scroll: 0,
            },
            vec![],
        )
    }

    fn config<'a>(area: Rect, title: &'a str, hints: &'a [InputHint<'a>]) -> OverlayConfig<'a> {
        OverlayConfig {
            title,
            border_color: Color::Magenta,
            width: (area.width * 4 / 5).min(MAX_WIDTH),
            height: area.height.saturating_sub(4),
            hints,
        }
    }

    const HINTS: [InputHint<'static>; 3] = [
        InputHint {
            key: "↑↓",
            action: "scroll",
        },
        InputHint {
            key: "o",
            action: "source",
        },
        InputHint {
            key: "Esc",
            action: "close",
        },
    ];

    /// Title and laid-out body for the current target.
    fn content(&self, tui: &TuiState, width: usize) -> Option<(String, DetailContent)> {
        let event = tui.dataset.get(self.event)?;
        let lang = tui.language;
        let mut doc = Doc::new(width, lang);
        let title = match self.target {
            ProfileTarget::Speaker(i) => {
                let speaker = event.speakers.get(i)?;
                speaker_profile(&mut doc, speaker);
                speaker.name.display(lang).to_string()
            }
            ProfileTarget::Company(i) => {
                let participant = event.participants_details.get(i)?;
                let profile = event.company_profile(participant)?;
                company_profile(&mut doc, participant, profile);
                participant.name.display(lang).to_string()
            }
        };
        Some((title, doc.finish()))
    }

    fn sources<'a>(&self, event: &'a Event) -> &'a [String] {
        match self.target {
            ProfileTarget::Speaker(i) => event
                .speakers
                .get(i)
                .and_then(|s| s.enriched_profile.as_ref())
                .map_or(&[], |p| p.sources.as_slice()),
            ProfileTarget::Company(i) => event
                .participants_details
                .get(i)
                .and_then(|p| event.company_profile(p))
                .map_or(&[], |p| p.source_urls.as_slice()),
        }
    }

    /// Body viewport as laid out for the current screen.
    fn viewport(&self, tui: &TuiState) -> Rect {
        let config = Self::config(tui.layout.screen, "", &Self::HINTS);
        overlay_layout(tui.layout.screen, &config).body
    }

    fn max_scroll(&self, tui: &TuiState) -> usize {
        let body = self.viewport(tui);
        self.content(tui, body.width as usize)
            .map_or(0, |(_, content)| {
                content.lines.len().saturating_sub(body.height as usize)
            })
    }

    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let page = self.viewport(tui).height.saturating_sub(1).max(1) as usize;

        match key.code {
            KeyCode::Esc | KeyCode::Char('c') if key.code == KeyCode::Esc || ctrl => {
                OverlayUpdate::close()
            }
            KeyCode::Char('q' | 'p') => OverlayUpdate::close(),
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                OverlayUpdate::stay()
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = (self.scroll + 1).min(self.max_scroll(tui));
                OverlayUpdate::stay()
            }
            KeyCode::PageUp => {
                self.scroll = self.scroll.saturating_sub(page);
                OverlayUpdate::stay()
            }
            KeyCode::PageDown | KeyCode::Char(' ') => {
                self.scroll = (self.scroll + page).min(self.max_scroll(tui));
                OverlayUpdate::stay()
            }
            KeyCode::Home => {
                self.scroll = 0;
                OverlayUpdate::stay()
            }
            KeyCode::End => {
                self.scroll = self.max_scroll(tui);
                OverlayUpdate::stay()
            }
            KeyCode::Char('o') => {
                let url = tui
                    .dataset
                    .get(self.event)
                    .and_then(|event| self.sources(event).first());
                match url {
                    Some(url) => OverlayUpdate::stay()
                        .with_ui_effects(vec![UiEffect::OpenBrowser { url: url.clone() }]),
                    None => OverlayUpdate::stay(),
                }
            }
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) {
        let body = overlay_layout(area, &Self::config(area, "", &Self::HINTS)).body;
        let Some((title, content)) = self.content(tui, body.width as usize) else {
            return;
        };
        let layout = render_overlay(frame, area, &Self::config(area, &title, &Self::HINTS));

        let alignment = if tui.language == Language::Ar {
            Alignment::Right
        } else {
            Alignment::Left
        };
        let offset = self
            .scroll
            .min(content.lines.len().saturating_sub(layout.body.height as usize));
        let visible: Vec<Line<'static>> = content
            .lines
            .into_iter()
            .skip(offset)
            .take(layout.body.height as usize)
            .collect();
        frame.render_widget(Paragraph::new(visible).alignment(alignment), layout.body);
    }
}

// ============================================================================
// Profile bodies
// ============================================================================

fn speaker_profile(doc: &mut Doc, speaker: &Speaker) {
    let lang = doc.lang;
    let affiliation: Vec<&str> = [
        speaker.role_title_at_organization.display(lang),
        speaker.organization.display(lang),
    ]
    .into_iter()
    .filter(|s| !s.trim().is_empty())
    .collect();
    if !affiliation.is_empty() {
        doc.styled(&affiliation.join(" · "), Style::default().fg(Color::Yellow));
    }

    let Some(profile) = &speaker.enriched_profile else {
        doc.muted(doc.label(strings::NO_PROFILE));
        return;
    };

    text_section(doc, strings::BIOGRAPHY, profile.bio.display(lang));
    text_section(doc, strings::BACKGROUND, speaker.background_long.display(lang));
    text_section(doc, strings::EDUCATION, profile.education.display(lang));

    let career = &profile.career_history;
    if !career.is_empty() {
        doc.heading(strings::CAREER_HISTORY);
        for (label, roles) in [
            (strings::CURRENT_ROLES, &career.current_roles),
            (strings::PAST_ROLES, &career.past_roles),
            (strings::BOARD_MEMBERSHIPS, &career.board_memberships),
        ] {
            if roles.is_empty() {
                continue;
            }
            doc.styled(
                doc.label(label),
                Style::default().fg(ACCENT_COLOR).add_modifier(Modifier::BOLD),
            );
            doc.bullets(roles.iter().map(|r| r.display(lang)));
        }
    }

    if !profile.notable_achievements.is_empty() {
        doc.heading(strings::NOTABLE_ACHIEVEMENTS);
        doc.bullets(profile.notable_achievements.iter().map(|a| a.display(lang)));
    }
    people_section(doc, strings::SENIOR_TEAM, &profile.team_senior);
    news_section(doc, strings::RECENT_NEWS, &profile.recent_news);
    sources_section(doc, &profile.sources);
}

fn company_profile(doc: &mut Doc, participant: &Participant, profile: &CompanyProfile) {
    let lang = doc.lang;
    let mantra = profile.mantra.display(lang);
    if !mantra.trim().is_empty() {
        doc.styled(
            &format!("“{mantra}”"),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
        );
    }

    doc.blank();
    let or_participant = |own: &LocalizedText, fallback: &LocalizedText| -> String {
        if own.is_blank() {
            fallback.display(lang).to_string()
        } else {
            own.display(lang).to_string()
        }
    };
    doc.field(
        strings::HEADQUARTERS,
        &or_participant(&profile.headquarters, &participant.headquarters),
    );
    doc.field(
        strings::FOUNDED,
        &or_participant(&profile.founded, &participant.founded),
    );
    doc.field(
        strings::INDUSTRY,
        &or_participant(&profile.industry, &participant.industry),
    );
    doc.field(strings::CEO, &or_participant(&profile.ceo, &participant.ceo));

    text_section(doc, strings::COMPANY_PROFILE, profile.profile_brief.display(lang));
    text_section(doc, strings::COMPANY_POLICY, profile.policy_short.display(lang));

    if let Some(stock) = &profile.stock {
        doc.heading(strings::STOCK_INFORMATION);
        doc.field(strings::TICKER, stock.ticker.as_deref().unwrap_or_default());
        let traded = if stock.publicly_traded {
            strings::YES
        } else {
            strings::NO
        };
        doc.field(strings::PUBLICLY_TRADED, doc.label(traded));
        let note = stock.note.display(lang);
        if !note.trim().is_empty() {
            doc.muted(note);
        }
    }

    people_section(doc, strings::LEADERSHIP_TEAM, &profile.leadership_profiles);
    if !profile.partners.is_empty() {
        doc.heading(strings::KEY_PARTNERS);
        doc.chips(profile.partners.iter().map(|p| p.display(lang)), Color::Green);
    }
    if !profile.investors_major.is_empty() {
        doc.heading(strings::MAJOR_INVESTORS);
        doc.chips(
            profile.investors_major.iter().map(|p| p.display(lang)),
            Color::Blue,
        );
    }
    news_section(doc, strings::LATEST_NEWS, &profile.latest_news_summary);
    sources_section(doc, &profile.source_urls);
}

fn text_section(doc: &mut Doc, label: Label, text: &str) {
    if text.trim().is_empty() {
        return;
    }
    doc.heading(label);
    doc.paragraph(text);
}

fn people_section(doc: &mut Doc, label: Label, people: &[PersonRole]) {
    if people.is_empty() {
        return;
    }
    let lang = doc.lang;
    doc.heading(label);
    for person in people {
        let role = person.role.display(lang);
        let line = if role.trim().is_empty() {
            person.name.display(lang).to_string()
        } else {
            format!("{} · {role}", person.name.display(lang))
        };
        doc.bullet(&line, Style::default());
    }
}

fn news_section(doc: &mut Doc, label: Label, news: &[Headline]) {
    if news.is_empty() {
        return;
    }
    let lang = doc.lang;
    doc.heading(label);
    for item in news {
        let line = match item.date.as_deref().filter(|d| !d.trim().is_empty()) {
            Some(date) => format!("{date}  {}", item.headline.display(lang)),
            None => item.headline.display(lang).to_string(),
        };
        doc.bullet(&line, Style::default());
    }
}

fn sources_section(doc: &mut Doc, sources: &[String]) {
    if sources.is_empty() {
        return;
    }
    doc.heading(strings::SOURCES);
    for url in sources {
        doc.bullet(url, Style::default().fg(LABEL_COLOR));
    }
}
