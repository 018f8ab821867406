//! The event record and its nested collections.
//!
//! Records carry no declared schema: every field is optional, and absent,
//! `null` or malformed values deserialize as empty. Views render a section
//! only when the data behind it is present.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::i18n::{Language, LocalizedText};
use crate::lenient;

/// One conference or exhibition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    pub event_name: LocalizedText,
    pub event_type: LocalizedText,
    pub organizer: LocalizedText,
    pub city: LocalizedText,
    pub country: LocalizedText,
    pub venue: LocalizedText,
    pub region: LocalizedText,
    pub region_tag: LocalizedText,
    pub mode: LocalizedText,
    pub frequency: LocalizedText,
    pub duration: LocalizedText,
    #[serde(deserialize_with = "lenient::value")]
    pub start_date: Option<String>,
    #[serde(deserialize_with = "lenient::value")]
    pub end_date: Option<String>,

    pub description: LocalizedText,
    pub agenda_summary: LocalizedText,
    pub government_endorsements: LocalizedText,
    pub target_industry: LocalizedText,

    #[serde(deserialize_with = "lenient::list")]
    pub main_sectors: Vec<LocalizedText>,
    #[serde(deserialize_with = "lenient::list")]
    pub key_topics: Vec<LocalizedText>,
    #[serde(deserialize_with = "lenient::list")]
    pub target_roles: Vec<LocalizedText>,
    #[serde(deserialize_with = "lenient::list")]
    pub category_tags: Vec<LocalizedText>,
    #[serde(deserialize_with = "lenient::list")]
    pub tags_or_keywords: Vec<LocalizedText>,
    #[serde(deserialize_with = "lenient::list")]
    pub featured_sessions: Vec<Session>,
    #[serde(deserialize_with = "lenient::list")]
    pub major_topics: Vec<Topic>,

    #[serde(deserialize_with = "lenient::list")]
    pub speakers: Vec<Speaker>,
    #[serde(deserialize_with = "lenient::list")]
    pub participants_details: Vec<Participant>,
    /// Enriched company profiles keyed by the participant's English name.
    #[serde(deserialize_with = "lenient::map")]
    pub company_profiles_enriched: BTreeMap<String, CompanyProfile>,

    #[serde(deserialize_with = "lenient::list")]
    pub represented_organizations: Vec<LocalizedText>,
    #[serde(deserialize_with = "lenient::list")]
    pub sponsors: Vec<LocalizedText>,
    #[serde(deserialize_with = "lenient::list")]
    pub strategic_partners: Vec<LocalizedText>,
    #[serde(deserialize_with = "lenient::list")]
    pub leading_partners: Vec<LocalizedText>,

    #[serde(deserialize_with = "lenient::list")]
    pub media_partners: Vec<MediaPartner>,
    #[serde(deserialize_with = "lenient::list")]
    pub news_details: Vec<NewsItem>,

    pub source_credibility: LocalizedText,
    pub expected_attendees: LocalizedText,
    pub expected_attendance: LocalizedText,
    pub registration_type: LocalizedText,
    #[serde(deserialize_with = "lenient::number")]
    pub impact_score: Option<f64>,
    #[serde(deserialize_with = "lenient::value")]
    pub last_updated: Option<String>,
    #[serde(deserialize_with = "lenient::value")]
    pub contact_email: Option<String>,
    #[serde(deserialize_with = "lenient::value")]
    pub registration_url: Option<String>,
    #[serde(deserialize_with = "lenient::value")]
    pub source_url: Option<String>,
    #[serde(deserialize_with = "lenient::value")]
    pub official_website: Option<String>,
    #[serde(deserialize_with = "lenient::value")]
    pub brochure_link: Option<String>,
    #[serde(deserialize_with = "lenient::value")]
    pub event_poster_url: Option<String>,
    #[serde(deserialize_with = "lenient::map")]
    pub social_links: BTreeMap<String, String>,
}

impl Event {
    /// Name in `lang`, falling back to the other language.
    pub fn name(&self, lang: Language) -> &str {
        self.event_name.display(lang)
    }

    /// "start - end" as shown in the event list. Empty when neither is set.
    pub fn date_range(&self) -> String {
        match (self.start_date.as_deref(), self.end_date.as_deref()) {
            (Some(start), Some(end)) if start != end => format!("{start} - {end}"),
            (Some(date), _) | (None, Some(date)) => date.to_string(),
            (None, None) => String::new(),
        }
    }

    /// "city, country" with blank parts dropped.
    pub fn location(&self, lang: Language) -> String {
        [self.city.display(lang), self.country.display(lang)]
            .into_iter()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The enriched profile for a participant, if one was collected.
    pub fn company_profile(&self, participant: &Participant) -> Option<&CompanyProfile> {
        self.company_profiles_enriched.get(&participant.name.en)
    }

    /// True when none of the organization lists carry entries.
    pub fn has_organizations(&self) -> bool {
        !(self.represented_organizations.is_empty()
            && self.sponsors.is_empty()
            && self.strategic_partners.is_empty()
            && self.leading_partners.is_empty())
    }
}

/// A featured session. A bare string is read as a title.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSession")]
pub struct Session {
    pub title: LocalizedText,
    pub description: LocalizedText,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSession {
    // `title` is required so that a bare bilingual pair falls through to `Title`.
    Detailed {
        title: LocalizedText,
        #[serde(default)]
        description: LocalizedText,
    },
    Title(LocalizedText),
}

impl From<RawSession> for Session {
    fn from(raw: RawSession) -> Self {
        match raw {
            RawSession::Detailed { title, description } => Self { title, description },
            RawSession::Title(title) => Self {
                title,
                description: LocalizedText::default(),
            },
        }
    }
}

/// A major topic: its name sits at the top level next to optional detail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawTopic")]
pub struct Topic {
    #[serde(flatten)]
    pub name: LocalizedText,
    pub description: LocalizedText,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTopic {
    Plain(String),
    Detailed {
        #[serde(default, deserialize_with = "lenient::value")]
        en: String,
        #[serde(default, deserialize_with = "lenient::value")]
        ar: String,
        #[serde(default)]
        description: LocalizedText,
        #[serde(default, deserialize_with = "lenient::value")]
        media: Option<String>,
    },
}

impl From<RawTopic> for Topic {
    fn from(raw: RawTopic) -> Self {
        match raw {
            RawTopic::Plain(name) => Self {
                name: LocalizedText::same(name),
                ..Self::default()
            },
            RawTopic::Detailed {
                en,
                ar,
                description,
                media,
            } => Self {
                name: LocalizedText { en, ar },
                description,
                media,
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Speaker {
    pub name: LocalizedText,
    pub role_title_at_organization: LocalizedText,
    pub organization: LocalizedText,
    pub session_type: LocalizedText,
    pub assigned_session_title: LocalizedText,
    pub background_short: LocalizedText,
    pub background_long: LocalizedText,
    #[serde(deserialize_with = "lenient::value")]
    pub planned_session_length_minutes: Option<u32>,
    #[serde(deserialize_with = "lenient::value")]
    pub in_person_details: Option<InPersonDetails>,
    #[serde(deserialize_with = "lenient::list")]
    pub expertise: Vec<LocalizedText>,
    #[serde(deserialize_with = "lenient::value")]
    pub mock_generated: bool,
    #[serde(deserialize_with = "lenient::value")]
    pub enriched_profile: Option<SpeakerProfile>,
}

impl Speaker {
    pub fn is_virtual(&self) -> bool {
        self.in_person_details
            .as_ref()
            .is_some_and(|details| details.speaking_mode.en.eq_ignore_ascii_case("virtual"))
    }

    pub fn is_keynote(&self) -> bool {
        self.session_type.en.eq_ignore_ascii_case("keynote")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InPersonDetails {
    pub speaking_mode: LocalizedText,
    pub arrival_city: LocalizedText,
    #[serde(deserialize_with = "lenient::value")]
    pub arrival_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeakerProfile {
    pub bio: LocalizedText,
    pub education: LocalizedText,
    #[serde(deserialize_with = "lenient::value")]
    pub career_history: CareerHistory,
    #[serde(deserialize_with = "lenient::list")]
    pub notable_achievements: Vec<LocalizedText>,
    #[serde(deserialize_with = "lenient::list")]
    pub team_senior: Vec<PersonRole>,
    #[serde(deserialize_with = "lenient::list")]
    pub recent_news: Vec<Headline>,
    #[serde(deserialize_with = "lenient::list")]
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerHistory {
    #[serde(deserialize_with = "lenient::list")]
    pub current_roles: Vec<LocalizedText>,
    #[serde(deserialize_with = "lenient::list")]
    pub past_roles: Vec<LocalizedText>,
    #[serde(deserialize_with = "lenient::list")]
    pub board_memberships: Vec<LocalizedText>,
}

impl CareerHistory {
    pub fn is_empty(&self) -> bool {
        self.current_roles.is_empty() && self.past_roles.is_empty() && self.board_memberships.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonRole {
    pub name: LocalizedText,
    pub role: LocalizedText,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Headline {
    #[serde(deserialize_with = "lenient::value")]
    pub date: Option<String>,
    pub headline: LocalizedText,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Participant {
    pub name: LocalizedText,
    pub sponsorship_role: LocalizedText,
    pub industry: LocalizedText,
    pub headquarters: LocalizedText,
    pub founded: LocalizedText,
    #[serde(rename = "CEO")]
    pub ceo: LocalizedText,
    pub profile_brief: LocalizedText,
    pub why_attend: LocalizedText,
    pub what_they_contributed: LocalizedText,
    #[serde(deserialize_with = "lenient::list")]
    pub products: Vec<LocalizedText>,
    #[serde(deserialize_with = "lenient::list")]
    pub source_urls: Vec<String>,
}

impl Participant {
    pub fn is_sponsor(&self) -> bool {
        !self.sponsorship_role.is_blank()
    }
}

/// Enriched company profile attached to a participant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyProfile {
    pub mantra: LocalizedText,
    pub headquarters: LocalizedText,
    pub founded: LocalizedText,
    pub industry: LocalizedText,
    #[serde(rename = "CEO")]
    pub ceo: LocalizedText,
    pub policy_short: LocalizedText,
    pub profile_brief: LocalizedText,
    #[serde(deserialize_with = "lenient::value")]
    pub stock: Option<StockInfo>,
    #[serde(deserialize_with = "lenient::list")]
    pub leadership_profiles: Vec<PersonRole>,
    #[serde(deserialize_with = "lenient::list")]
    pub partners: Vec<LocalizedText>,
    #[serde(deserialize_with = "lenient::list")]
    pub investors_major: Vec<LocalizedText>,
    #[serde(deserialize_with = "lenient::list")]
    pub latest_news_summary: Vec<Headline>,
    #[serde(deserialize_with = "lenient::list")]
    pub source_urls: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockInfo {
    #[serde(deserialize_with = "lenient::value")]
    pub ticker: Option<String>,
    #[serde(deserialize_with = "lenient::value")]
    pub publicly_traded: bool,
    pub note: LocalizedText,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaPartner {
    pub name: LocalizedText,
    pub description: LocalizedText,
    #[serde(rename = "type")]
    pub kind: LocalizedText,
    #[serde(deserialize_with = "lenient::value")]
    pub profile_link: Option<String>,
    #[serde(deserialize_with = "lenient::value")]
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsItem {
    pub headline: LocalizedText,
    pub summary: LocalizedText,
    pub source: LocalizedText,
    #[serde(deserialize_with = "lenient::value")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient::value")]
    pub url: Option<String>,
}
