//! Derived figures behind the chart, pie, and timeline views.
//!
//! Everything here is a pure projection of one [`Event`]; the same record
//! always yields the same numbers.

use chrono::NaiveDate;

use crate::i18n::{Label, LocalizedText};
use crate::model::Event;

/// Section sizes for one event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventSummary {
    pub sessions: usize,
    pub topics: usize,
    pub speakers: usize,
    pub participants: usize,
    /// Participants holding a sponsorship role.
    pub sponsors: usize,
    pub organizations: usize,
    pub media_partners: usize,
    pub news: usize,
    pub categories: usize,
    pub target_roles: usize,
}

impl EventSummary {
    pub fn of(event: &Event) -> Self {
        Self {
            sessions: event.featured_sessions.len(),
            topics: event.major_topics.len(),
            speakers: event.speakers.len(),
            participants: event.participants_details.len(),
            sponsors: event
                .participants_details
                .iter()
                .filter(|p| p.is_sponsor())
                .count(),
            organizations: event.represented_organizations.len()
                + event.strategic_partners.len()
                + event.leading_partners.len(),
            media_partners: event.media_partners.len(),
            news: event.news_details.len(),
            categories: event.category_tags.len(),
            target_roles: event.target_roles.len(),
        }
    }

    /// Labelled counts in display order, for bar charts.
    pub fn composition(&self) -> Vec<(Label, usize)> {
        vec![
            (Label::new("Sessions", "الجلسات"), self.sessions),
            (Label::new("Topics", "المواضيع"), self.topics),
            (Label::new("Speakers", "المتحدثون"), self.speakers),
            (Label::new("Participants", "المشاركون"), self.participants),
            (Label::new("Sponsors", "الرعاة"), self.sponsors),
            (Label::new("Partners", "الشركاء"), self.organizations),
            (Label::new("Media", "الإعلام"), self.media_partners),
            (Label::new("News", "الأخبار"), self.news),
        ]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpeakerStats {
    pub total: usize,
    pub virtual_count: usize,
    pub keynotes: usize,
    /// Distinct organizations by English name.
    pub organizations: usize,
}

impl SpeakerStats {
    pub fn of(event: &Event) -> Self {
        let mut orgs: Vec<&str> = event
            .speakers
            .iter()
            .map(|s| s.organization.en.trim())
            .filter(|org| !org.is_empty())
            .collect();
        orgs.sort_unstable();
        orgs.dedup();

        Self {
            total: event.speakers.len(),
            virtual_count: event.speakers.iter().filter(|s| s.is_virtual()).count(),
            keynotes: event.speakers.iter().filter(|s| s.is_keynote()).count(),
            organizations: orgs.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParticipantStats {
    pub total: usize,
    pub sponsors: usize,
    pub industries: usize,
    pub with_products: usize,
}

impl ParticipantStats {
    pub fn of(event: &Event) -> Self {
        let participants = &event.participants_details;
        let mut industries: Vec<&str> = participants
            .iter()
            .map(|p| p.industry.en.trim())
            .filter(|i| !i.is_empty())
            .collect();
        industries.sort_unstable();
        industries.dedup();

        Self {
            total: participants.len(),
            sponsors: participants.iter().filter(|p| p.is_sponsor()).count(),
            industries: industries.len(),
            with_products: participants.iter().filter(|p| !p.products.is_empty()).count(),
        }
    }
}

/// One labelled share of a [`Distribution`].
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: LocalizedText,
    pub count: usize,
}

/// Counts grouped by label, largest first (ties keep first-seen order).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Distribution {
    pub slices: Vec<Slice>,
}

const UNSPECIFIED: (&str, &str) = ("Unspecified", "غير محدد");

impl Distribution {
    /// Groups by English text (Arabic when English is blank). Blank labels
    /// fall into an "Unspecified" slice.
    pub fn from_labels<'a>(labels: impl IntoIterator<Item = &'a LocalizedText>) -> Self {
        let mut slices: Vec<Slice> = Vec::new();
        for label in labels {
            let label = if label.is_blank() {
                LocalizedText::new(UNSPECIFIED.0, UNSPECIFIED.1)
            } else {
                label.clone()
            };
            let key = group_key(&label);
            match slices.iter_mut().find(|s| group_key(&s.label) == key) {
                Some(slice) => slice.count += 1,
                None => slices.push(Slice { label, count: 1 }),
            }
        }
        slices.sort_by(|a, b| b.count.cmp(&a.count));
        Self { slices }
    }

    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Share of `slice` in percent (0 when the distribution is empty).
    pub fn percent(&self, slice: &Slice) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            slice.count as f64 * 100.0 / total as f64
        }
    }
}

fn group_key(label: &LocalizedText) -> String {
    let en = label.en.trim();
    if en.is_empty() {
        label.ar.trim().to_string()
    } else {
        en.to_lowercase()
    }
}

pub fn session_types(event: &Event) -> Distribution {
    Distribution::from_labels(event.speakers.iter().map(|s| &s.session_type))
}

pub fn speaking_modes(event: &Event) -> Distribution {
    let blank = LocalizedText::default();
    Distribution::from_labels(event.speakers.iter().map(|s| {
        s.in_person_details
            .as_ref()
            .map_or(&blank, |details| &details.speaking_mode)
    }))
}

pub fn sponsorship_roles(event: &Event) -> Distribution {
    Distribution::from_labels(event.participants_details.iter().map(|p| &p.sponsorship_role))
}

pub fn industries(event: &Event) -> Distribution {
    Distribution::from_labels(event.participants_details.iter().map(|p| &p.industry))
}

/// How often each major topic is echoed elsewhere in the record (sessions,
/// key topics, speaker expertise), plus one for the topic itself.
pub fn topic_coverage(event: &Event) -> Vec<(LocalizedText, usize)> {
    let haystack: Vec<String> = event
        .featured_sessions
        .iter()
        .map(|s| &s.title)
        .chain(event.key_topics.iter())
        .chain(event.speakers.iter().flat_map(|s| s.expertise.iter()))
        .map(|text| text.en.to_lowercase())
        .collect();

    event
        .major_topics
        .iter()
        .map(|topic| {
            let needle = topic.name.en.trim().to_lowercase();
            let mentions = if needle.is_empty() {
                0
            } else {
                haystack.iter().filter(|h| h.contains(&needle)).count()
            };
            (topic.name.clone(), mentions + 1)
        })
        .collect()
}

/// Kind of a dated point on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MilestoneKind {
    News,
    Arrival,
    Start,
    End,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Milestone {
    pub date: NaiveDate,
    pub kind: MilestoneKind,
    pub label: LocalizedText,
}

/// Dates behind the timeline view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schedule {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    /// Ascending by date.
    pub milestones: Vec<Milestone>,
}

impl Schedule {
    /// Inclusive day count, when both ends parse and are ordered.
    pub fn days(&self) -> Option<i64> {
        let (start, end) = (self.start?, self.end?);
        let days = (end - start).num_days();
        (days >= 0).then_some(days + 1)
    }
}

pub fn schedule(event: &Event) -> Schedule {
    let start = event.start_date.as_deref().and_then(parse_date);
    let end = event
        .end_date
        .as_deref()
        .and_then(parse_date)
        .or(start);

    let mut milestones = Vec::new();
    if let Some(date) = start {
        milestones.push(Milestone {
            date,
            kind: MilestoneKind::Start,
            label: event.event_name.clone(),
        });
    }
    if let Some(date) = end.filter(|end| Some(*end) != start) {
        milestones.push(Milestone {
            date,
            kind: MilestoneKind::End,
            label: event.event_name.clone(),
        });
    }
    for news in &event.news_details {
        if let Some(date) = news.date.as_deref().and_then(parse_date) {
            milestones.push(Milestone {
                date,
                kind: MilestoneKind::News,
                label: news.headline.clone(),
            });
        }
    }
    for speaker in &event.speakers {
        if let Some(date) = speaker
            .in_person_details
            .as_ref()
            .and_then(|d| d.arrival_date.as_deref())
            .and_then(parse_date)
        {
            milestones.push(Milestone {
                date,
                kind: MilestoneKind::Arrival,
                label: speaker.name.clone(),
            });
        }
    }
    milestones.sort_by(|a, b| a.date.cmp(&b.date).then(a.kind.cmp(&b.kind)));

    Schedule {
        start,
        end,
        milestones,
    }
}

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y"];

/// Parses the date formats seen in records and spreadsheets. Timestamps are
/// cut to their date part.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let value = value.split(['T', ' ']).next().unwrap_or(value);
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::model::{InPersonDetails, NewsItem, Participant, Session, Speaker, Topic};

    fn speaker(org: &str, session: &str, mode: Option<&str>) -> Speaker {
        Speaker {
            organization: LocalizedText::same(org),
            session_type: LocalizedText::same(session),
            in_person_details: mode.map(|m| InPersonDetails {
                speaking_mode: LocalizedText::same(m),
                ..InPersonDetails::default()
            }),
            ..Speaker::default()
        }
    }

    #[test]
    fn test_speaker_stats() {
        let event = Event {
            speakers: vec![
                speaker("Acme", "Keynote", Some("Virtual")),
                speaker("Acme", "Panel", Some("In-Person")),
                speaker("Globex", "keynote", None),
            ],
            ..Event::default()
        };
        let stats = SpeakerStats::of(&event);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.virtual_count, 1);
        assert_eq!(stats.keynotes, 2);
        assert_eq!(stats.organizations, 2);
    }

    #[test]
    fn test_summary_counts_sponsoring_participants() {
        let event = Event {
            participants_details: vec![
                Participant {
                    sponsorship_role: LocalizedText::new("Platinum", "بلاتيني"),
                    ..Participant::default()
                },
                Participant::default(),
            ],
            sponsors: vec![
                LocalizedText::same("Listed A"),
                LocalizedText::same("Listed B"),
                LocalizedText::same("Listed C"),
            ],
            ..Event::default()
        };
        let summary = EventSummary::of(&event);
        assert_eq!(summary.participants, 2);
        assert_eq!(summary.sponsors, 1);

        let without_list = Event {
            sponsors: Vec::new(),
            ..event
        };
        assert_eq!(EventSummary::of(&without_list).sponsors, 1);
    }

    #[test]
    fn test_participant_stats() {
        let event = Event {
            participants_details: vec![
                Participant {
                    sponsorship_role: LocalizedText::same("Gold"),
                    industry: LocalizedText::same("Energy"),
                    products: vec![LocalizedText::same("Panels")],
                    ..Participant::default()
                },
                Participant {
                    industry: LocalizedText::same("Energy"),
                    ..Participant::default()
                },
            ],
            ..Event::default()
        };
        let stats = ParticipantStats::of(&event);
        assert_eq!(
            stats,
            ParticipantStats {
                total: 2,
                sponsors: 1,
                industries: 1,
                with_products: 1
            }
        );
    }

    #[test]
    fn test_distribution_groups_and_orders() {
        let event = Event {
            speakers: vec![
                speaker("A", "Panel", None),
                speaker("B", "Keynote", None),
                speaker("C", "panel", None),
                speaker("D", "", None),
            ],
            ..Event::default()
        };
        let dist = session_types(&event);
        assert_eq!(dist.total(), 4);
        assert_eq!(dist.slices[0].label.get(Language::En), "Panel");
        assert_eq!(dist.slices[0].count, 2);
        assert!((dist.percent(&dist.slices[0]) - 50.0).abs() < f64::EPSILON);
        assert!(dist.slices.iter().any(|s| s.label.en == "Unspecified"));
    }

    #[test]
    fn test_empty_distribution_has_zero_percent() {
        let dist = sponsorship_roles(&Event::default());
        assert!(dist.is_empty());
        let slice = Slice {
            label: LocalizedText::default(),
            count: 0,
        };
        assert!(dist.percent(&slice).abs() < f64::EPSILON);
    }

    #[test]
    fn test_topic_coverage_counts_mentions() {
        let event = Event {
            major_topics: vec![
                Topic {
                    name: LocalizedText::same("Robotics"),
                    ..Topic::default()
                },
                Topic {
                    name: LocalizedText::same("Water"),
                    ..Topic::default()
                },
            ],
            featured_sessions: vec![Session {
                title: LocalizedText::same("Robotics on the line"),
                description: LocalizedText::default(),
            }],
            key_topics: vec![LocalizedText::same("Applied robotics")],
            ..Event::default()
        };
        let coverage = topic_coverage(&event);
        assert_eq!(coverage[0].1, 3);
        assert_eq!(coverage[1].1, 1);
    }

    #[test]
    fn test_schedule_days_and_ordering() {
        let event = Event {
            start_date: Some("2025-11-10".into()),
            end_date: Some("2025-11-12".into()),
            news_details: vec![NewsItem {
                headline: LocalizedText::same("Announced"),
                date: Some("2025-08-15".into()),
                ..NewsItem::default()
            }],
            ..Event::default()
        };
        let schedule = schedule(&event);
        assert_eq!(schedule.days(), Some(3));
        let kinds: Vec<MilestoneKind> = schedule.milestones.iter().map(|m| m.kind).collect();
        assert_eq!(
            kinds,
            [MilestoneKind::News, MilestoneKind::Start, MilestoneKind::End]
        );
    }

    #[test]
    fn test_single_day_event() {
        let event = Event {
            start_date: Some("2026-01-15".into()),
            end_date: Some("2026-01-15".into()),
            ..Event::default()
        };
        let schedule = schedule(&event);
        assert_eq!(schedule.days(), Some(1));
        assert_eq!(schedule.milestones.len(), 1);
    }

    #[test]
    fn test_unparseable_dates_yield_no_schedule() {
        let event = Event {
            start_date: Some("TBD".into()),
            ..Event::default()
        };
        let schedule = schedule(&event);
        assert_eq!(schedule.days(), None);
        assert!(schedule.milestones.is_empty());
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2026, 5, 1);
        assert_eq!(parse_date("2026-05-01"), expected);
        assert_eq!(parse_date("01/05/2026"), expected);
        assert_eq!(parse_date("2026-05-01T09:00:00Z"), expected);
        assert_eq!(parse_date("soon"), None);
    }
}
