//! Region / type filtering for the event list.
//!
//! Filter values are localized strings, so a selection made in one language
//! is translated when the display language changes.

use crate::i18n::{Language, LocalizedText};
use crate::model::Event;

/// The attribute a filter choice applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Region,
    EventType,
}

impl FilterField {
    pub fn all() -> &'static [FilterField] {
        &[FilterField::Region, FilterField::EventType]
    }

    fn value(self, event: &Event) -> &LocalizedText {
        match self {
            FilterField::Region => &event.region,
            FilterField::EventType => &event.event_type,
        }
    }
}

/// Either "all" or one specific localized value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FilterChoice {
    #[default]
    All,
    Value(String),
}

impl FilterChoice {
    pub fn is_all(&self) -> bool {
        matches!(self, FilterChoice::All)
    }

    pub fn as_value(&self) -> Option<&str> {
        match self {
            FilterChoice::All => None,
            FilterChoice::Value(v) => Some(v),
        }
    }

    /// Builds a choice from optional user input; blank or "all" means All.
    pub fn from_input(input: Option<&str>) -> Self {
        match input.map(str::trim) {
            None | Some("") => FilterChoice::All,
            Some(v) if v.eq_ignore_ascii_case("all") => FilterChoice::All,
            Some(v) => FilterChoice::Value(v.to_string()),
        }
    }

    fn matches(&self, value: &str) -> bool {
        match self {
            FilterChoice::All => true,
            FilterChoice::Value(selected) => selected == value,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub region: FilterChoice,
    pub event_type: FilterChoice,
}

impl EventFilter {
    pub fn choice(&self, field: FilterField) -> &FilterChoice {
        match field {
            FilterField::Region => &self.region,
            FilterField::EventType => &self.event_type,
        }
    }

    pub fn set(&mut self, field: FilterField, choice: FilterChoice) {
        match field {
            FilterField::Region => self.region = choice,
            FilterField::EventType => self.event_type = choice,
        }
    }

    pub fn is_active(&self) -> bool {
        !(self.region.is_all() && self.event_type.is_all())
    }

    /// Indices of the events that pass every non-"all" choice.
    pub fn apply(&self, events: &[Event], lang: Language) -> Vec<usize> {
        events
            .iter()
            .enumerate()
            .filter(|(_, event)| self.matches(event, lang))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn matches(&self, event: &Event, lang: Language) -> bool {
        FilterField::all()
            .iter()
            .all(|&field| self.choice(field).matches(field.value(event).get(lang).trim()))
    }

    /// Re-expresses the selected values in `to`.
    ///
    /// A value with no counterpart in the dataset resets to "all" rather than
    /// silently matching nothing.
    pub fn translate(&mut self, events: &[Event], from: Language, to: Language) {
        if from == to {
            return;
        }
        for &field in FilterField::all() {
            let translated = match self.choice(field) {
                FilterChoice::All => continue,
                FilterChoice::Value(selected) => events
                    .iter()
                    .map(|event| field.value(event))
                    .find(|text| text.get(from).trim() == selected && !text.get(to).trim().is_empty())
                    .map_or(FilterChoice::All, |text| {
                        FilterChoice::Value(text.get(to).trim().to_string())
                    }),
            };
            self.set(field, translated);
        }
    }
}

/// Distinct non-empty values of `field` in first-appearance order.
pub fn options(events: &[Event], field: FilterField, lang: Language) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for event in events {
        let value = field.value(event).get(lang).trim();
        if !value.is_empty() && !seen.iter().any(|v| v == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(region: (&str, &str), kind: (&str, &str)) -> Event {
        Event {
            region: LocalizedText::new(region.0, region.1),
            event_type: LocalizedText::new(kind.0, kind.1),
            ..Event::default()
        }
    }

    fn sample() -> Vec<Event> {
        vec![
            event(("Middle East", "الشرق الأوسط"), ("Conference", "مؤتمر")),
            event(("Europe", "أوروبا"), ("Conference", "مؤتمر")),
            event(("Middle East", "الشرق الأوسط"), ("Exhibition", "معرض")),
            Event::default(),
        ]
    }

    #[test]
    fn test_all_all_returns_every_index() {
        let events = sample();
        let filter = EventFilter::default();
        assert_eq!(filter.apply(&events, Language::En), vec![0, 1, 2, 3]);
        assert!(!filter.is_active());
    }

    /// Filtering narrows to exactly the events whose localized field matches.
    #[test]
    fn test_region_and_type_narrow_list() {
        let events = sample();
        let mut filter = EventFilter::default();
        filter.set(FilterField::Region, FilterChoice::Value("Middle East".into()));
        assert_eq!(filter.apply(&events, Language::En), vec![0, 2]);

        filter.set(FilterField::EventType, FilterChoice::Value("Exhibition".into()));
        assert_eq!(filter.apply(&events, Language::En), vec![2]);

        filter.set(FilterField::Region, FilterChoice::All);
        filter.set(FilterField::EventType, FilterChoice::All);
        assert_eq!(filter.apply(&events, Language::En).len(), events.len());
    }

    #[test]
    fn test_filter_compares_in_active_language() {
        let events = sample();
        let mut filter = EventFilter::default();
        filter.set(FilterField::Region, FilterChoice::Value("أوروبا".into()));
        assert_eq!(filter.apply(&events, Language::Ar), vec![1]);
        assert!(filter.apply(&events, Language::En).is_empty());
    }

    #[test]
    fn test_options_are_distinct_in_first_seen_order() {
        let events = sample();
        assert_eq!(
            options(&events, FilterField::Region, Language::En),
            ["Middle East", "Europe"]
        );
        assert_eq!(
            options(&events, FilterField::EventType, Language::Ar),
            ["مؤتمر", "معرض"]
        );
    }

    #[test]
    fn test_translate_follows_language_switch() {
        let events = sample();
        let mut filter = EventFilter::default();
        filter.set(FilterField::Region, FilterChoice::Value("Europe".into()));

        filter.translate(&events, Language::En, Language::Ar);
        assert_eq!(filter.region, FilterChoice::Value("أوروبا".into()));
        assert_eq!(filter.apply(&events, Language::Ar), vec![1]);
    }

    #[test]
    fn test_translate_unknown_value_resets_to_all() {
        let events = sample();
        let mut filter = EventFilter::default();
        filter.set(FilterField::EventType, FilterChoice::Value("Webinar".into()));

        filter.translate(&events, Language::En, Language::Ar);
        assert!(filter.event_type.is_all());
    }

    #[test]
    fn test_choice_from_input() {
        assert!(FilterChoice::from_input(None).is_all());
        assert!(FilterChoice::from_input(Some("  ")).is_all());
        assert!(FilterChoice::from_input(Some("ALL")).is_all());
        assert_eq!(
            FilterChoice::from_input(Some(" Europe ")).as_value(),
            Some("Europe")
        );
    }
}
