//! Events command handlers.

use anyhow::{Context, Result};
use evdash_core::config::Config;
use evdash_core::dataset::Dataset;
use evdash_core::filter::{EventFilter, FilterChoice};
use evdash_core::i18n::{Label, Language, LocalizedText};
use evdash_core::insights::EventSummary;
use evdash_core::model::Event;

use super::table::new_table;

const LIST_HEADER: [Label; 6] = [
    Label::new("#", "#"),
    Label::new("Name", "الاسم"),
    Label::new("Dates", "التواريخ"),
    Label::new("City", "المدينة"),
    Label::new("Region", "المنطقة"),
    Label::new("Type", "النوع"),
];

const NO_MATCHES: Label = Label::new(
    "No events match the current filters.",
    "لا توجد أحداث تطابق عوامل التصفية الحالية.",
);

pub fn list(config: &Config, region: Option<&str>, event_type: Option<&str>) -> Result<()> {
    let dataset = Dataset::for_config(config).context("load events")?;
    let lang = config.language;
    let filter = EventFilter {
        region: FilterChoice::from_input(region),
        event_type: FilterChoice::from_input(event_type),
    };

    let indices = filter.apply(dataset.events(), lang);
    tracing::debug!(?filter, matched = indices.len(), "listing events");
    if indices.is_empty() {
        println!("{}", NO_MATCHES.get(lang));
        return Ok(());
    }

    let mut table = new_table(LIST_HEADER.map(|label| label.get(lang)));
    for index in indices {
        let Some(event) = dataset.get(index) else {
            continue;
        };
        table.add_row(vec![
            index.to_string(),
            event.name(lang).to_string(),
            event.date_range(),
            event.city.display(lang).to_string(),
            event.region.display(lang).to_string(),
            event.event_type.display(lang).to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn show(config: &Config, index: usize) -> Result<()> {
    let dataset = Dataset::for_config(config).context("load events")?;
    let Some(event) = dataset.get(index) else {
        anyhow::bail!(
            "No event at index {index} ({} events; see `evdash events list`)",
            dataset.len()
        );
    };

    let mut table = new_table([
        "",
        Language::En.native_name(),
        Language::Ar.native_name(),
    ]);
    for (label, text) in text_rows(event) {
        if !text.is_blank() {
            table.add_row(vec![label.to_string(), text.en.clone(), text.ar.clone()]);
        }
    }
    for (label, value) in plain_rows(event) {
        table.add_row(vec![label.to_string(), value.clone(), value]);
    }
    println!("{table}");

    let summary = EventSummary::of(event);
    let lang = config.language;
    let counts: Vec<String> = summary
        .composition()
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(label, count)| format!("{} {count}", label.get(lang)))
        .collect();
    if !counts.is_empty() {
        println!("{}", counts.join(" · "));
    }
    Ok(())
}

fn text_rows(event: &Event) -> [(&'static str, &LocalizedText); 11] {
    [
        ("Name", &event.event_name),
        ("Type", &event.event_type),
        ("Organizer", &event.organizer),
        ("Venue", &event.venue),
        ("City", &event.city),
        ("Country", &event.country),
        ("Region", &event.region),
        ("Mode", &event.mode),
        ("Duration", &event.duration),
        ("Description", &event.description),
        ("Endorsements", &event.government_endorsements),
    ]
}

/// Language-neutral fields, shown in both columns.
fn plain_rows(event: &Event) -> Vec<(&'static str, String)> {
    let mut rows = Vec::new();
    let dates = event.date_range();
    if !dates.is_empty() {
        rows.push(("Dates", dates));
    }
    if let Some(score) = event.impact_score {
        rows.push(("Impact", format!("{score:.0}/100")));
    }
    for (label, value) in [
        ("Website", &event.official_website),
        ("Registration", &event.registration_url),
        ("Contact", &event.contact_email),
    ] {
        if let Some(value) = value.as_deref().filter(|v| !v.trim().is_empty()) {
            rows.push((label, value.to_string()));
        }
    }
    rows
}
