//! Forgiving field deserializers for dataset records.
//!
//! `#[serde(default)]` only covers absent keys. These helpers also map `null`
//! and values of the wrong shape to the field's default, so one bad field
//! leaves the rest of the record readable.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Any field: `T::default()` when the value does not fit.
pub fn value<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(from_value(raw).unwrap_or_default())
}

/// Lists: `null` or a non-array is empty, and entries that do not fit are
/// dropped.
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(items.into_iter().filter_map(from_value).collect())
}

/// Keyed maps: same rules as [`list`], per entry.
pub fn map<'de, D, T>(deserializer: D) -> Result<BTreeMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Object(entries) = Value::deserialize(deserializer)? else {
        return Ok(BTreeMap::new());
    };
    Ok(entries
        .into_iter()
        .filter_map(|(key, raw)| from_value(raw).map(|entry| (key, entry)))
        .collect())
}

/// A number, or a string holding one. Anything else is `None`.
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(parsed.filter(|n| n.is_finite()))
}

fn from_value<T: DeserializeOwned>(raw: Value) -> Option<T> {
    match serde_json::from_value(raw) {
        Ok(parsed) => Some(parsed),
        Err(error) => {
            tracing::debug!(%error, "ignoring malformed field");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Record {
        #[serde(deserialize_with = "list")]
        tags: Vec<String>,
        #[serde(deserialize_with = "map")]
        links: BTreeMap<String, String>,
        #[serde(deserialize_with = "value")]
        url: Option<String>,
        #[serde(deserialize_with = "number")]
        score: Option<f64>,
    }

    fn record(json: &str) -> Record {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_null_reads_as_default() {
        let parsed = record(r#"{"tags":null,"links":null,"url":null,"score":null}"#);
        assert!(parsed.tags.is_empty());
        assert!(parsed.links.is_empty());
        assert_eq!(parsed.url, None);
        assert_eq!(parsed.score, None);
    }

    #[test]
    fn test_wrong_shapes_read_as_default() {
        let parsed = record(r#"{"tags":"solo","links":[1],"url":42,"score":{"x":1}}"#);
        assert!(parsed.tags.is_empty());
        assert!(parsed.links.is_empty());
        assert_eq!(parsed.url, None);
        assert_eq!(parsed.score, None);
    }

    #[test]
    fn test_bad_entries_are_dropped() {
        let parsed = record(r#"{"tags":["a",7,"b"],"links":{"x":"https://x.example","y":null}}"#);
        assert_eq!(parsed.tags, vec!["a", "b"]);
        assert_eq!(parsed.links.len(), 1);
        assert_eq!(parsed.links["x"], "https://x.example");
    }

    #[test]
    fn test_number_accepts_numeric_strings() {
        assert_eq!(record(r#"{"score":" 85 "}"#).score, Some(85.0));
        assert_eq!(record(r#"{"score":72.5}"#).score, Some(72.5));
        assert_eq!(record(r#"{"score":"high"}"#).score, None);
        assert_eq!(record(r#"{"score":"NaN"}"#).score, None);
    }
}
