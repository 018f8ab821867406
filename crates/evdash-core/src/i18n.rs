//! Language selection and bilingual text.
//!
//! Every user-facing field in the dataset is a pair of strings keyed by
//! language code. Real records are not always that tidy, so [`LocalizedText`]
//! also accepts a bare string or number and uses it for both languages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Display language for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    /// Returns the other language.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }

    /// Returns the language code used as the key in bilingual records.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// Arabic is laid out right-to-left.
    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Ar)
    }

    /// Name of the language in that language.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ar => "العربية",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "ar" | "arabic" => Ok(Language::Ar),
            other => anyhow::bail!("Unknown language '{other}' (expected 'en' or 'ar')"),
        }
    }
}

/// A pair of strings keyed by language code.
///
/// Deserialization never fails: a pair with non-string sides, a bare scalar,
/// or `null` all produce a value, and any other shape reads as blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct LocalizedText {
    pub en: String,
    pub ar: String,
}

impl From<Value> for LocalizedText {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(mut map) => Self {
                en: map.remove("en").map(scalar_text).unwrap_or_default(),
                ar: map.remove("ar").map(scalar_text).unwrap_or_default(),
            },
            Value::Array(_) | Value::Null => Self::default(),
            scalar => Self::same(scalar_text(scalar)),
        }
    }
}

/// Text of a JSON scalar. Arrays, objects and null read as empty.
fn scalar_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ar: ar.into(),
        }
    }

    /// Uses the same text for both languages.
    pub fn same(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            ar: text.clone(),
            en: text,
        }
    }

    /// Returns the variant for `lang` exactly as stored.
    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.en,
            Language::Ar => &self.ar,
        }
    }

    /// Returns the variant for `lang`, falling back to the other language
    /// when the requested one is blank.
    pub fn display(&self, lang: Language) -> &str {
        let primary = self.get(lang);
        if primary.trim().is_empty() {
            self.get(lang.toggle())
        } else {
            primary
        }
    }

    /// True when both variants are blank.
    pub fn is_blank(&self) -> bool {
        self.en.trim().is_empty() && self.ar.trim().is_empty()
    }
}

/// A static UI label in both languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    pub en: &'static str,
    pub ar: &'static str,
}

impl Label {
    pub const fn new(en: &'static str, ar: &'static str) -> Self {
        Self { en, ar }
    }

    pub fn get(self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.en,
            Language::Ar => self.ar,
        }
    }
}
