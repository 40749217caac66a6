//! CMS entities as they arrive from the content cache and localization store.
//!
//! Everything here is read-only: a request borrows these values from an
//! immutable snapshot and never mutates them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Property alias carrying the ISO code on `Language` content nodes.
pub const LANGUAGE_ISO_CODE_PROPERTY: &str = "LanguageIsocode";

/// Content type alias of the nodes that hold per-culture language names.
pub const LANGUAGE_CONTENT_TYPE: &str = "Language";

/// A language configured in the localization store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    /// Full culture code as stored by the CMS (e.g. "en-US")
    pub iso_code: String,

    /// English display name of the culture (e.g. "English (United States)")
    #[serde(default)]
    pub culture_name: Option<String>,

    #[serde(default)]
    pub is_default: bool,
}

impl Language {
    pub fn new(iso_code: impl Into<String>) -> Self {
        Self {
            iso_code: iso_code.into(),
            culture_name: None,
            is_default: false,
        }
    }

    /// ISO 639 language name derived from the culture code.
    ///
    /// This is the lower-cased neutral part of the code: "en-US" gives "en",
    /// "haw-US" gives "haw".
    pub fn two_letter_iso_language_name(&self) -> String {
        first_segment(&self.iso_code).to_ascii_lowercase()
    }
}

/// Per-culture variant data of a content node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CultureVariant {
    /// Culture key exactly as the CMS stores it
    pub culture: String,
    pub name: String,
}

/// A published content node.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub content_type: String,

    #[serde(default)]
    pub properties: HashMap<String, serde_json::Value>,

    /// `None` when the node is invariant (no culture variants published)
    #[serde(default)]
    pub cultures: Option<HashMap<String, CultureVariant>>,
}

impl ContentItem {
    /// Read a string property by alias. Aliases match case-insensitively.
    ///
    /// Returns `None` when the property is missing or is not a JSON string.
    pub fn value_str(&self, alias: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(alias))
            .and_then(|(_, value)| value.as_str())
    }

    /// Look up the variant for a culture key, ignoring case.
    ///
    /// Returns `None` both when the node has no culture data and when the
    /// culture is not among its variants.
    pub fn culture(&self, culture: &str) -> Option<&CultureVariant> {
        let cultures = self.cultures.as_ref()?;
        cultures.get(culture).or_else(|| {
            cultures
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(culture))
                .map(|(_, variant)| variant)
        })
    }

    pub fn has_cultures(&self) -> bool {
        self.cultures
            .as_ref()
            .map(|cultures| !cultures.is_empty())
            .unwrap_or(false)
    }
}

/// A translated value of a dictionary item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub language_iso_code: String,
    pub value: String,
}

/// A CMS dictionary entry. The dictionary is a tree; `children` hold nested
/// entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryItem {
    pub item_key: String,

    #[serde(default)]
    pub translations: Vec<Translation>,

    #[serde(default)]
    pub children: Vec<DictionaryItem>,
}

impl DictionaryItem {
    /// First translation for the given language, comparing ISO codes
    /// case-insensitively.
    pub fn translation_for(&self, iso_code: &str) -> Option<&Translation> {
        self.translations
            .iter()
            .find(|t| t.language_iso_code.eq_ignore_ascii_case(iso_code))
    }
}

/// The part of a culture code before the first `-`.
pub fn first_segment(code: &str) -> &str {
    code.split('-').next().unwrap_or(code)
}
