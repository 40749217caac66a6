//! Request-level queries over the CMS seams.
//!
//! - `language_display`: language switcher entries for a culture
//! - `translation_lookup`: dictionary values for the closest language

mod language_display;
mod translation_lookup;

pub use language_display::{resolve_current_culture, resolve_language_display_map, LanguageNode};
pub use translation_lookup::{find_closest_language, resolve_translations};

use crate::cms::{ContentCacheAccessor, LocalizationService, LANGUAGE_CONTENT_TYPE};
use crate::error::ApiError;
use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

/// Culture code used when the requested culture matches no language.
pub const DEFAULT_CULTURE: &str = "en-us";

/// How a requested culture is matched against configured languages when
/// rendering the language list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CultureMatch {
    /// Full code first, then the neutral part of the code
    #[default]
    Exact,
    /// Only the neutral part of the code ("da" out of "da-DK"), compared
    /// against full configured codes
    Legacy,
}

impl FromStr for CultureMatch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(CultureMatch::Exact),
            "legacy" => Ok(CultureMatch::Legacy),
            other => Err(format!(
                "Unknown culture match mode '{}', expected 'exact' or 'legacy'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionOptions {
    pub culture_match: CultureMatch,
    pub default_culture: String,
}

impl Default for ResolutionOptions {
    fn default() -> Self {
        Self {
            culture_match: CultureMatch::default(),
            default_culture: DEFAULT_CULTURE.to_string(),
        }
    }
}

/// Both API queries bound to their CMS collaborators.
#[derive(Clone)]
pub struct TranslationsApi {
    content: Arc<dyn ContentCacheAccessor>,
    localization: Arc<dyn LocalizationService>,
    options: ResolutionOptions,
}

impl TranslationsApi {
    pub fn new(
        content: Arc<dyn ContentCacheAccessor>,
        localization: Arc<dyn LocalizationService>,
        options: ResolutionOptions,
    ) -> Self {
        Self {
            content,
            localization,
            options,
        }
    }

    /// Language list rendered in `culture`.
    ///
    /// Fails with `ServiceUnavailable` before touching anything else when no
    /// content cache can be acquired.
    pub fn all_languages(&self, culture: &str) -> Result<BTreeMap<String, LanguageNode>, ApiError> {
        let cache = self
            .content
            .try_get_content_cache()
            .ok_or_else(ApiError::content_unavailable)?;

        let items = match cache.content_type(LANGUAGE_CONTENT_TYPE) {
            Some(content_type) => cache.by_content_type(&content_type),
            None => {
                debug!("Content type '{}' not found", LANGUAGE_CONTENT_TYPE);
                Vec::new()
            }
        };

        let languages = self.localization.all_languages();

        Ok(resolve_language_display_map(
            culture,
            &languages,
            &items,
            &self.options,
        ))
    }

    /// Dictionary for the configured language closest to `language`.
    pub fn translations(&self, language: &str) -> Result<BTreeMap<String, String>, ApiError> {
        let languages = self.localization.all_languages();
        if find_closest_language(language, &languages).is_none() {
            return Err(ApiError::language_not_found());
        }

        let items = self.localization.root_dictionary_items();
        resolve_translations(language, &languages, &items)
    }
}
