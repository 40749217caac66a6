//! Flat dictionary for the configured language closest to a requested code.

use crate::cms::{first_segment, DictionaryItem, Language};
use crate::error::ApiError;
use std::collections::BTreeMap;
use tracing::debug;

/// First configured language whose ISO 639 name equals the neutral part of
/// `requested` ("en-GB" matches "en-US").
pub fn find_closest_language<'a>(requested: &str, languages: &'a [Language]) -> Option<&'a Language> {
    let segment = first_segment(requested);
    languages
        .iter()
        .find(|lang| lang.two_letter_iso_language_name() == segment)
}

/// Map each root dictionary key to its value in the closest configured
/// language. Items without a translation in that language are left out.
pub fn resolve_translations(
    requested: &str,
    languages: &[Language],
    dictionary_items: &[DictionaryItem],
) -> Result<BTreeMap<String, String>, ApiError> {
    let language = find_closest_language(requested, languages).ok_or_else(ApiError::language_not_found)?;
    debug!("Serving translations for {} (requested {})", language.iso_code, requested);

    let translations = dictionary_items
        .iter()
        .filter_map(|item| {
            item.translation_for(&language.iso_code)
                .map(|t| (item.item_key.clone(), t.value.clone()))
        })
        .collect();

    Ok(translations)
}
