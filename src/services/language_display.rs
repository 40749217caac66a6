//! Language list for a language switcher.
//!
//! Each configured language is paired with its `Language` content node, which
//! carries the language's name in every culture. The result maps the node's
//! culture code to the native name, suffixed with the name in the current
//! culture.

use super::{CultureMatch, ResolutionOptions};
use crate::cms::{first_segment, ContentItem, Language, LANGUAGE_ISO_CODE_PROPERTY};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageNode {
    pub is_selected: bool,
    pub display_name: String,
}

/// Pick the culture the display names are rendered in.
///
/// With `CultureMatch::Exact` a configured language whose full code equals
/// `requested` wins. Otherwise the part of `requested` before the first `-`
/// is compared against full configured codes, which only matches languages
/// configured with a bare code such as "da". Falls back to the default
/// culture.
pub fn resolve_current_culture(
    requested: &str,
    languages: &[Language],
    options: &ResolutionOptions,
) -> String {
    let exact = match options.culture_match {
        CultureMatch::Exact => languages
            .iter()
            .find(|lang| lang.iso_code.eq_ignore_ascii_case(requested)),
        CultureMatch::Legacy => None,
    };

    let segment = first_segment(requested);

    exact
        .or_else(|| {
            languages
                .iter()
                .find(|lang| lang.iso_code.eq_ignore_ascii_case(segment))
        })
        .map(|lang| lang.iso_code.clone())
        .unwrap_or_else(|| options.default_culture.clone())
}

/// Build the ISO code → `LanguageNode` map.
///
/// Languages without a matching content node, without culture data, or
/// missing either culture name are left out. The first node produced for an
/// ISO code wins; codes compare case-insensitively.
pub fn resolve_language_display_map(
    requested: &str,
    languages: &[Language],
    content_items: &[ContentItem],
    options: &ResolutionOptions,
) -> BTreeMap<String, LanguageNode> {
    let current = resolve_current_culture(requested, languages, options);
    let current_key = current.to_ascii_lowercase();
    debug!("Resolved current culture '{}' for request '{}'", current, requested);

    let mut nodes = BTreeMap::new();
    let mut seen = HashSet::new();

    for language in languages {
        let iso_key = language.iso_code.to_ascii_lowercase();

        let Some(item) = content_items.iter().find(|item| {
            item.value_str(LANGUAGE_ISO_CODE_PROPERTY)
                .is_some_and(|value| value.to_ascii_lowercase() == iso_key)
        }) else {
            debug!("No language content node for {}", language.iso_code);
            continue;
        };

        if !item.has_cultures() {
            debug!("Language node for {} has no culture data", language.iso_code);
            continue;
        }

        let (Some(native), Some(translated)) = (item.culture(&iso_key), item.culture(&current_key))
        else {
            debug!(
                "Language node for {} lacks a name in {} or {}",
                language.iso_code, iso_key, current_key
            );
            continue;
        };

        let iso_code = native.culture.clone();
        if !seen.insert(iso_code.to_ascii_lowercase()) {
            continue;
        }

        let is_selected = iso_code.eq_ignore_ascii_case(&current);
        let display_name = if is_selected && native.name == translated.name {
            native.name.clone()
        } else {
            format!("{} ({})", native.name, translated.name)
        };

        nodes.insert(
            iso_code,
            LanguageNode {
                is_selected,
                display_name,
            },
        );
    }

    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cms::{CultureVariant, LANGUAGE_CONTENT_TYPE};
    use proptest::prelude::*;
    use serde_json::json;
    use std::collections::HashMap;

    // ==================== Test Helpers ====================

    fn language_node(iso: &str, names: &[(&str, &str)]) -> ContentItem {
        ContentItem {
            content_type: LANGUAGE_CONTENT_TYPE.to_string(),
            properties: HashMap::from([(LANGUAGE_ISO_CODE_PROPERTY.to_string(), json!(iso))]),
            cultures: Some(
                names
                    .iter()
                    .map(|(culture, name)| {
                        (
                            culture.to_string(),
                            CultureVariant {
                                culture: culture.to_string(),
                                name: name.to_string(),
                            },
                        )
                    })
                    .collect(),
            ),
        }
    }

    fn languages(codes: &[&str]) -> Vec<Language> {
        codes.iter().map(|code| Language::new(*code)).collect()
    }

    /// English and Danish, each named in both cultures.
    fn english_danish() -> (Vec<Language>, Vec<ContentItem>) {
        (
            languages(&["en-US", "da-DK"]),
            vec![
                language_node("en-us", &[("en-us", "English"), ("da-dk", "Engelsk")]),
                language_node("da-dk", &[("da-dk", "Dansk"), ("en-us", "Danish")]),
            ],
        )
    }

    fn legacy() -> ResolutionOptions {
        ResolutionOptions {
            culture_match: CultureMatch::Legacy,
            ..Default::default()
        }
    }

    // ==================== resolve_current_culture Tests ====================

    #[test]
    fn test_current_culture_exact_match() {
        let langs = languages(&["en-US", "da-DK"]);
        let current = resolve_current_culture("da-dk", &langs, &ResolutionOptions::default());
        assert_eq!(current, "da-DK");
    }

    #[test]
    fn test_current_culture_legacy_ignores_full_code() {
        let langs = languages(&["en-US", "da-DK"]);
        assert_eq!(resolve_current_culture("da-dk", &langs, &legacy()), "en-us");
    }

    #[test]
    fn test_current_culture_segment_matches_bare_code() {
        let langs = languages(&["en-US", "da"]);
        assert_eq!(resolve_current_culture("da-DK", &langs, &legacy()), "da");
        assert_eq!(
            resolve_current_culture("da-DK", &langs, &ResolutionOptions::default()),
            "da"
        );
    }

    #[test]
    fn test_current_culture_falls_back_to_default() {
        let langs = languages(&["en-US", "da-DK"]);
        let current = resolve_current_culture("fr-FR", &langs, &ResolutionOptions::default());
        assert_eq!(current, "en-us");
    }

    #[test]
    fn test_current_culture_custom_default() {
        let options = ResolutionOptions {
            default_culture: "da-dk".to_string(),
            ..Default::default()
        };
        assert_eq!(resolve_current_culture("xx", &[], &options), "da-dk");
    }

    // ==================== resolve_language_display_map Tests ====================

    #[test]
    fn test_danish_selected() {
        let (langs, items) = english_danish();
        let map = resolve_language_display_map("da-dk", &langs, &items, &ResolutionOptions::default());

        assert_eq!(map.len(), 2);
        assert_eq!(
            map["da-dk"],
            LanguageNode {
                is_selected: true,
                display_name: "Dansk".to_string()
            }
        );
        assert_eq!(
            map["en-us"],
            LanguageNode {
                is_selected: false,
                display_name: "English (Engelsk)".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_culture_uses_default() {
        let (langs, items) = english_danish();
        let map = resolve_language_display_map("fr-FR", &langs, &items, &ResolutionOptions::default());

        assert!(map["en-us"].is_selected);
        assert_eq!(map["en-us"].display_name, "English");
        assert!(!map["da-dk"].is_selected);
        assert_eq!(map["da-dk"].display_name, "Dansk (Danish)");
    }

    #[test]
    fn test_unselected_always_composite_even_when_equal() {
        let langs = languages(&["en-US", "en-GB"]);
        let items = vec![
            language_node("en-us", &[("en-us", "English")]),
            language_node("en-gb", &[("en-gb", "English"), ("en-us", "English")]),
        ];
        let map = resolve_language_display_map("en-US", &langs, &items, &ResolutionOptions::default());

        assert_eq!(map["en-us"].display_name, "English");
        assert_eq!(map["en-gb"].display_name, "English (English)");
    }

    #[test]
    fn test_missing_content_node_is_skipped() {
        let langs = languages(&["en-US", "da-DK", "de-DE"]);
        let (_, items) = english_danish();
        let map = resolve_language_display_map("en-US", &langs, &items, &ResolutionOptions::default());

        assert_eq!(map.len(), 2);
        assert!(!map.contains_key("de-de"));
    }

    #[test]
    fn test_node_without_cultures_is_skipped() {
        let langs = languages(&["en-US"]);
        let item = ContentItem {
            cultures: None,
            ..language_node("en-us", &[])
        };
        let map = resolve_language_display_map("en-US", &langs, &[item], &ResolutionOptions::default());
        assert!(map.is_empty());
    }

    #[test]
    fn test_missing_translated_name_is_skipped() {
        let langs = languages(&["en-US", "da-DK"]);
        let items = vec![
            language_node("en-us", &[("en-us", "English"), ("da-dk", "Engelsk")]),
            language_node("da-dk", &[("da-dk", "Dansk")]),
        ];
        let map = resolve_language_display_map("en-US", &langs, &items, &ResolutionOptions::default());

        assert_eq!(map.len(), 1);
        assert!(map.contains_key("en-us"));
    }

    #[test]
    fn test_default_missing_selects_nothing() {
        let langs = languages(&["da-DK", "sv-SE"]);
        let items = vec![
            language_node("da-dk", &[("da-dk", "Dansk")]),
            language_node("sv-se", &[("sv-se", "Svenska")]),
        ];
        let map = resolve_language_display_map("fr-FR", &langs, &items, &ResolutionOptions::default());

        assert!(map.values().all(|node| !node.is_selected));
    }

    #[test]
    fn test_duplicate_codes_first_wins() {
        let langs = languages(&["en-US", "EN-us"]);
        let items = vec![language_node("en-us", &[("en-us", "English")])];
        let map = resolve_language_display_map("en-US", &langs, &items, &ResolutionOptions::default());

        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_key_keeps_stored_casing() {
        let langs = languages(&["da-DK"]);
        let items = vec![language_node("da-dk", &[("da-DK", "Dansk")])];
        let map = resolve_language_display_map("da-DK", &langs, &items, &ResolutionOptions::default());

        assert!(map.contains_key("da-DK"));
        assert!(map["da-DK"].is_selected);
    }

    #[test]
    fn test_first_matching_content_node_used() {
        let langs = languages(&["en-US"]);
        let items = vec![
            language_node("EN-US", &[("en-us", "English")]),
            language_node("en-us", &[("en-us", "Second")]),
        ];
        let map = resolve_language_display_map("en-US", &langs, &items, &ResolutionOptions::default());
        assert_eq!(map["en-us"].display_name, "English");
    }

    #[test]
    fn test_serializes_camel_case() {
        let node = LanguageNode {
            is_selected: true,
            display_name: "Dansk".to_string(),
        };
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json, json!({"isSelected": true, "displayName": "Dansk"}));
    }

    // ==================== Property Tests ====================

    proptest! {
        #[test]
        fn prop_at_most_one_selected(requested in "[a-z]{2}(-[a-z]{2})?") {
            let (langs, items) = english_danish();
            let map = resolve_language_display_map(&requested, &langs, &items, &ResolutionOptions::default());
            prop_assert!(map.values().filter(|node| node.is_selected).count() <= 1);
        }

        #[test]
        fn prop_keys_unique_ignoring_case(codes in proptest::collection::vec("(en|da)-(us|dk|US|DK)", 0..8)) {
            let langs: Vec<Language> = codes.iter().map(|code| Language::new(code.as_str())).collect();
            let items = vec![
                language_node("en-us", &[("en-us", "English"), ("da-dk", "Engelsk")]),
                language_node("da-dk", &[("da-dk", "Dansk"), ("en-us", "Danish")]),
            ];
            let map = resolve_language_display_map("en-us", &langs, &items, &ResolutionOptions::default());

            let lowered: HashSet<String> = map.keys().map(|k| k.to_ascii_lowercase()).collect();
            prop_assert_eq!(lowered.len(), map.len());
        }

        #[test]
        fn prop_selected_name_is_native_when_equal(name in "[A-Za-z]{1,12}") {
            let langs = languages(&["en-US"]);
            let items = vec![language_node("en-us", &[("en-us", name.as_str())])];
            let map = resolve_language_display_map("en-US", &langs, &items, &ResolutionOptions::default());
            prop_assert_eq!(&map["en-us"].display_name, &name);
        }
    }
}
