//! Read-only access to the CMS.
//!
//! The service never talks to a CMS directly. It goes through two seams:
//!
//! - `ContentCacheAccessor` / `ContentCache`: the published content cache,
//!   acquired per request and possibly unavailable
//! - `LocalizationService`: configured languages and dictionary items
//!
//! `snapshot` provides the implementation used by the binary: an immutable
//! JSON export of both, loaded once at startup.

mod model;
mod snapshot;

pub use model::{
    first_segment, ContentItem, CultureVariant, DictionaryItem, Language, Translation,
    LANGUAGE_CONTENT_TYPE, LANGUAGE_ISO_CODE_PROPERTY,
};
pub use snapshot::{CmsSnapshot, PublishedContent, SnapshotError, SnapshotSource, SnapshotStore};

/// Published content cache for the duration of one request.
pub trait ContentCache {
    /// Resolve a content type alias to the alias the cache knows it by.
    fn content_type(&self, alias: &str) -> Option<String>;

    /// All published items of the given content type.
    fn by_content_type(&self, content_type: &str) -> Vec<ContentItem>;
}

/// Hands out request-scoped content caches.
pub trait ContentCacheAccessor: Send + Sync {
    /// Returns `None` when no content context can be acquired right now.
    fn try_get_content_cache(&self) -> Option<Box<dyn ContentCache + Send + '_>>;
}

/// Languages and dictionary items configured in the CMS.
pub trait LocalizationService: Send + Sync {
    fn all_languages(&self) -> Vec<Language>;

    /// Top-level dictionary items only; nested items stay in `children`.
    fn root_dictionary_items(&self) -> Vec<DictionaryItem>;
}
