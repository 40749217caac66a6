//! CMS snapshot: a JSON export of languages, dictionary and published content.
//!
//! The snapshot is loaded once at startup, from a file or an HTTP endpoint,
//! and then shared read-only between requests.

use super::{ContentCache, ContentCacheAccessor, ContentItem, DictionaryItem, Language, LocalizationService};
use crate::retry::{with_retry_if, RetryConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to read snapshot file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid snapshot JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Snapshot request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Snapshot endpoint returned HTTP {0}")]
    Status(u16),
}

impl SnapshotError {
    /// Transport failures and server errors are worth another attempt;
    /// client errors and malformed payloads are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            SnapshotError::Http(_) => true,
            SnapshotError::Status(status) => *status >= 500,
            SnapshotError::Io { .. } | SnapshotError::Parse(_) => false,
        }
    }
}

/// Published content section of a snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedContent {
    /// Known content type aliases. Item content types are used when empty.
    #[serde(default)]
    pub content_types: Vec<String>,

    #[serde(default)]
    pub items: Vec<ContentItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CmsSnapshot {
    #[serde(default)]
    pub languages: Vec<Language>,

    #[serde(default)]
    pub dictionary: Vec<DictionaryItem>,

    /// `None` means the content cache was not available when exported
    #[serde(default)]
    pub content: Option<PublishedContent>,
}

impl CmsSnapshot {
    pub fn from_json(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn from_file(path: &std::path::Path) -> Result<Self, SnapshotError> {
        let bytes = std::fs::read(path).map_err(|source| SnapshotError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&bytes)
    }

    /// Fetch a snapshot over HTTP, retrying transport failures and 5xx.
    pub async fn fetch(url: &str, retry: &RetryConfig) -> Result<Self, SnapshotError> {
        let client = reqwest::Client::new();

        with_retry_if(
            retry,
            "Snapshot fetch",
            || fetch_once(&client, url),
            SnapshotError::is_retryable,
        )
        .await
    }
}

async fn fetch_once(client: &reqwest::Client, url: &str) -> Result<CmsSnapshot, SnapshotError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(SnapshotError::Status(status.as_u16()));
    }

    let bytes = response.bytes().await?;
    CmsSnapshot::from_json(&bytes)
}

/// Where the snapshot comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotSource {
    File(PathBuf),
    Url(String),
}

impl SnapshotSource {
    pub async fn load(&self, retry: &RetryConfig) -> Result<CmsSnapshot, SnapshotError> {
        let snapshot = match self {
            SnapshotSource::File(path) => {
                info!("Loading CMS snapshot from {}", path.display());
                CmsSnapshot::from_file(path)?
            }
            SnapshotSource::Url(url) => {
                info!("Fetching CMS snapshot from {}", url);
                CmsSnapshot::fetch(url, retry).await?
            }
        };

        info!(
            "Loaded snapshot: {} languages, {} root dictionary items, content cache {}",
            snapshot.languages.len(),
            snapshot.dictionary.len(),
            if snapshot.content.is_some() { "available" } else { "unavailable" }
        );

        Ok(snapshot)
    }
}

/// Serves both CMS seams from one immutable snapshot.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    languages: Arc<Vec<Language>>,
    dictionary: Arc<Vec<DictionaryItem>>,
    content: Option<Arc<PublishedContent>>,
}

impl SnapshotStore {
    pub fn new(snapshot: CmsSnapshot) -> Self {
        Self {
            languages: Arc::new(snapshot.languages),
            dictionary: Arc::new(snapshot.dictionary),
            content: snapshot.content.map(Arc::new),
        }
    }
}

/// Request-scoped view of the published content. Holds its own handle on the
/// content, released when the request drops it.
struct SnapshotContentCache {
    content: Arc<PublishedContent>,
}

impl ContentCache for SnapshotContentCache {
    fn content_type(&self, alias: &str) -> Option<String> {
        self.content
            .content_types
            .iter()
            .chain(self.content.items.iter().map(|item| &item.content_type))
            .find(|known| known.eq_ignore_ascii_case(alias))
            .cloned()
    }

    fn by_content_type(&self, content_type: &str) -> Vec<ContentItem> {
        self.content
            .items
            .iter()
            .filter(|item| item.content_type.eq_ignore_ascii_case(content_type))
            .cloned()
            .collect()
    }
}

impl ContentCacheAccessor for SnapshotStore {
    fn try_get_content_cache(&self) -> Option<Box<dyn ContentCache + Send + '_>> {
        let Some(content) = &self.content else {
            debug!("Snapshot has no published content section");
            return None;
        };

        Some(Box::new(SnapshotContentCache {
            content: Arc::clone(content),
        }))
    }
}

impl LocalizationService for SnapshotStore {
    fn all_languages(&self) -> Vec<Language> {
        self.languages.as_ref().clone()
    }

    fn root_dictionary_items(&self) -> Vec<DictionaryItem> {
        self.dictionary.as_ref().clone()
    }
}
