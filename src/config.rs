use crate::cms::SnapshotSource;
use crate::services::{CultureMatch, ResolutionOptions, DEFAULT_CULTURE};
use anyhow::{anyhow, bail, Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // CMS snapshot
    pub snapshot_source: SnapshotSource,

    // Language resolution
    pub default_culture: String,
    pub culture_match: CultureMatch,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // A file path wins over a URL when both are set
        let snapshot_source = match (
            std::env::var("CMS_SNAPSHOT_PATH").ok().filter(|v| !v.is_empty()),
            std::env::var("CMS_SNAPSHOT_URL").ok().filter(|v| !v.is_empty()),
        ) {
            (Some(path), _) => SnapshotSource::File(PathBuf::from(path)),
            (None, Some(url)) => SnapshotSource::Url(url),
            (None, None) => bail!("Either CMS_SNAPSHOT_PATH or CMS_SNAPSHOT_URL must be set"),
        };

        Ok(Self {
            // Server
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: match std::env::var("PORT") {
                Ok(port) => port.parse::<u16>().context("PORT must be a valid port number")?,
                Err(_) => 8080,
            },

            snapshot_source,

            // Language resolution
            default_culture: std::env::var("DEFAULT_CULTURE")
                .unwrap_or_else(|_| DEFAULT_CULTURE.to_string()),
            culture_match: match std::env::var("CULTURE_MATCH") {
                Ok(mode) => mode.parse::<CultureMatch>().map_err(|e: String| anyhow!(e))?,
                Err(_) => CultureMatch::default(),
            },
        })
    }

    pub fn resolution_options(&self) -> ResolutionOptions {
        ResolutionOptions {
            culture_match: self.culture_match,
            default_culture: self.default_culture.clone(),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
