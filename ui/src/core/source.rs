//! Snapshot acquisition. Each call fetches a fresh document; nothing is cached.

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

use reqwest::{header::CACHE_CONTROL, Url};
use tracing::debug;
use uuid::Uuid;

use super::{
    config::{DashboardConfig, SourceLocation},
    error::SnapshotError,
    platform,
    snapshot::Snapshot,
};

/// Name of the query parameter carrying the cache-busting nonce.
pub const CACHE_BUST_PARAM: &str = "_";

/// Supplies a snapshot on demand. Implementations may fail or return stale data.
#[allow(async_fn_in_trait)]
pub trait SnapshotSource {
    async fn fetch(&self) -> Result<Snapshot, SnapshotError>;
}

/// Fetches the snapshot over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
    cache_bust: bool,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, cache_bust: bool) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            cache_bust,
        }
    }

    /// Absolute request URL, resolved against the page location when relative.
    pub fn request_url(&self) -> Result<Url, SnapshotError> {
        let mut url = match Url::parse(&self.url) {
            Ok(url) => url,
            Err(err) => platform::page_location()
                .and_then(|base| Url::parse(&base).ok())
                .and_then(|base| base.join(&self.url).ok())
                .ok_or_else(|| SnapshotError::Transport(format!("invalid URL {:?}: {err}", self.url)))?,
        };
        if self.cache_bust {
            let nonce = Uuid::new_v4().simple().to_string();
            url.query_pairs_mut().append_pair(CACHE_BUST_PARAM, &nonce);
        }
        Ok(url)
    }
}

impl SnapshotSource for HttpSource {
    async fn fetch(&self) -> Result<Snapshot, SnapshotError> {
        let url = self.request_url()?;
        debug!(%url, "fetching snapshot");

        let response = self
            .client
            .get(url)
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SnapshotError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        Snapshot::from_json(&body)
    }
}

/// Reads the snapshot from a local file (desktop builds).
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SnapshotSource for FileSource {
    async fn fetch(&self) -> Result<Snapshot, SnapshotError> {
        debug!(path = %self.path.display(), "reading snapshot");
        let body = std::fs::read_to_string(&self.path)?;
        Snapshot::from_json(&body)
    }
}

/// Source selected from a [`DashboardConfig`].
#[derive(Debug, Clone)]
pub enum ConfiguredSource {
    Http(HttpSource),
    #[cfg(not(target_arch = "wasm32"))]
    File(FileSource),
}

impl From<&DashboardConfig> for ConfiguredSource {
    fn from(config: &DashboardConfig) -> Self {
        match &config.source {
            SourceLocation::Http(url) => Self::Http(HttpSource::new(url.clone(), config.cache_bust)),
            #[cfg(not(target_arch = "wasm32"))]
            SourceLocation::File(path) => Self::File(FileSource::new(path.clone())),
        }
    }
}

impl SnapshotSource for ConfiguredSource {
    async fn fetch(&self) -> Result<Snapshot, SnapshotError> {
        match self {
            Self::Http(source) => source.fetch().await,
            #[cfg(not(target_arch = "wasm32"))]
            Self::File(source) => source.fetch().await,
        }
    }
}
