//! Dashboard configuration supplied by each launcher through context.

use serde::{Deserialize, Serialize};

/// Relative location of the snapshot next to the hosting page or app resources.
pub const DEFAULT_SNAPSHOT: &str = "probabilities.json";

/// Where the snapshot document comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceLocation {
    /// Absolute URL, or (on the web) a URL relative to the current page.
    Http(String),
    /// Local file; only available outside the browser.
    #[cfg(not(target_arch = "wasm32"))]
    File(std::path::PathBuf),
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::Http(DEFAULT_SNAPSHOT.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub source: SourceLocation,
    /// Append a unique query parameter so intermediary caches never answer the fetch.
    pub cache_bust: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            source: SourceLocation::default(),
            cache_bust: true,
        }
    }
}

impl DashboardConfig {
    pub fn with_source(source: SourceLocation) -> Self {
        Self {
            source,
            ..Self::default()
        }
    }
}
