//! Site search configuration loaded from TOML.

use crate::error::{LoadError, read_file};
use crate::search::SearchOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Maximum number of result items rendered for one query.
const DEFAULT_MAX_ITEMS: usize = 200;

/// Quiet period before a search-as-you-type query runs.
const DEFAULT_DEBOUNCE_MS: u64 = 150;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub max_items: usize,
    pub debounce_ms: u64,
    pub search: SearchOptions,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            max_items: DEFAULT_MAX_ITEMS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            search: SearchOptions::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_toml(path: &Path, contents: &str) -> Result<Self, LoadError> {
        toml::from_str(contents).map_err(|source| LoadError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let contents = read_file(path)?;
        let config = Self::from_toml(path, &contents)?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, LoadError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                tracing::debug!("No configuration file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
