//! Directory configuration.
//!
//! Every field has a default, so an empty TOML document is a valid config:
//!
//! ```toml
//! latency_ms = 250
//! storage_key = "contacts"
//! seed = "empty"
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::record::SeedPolicy;
use crate::store::DEFAULT_STORAGE_KEY;

/// Latency applied before every directory operation unless overridden.
pub const DEFAULT_LATENCY_MS: u64 = 1000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Synthetic round-trip delay, in milliseconds.
    pub latency_ms: u64,
    /// Key of the blob holding the collection.
    pub storage_key: String,
    pub seed: SeedPolicy,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            latency_ms: DEFAULT_LATENCY_MS,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            seed: SeedPolicy::Default,
        }
    }
}

impl DirectoryConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}
