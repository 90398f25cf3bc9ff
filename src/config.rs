//! Host configuration, optionally loaded from a TOML file.
//!
//! ```toml
//! log_filter = "artist_search=debug,spotify_search=debug"
//!
//! [search]
//! target_side = 300
//! market = "GB"
//! ```

use crate::error::{HostError, Result};
use serde::{Deserialize, Serialize};
use spotify_search::SearchConfig;
use std::path::Path;

/// Tracing filter used when neither `RUST_LOG` nor the config file sets one.
pub const DEFAULT_LOG_FILTER: &str = "artist_search=info,spotify_search=info";

/// Top-level host configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Search gateway and projection settings.
    pub search: SearchConfig,
    /// `tracing-subscriber` filter directive.
    pub log_filter: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl HostConfig {
    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Config`] on parse or validation failure.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| HostError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults.
    ///
    /// # Errors
    ///
    /// Same as [`HostConfig::from_file`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Validates the search settings and the log filter.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Config`] describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.log_filter.trim().is_empty() {
            return Err(HostError::Config("log_filter must not be empty".into()));
        }
        self.search
            .validate()
            .map_err(|e| HostError::Config(e.to_string()))
    }
}
