//! Engine configuration loaded from TOML.
//!
//! ```toml
//! depth = 3
//! variant = "plain"     # or "king-capture"
//! parallel = false
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::search::{SearchOptions, SearchVariant};

/// Errors raised while reading an engine configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid engine config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Search settings. Missing keys take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub depth: u8,
    pub variant: SearchVariant,
    pub parallel: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            variant: SearchVariant::Plain,
            parallel: false,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn options(&self) -> SearchOptions {
        SearchOptions {
            depth: self.depth,
            variant: self.variant,
            parallel: self.parallel,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
