//! Calculator configuration
//!
//! Loaded from an optional YAML file:
//!
//! ```yaml
//! history_limit: 20
//! theme: dark
//! ```

use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// History must keep at least one entry
    #[error("Invalid history limit: {0} (must be at least 1)")]
    InvalidHistoryLimit(usize),

    /// Config file could not be read
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        /// Path that was read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid YAML for this schema
    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_yaml_ng::Error),
}

/// Calculator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Maximum number of history entries
    pub history_limit: usize,
    /// Initial theme
    pub theme: Theme,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            history_limit: crate::core::history::History::DEFAULT_LIMIT,
            theme: Theme::Light,
        }
    }
}

impl CalculatorConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set history limit
    #[must_use]
    pub const fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Set theme
    #[must_use]
    pub const fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Checks value ranges
    pub fn validate(&self) -> ConfigResult<()> {
        if self.history_limit == 0 {
            return Err(ConfigError::InvalidHistoryLimit(self.history_limit));
        }
        Ok(())
    }

    /// Parses and validates YAML text
    pub fn from_yaml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = serde_yaml_ng::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}
