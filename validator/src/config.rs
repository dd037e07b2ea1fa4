//! Validator configuration.

use serde::Deserialize;
use thiserror::Error;

/// Default traversal depth limit.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Settings shared by every run of a validator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Path prefix for every violation of a run.
    pub root_path: String,
    /// Deepest node the traversal will visit before aborting.
    pub max_depth: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            root_path: String::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ValidatorConfig {
    /// Parse a configuration from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: ValidatorConfig = toml::from_str(source)?;
        config.check()?;
        Ok(config)
    }

    pub fn with_root_path(mut self, root_path: impl Into<String>) -> Self {
        self.root_path = root_path.into();
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(())
    }
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("max_depth must be at least 1")]
    ZeroDepth,
}
