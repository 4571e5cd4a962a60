//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::RouterConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::routing::error::{join_errors, TableError};

/// Environment variable holding the deployment base path.
pub const BASE_URL_ENV: &str = "BASE_URL";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    #[error("Invalid route table: {}", join_errors(.0))]
    Table(Vec<TableError>),
}

/// Values that replace what the config file says.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
}

impl ConfigOverrides {
    /// Overrides taken from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Overrides taken from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            base_url: lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()),
        }
    }

    /// Layer `other` on top of `self`; values set in `other` win.
    pub fn merge(self, other: ConfigOverrides) -> Self {
        Self {
            base_url: other.base_url.or(self.base_url),
        }
    }

    pub fn apply(&self, config: &mut RouterConfig) {
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
    }
}

/// Read and deserialize a TOML file without semantic checks.
pub fn parse_config(path: &Path) -> Result<RouterConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RouterConfig, ConfigError> {
    load_with_overrides(path, &ConfigOverrides::default())
}

/// Load a config file, apply overrides, then validate the result.
///
/// Overridden fields are never validated in their file form.
pub fn load_with_overrides(
    path: &Path,
    overrides: &ConfigOverrides,
) -> Result<RouterConfig, ConfigError> {
    let mut config = parse_config(path)?;
    overrides.apply(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
