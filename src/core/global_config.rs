//! Global configuration management
//!
//! Reads user-wide defaults from `config.toml` in the config directory:
//! goals and build executable, the default group id, and the SCM policy
//! for untracked files.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::infra::dirs::ReactorDirs;

/// Global configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file '{path}': {error}")]
    Read { path: String, error: String },

    /// Failed to parse config file
    #[error("Failed to parse config file '{path}': {error}")]
    Parse { path: String, error: String },
}

/// Global configuration for reactor
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Build invocation defaults
    #[serde(default)]
    pub build: BuildConfig,

    /// Coordinate defaults
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// SCM defaults
    #[serde(default)]
    pub scm: ScmConfig,
}

/// `[build]` table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Comma-separated goals
    pub goals: Option<String>,

    /// Build tool executable
    pub executable: Option<String>,
}

/// `[defaults]` table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default group id
    pub group: Option<String>,
}

/// `[scm]` table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScmConfig {
    /// Treat untracked files as changes
    pub include_unknown: Option<bool>,
}

impl GlobalConfig {
    /// Load global configuration from the config directory
    pub fn load(dirs: &ReactorDirs) -> Result<Self, ConfigError> {
        Self::load_from_path(&dirs.global_config_path())
    }

    /// Load global configuration from a specific path
    ///
    /// If the file doesn't exist, returns the default configuration.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        let config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        tracing::debug!("Loaded global config from {}", path.display());
        Ok(config)
    }
}
