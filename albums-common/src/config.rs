//! Configuration loading
//!
//! Resolution follows the same priority order for every setting:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! Arguments and environment variables are both parsed by the binary and
//! arrive here as [`ConfigOverrides`]; this module layers them over the file.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable naming the store connection string
pub const ENV_DATABASE_URL: &str = "ALBUMS_DATABASE_URL";
/// Environment variable naming the listen address
pub const ENV_BIND: &str = "ALBUMS_BIND";
/// Environment variable naming the TOML config file
pub const ENV_CONFIG: &str = "ALBUMS_CONFIG";

/// Config file looked up in the working directory when none is named
pub const DEFAULT_CONFIG_FILE: &str = "albums.toml";

/// Compiled fallback values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledDefaults {
    pub database_url: String,
    pub bind: String,
}

impl Default for CompiledDefaults {
    fn default() -> Self {
        Self {
            database_url: "sqlite://albums.db?mode=rwc".to_string(),
            bind: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Optional keys read from the TOML config file
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct TomlConfig {
    pub database_url: Option<String>,
    pub bind: Option<String>,
}

impl TomlConfig {
    /// Parse a config file
    ///
    /// A missing file is not an error and yields an empty config.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Config file not found: {}", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub database_url: Option<String>,
    pub bind: Option<String>,
    pub config_file: Option<PathBuf>,
}

/// Fully resolved service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// sqlx connection string for the store
    pub database_url: String,
    /// Socket address the HTTP listener binds to
    pub bind: String,
}

impl ServiceConfig {
    /// Resolve configuration from overrides, config file and compiled defaults
    pub fn resolve(overrides: ConfigOverrides) -> Result<Self> {
        let path = overrides
            .config_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        let file = TomlConfig::load(&path)?;

        let config = Self::merge(overrides, file, CompiledDefaults::default());
        info!("Configuration resolved (bind: {})", config.bind);
        Ok(config)
    }

    fn merge(overrides: ConfigOverrides, file: TomlConfig, defaults: CompiledDefaults) -> Self {
        Self {
            database_url: overrides
                .database_url
                .or(file.database_url)
                .unwrap_or(defaults.database_url),
            bind: overrides.bind.or(file.bind).unwrap_or(defaults.bind),
        }
    }
}
