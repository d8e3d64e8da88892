//! Configuration management for the sample plugin
//!
//! Configuration only shapes diagnostics; it never changes the emitted record.
//! Sources are merged in order:
//! 1. Compiled defaults
//! 2. Config file given with `--config` (or `VPS_PLUGIN_CONFIG`)
//! 3. Environment variables

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Environment variable the host agent exports with the project name
pub const PROJECT_ENV_VAR: &str = "VPS_PROJECT_NAME";

/// Project name reported when the host did not export one
pub const FALLBACK_PROJECT: &str = "unknown_project";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
}

/// Diagnostic output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. "warn" or "sample_plugin=debug"
    pub level: String,
    /// Output format: text or json
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "text".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from all sources
    pub fn load(cli_config: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(path) = cli_config {
            config.merge_from_file(path)?;
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration from a file
    fn merge_from_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(format!("{}: {}", path.display(), e)))?;

        let file_config: Config = toml::from_str(&contents)
            .map_err(|e| ConfigError::Parse(format!("{}: {}", path.display(), e)))?;

        self.merge(file_config);
        Ok(())
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        let defaults = LoggingConfig::default();
        if other.logging.level != defaults.level {
            self.logging.level = other.logging.level;
        }
        if other.logging.format != defaults.format {
            self.logging.format = other.logging.format;
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var("VPS_PLUGIN_LOG") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("VPS_PLUGIN_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.logging.format.as_str() {
            "text" | "json" => {}
            other => {
                return Err(ConfigError::Invalid(format!(
                    "Invalid logging.format '{}'. Must be text or json",
                    other
                )));
            }
        }

        EnvFilter::try_new(&self.logging.level).map_err(|e| {
            ConfigError::Invalid(format!(
                "Invalid logging.level '{}': {}",
                self.logging.level, e
            ))
        })?;

        Ok(())
    }
}

/// Look up the project name exported by the host agent
pub fn project_name() -> String {
    project_name_from(std::env::var_os(PROJECT_ENV_VAR))
}

/// Resolve a raw environment lookup into a project name.
///
/// An exported but empty value is kept as-is; only an absent variable falls
/// back to [`FALLBACK_PROJECT`]. Bytes that are not valid UTF-8 are replaced
/// rather than rejected, so the record is still delivered.
fn project_name_from(raw: Option<OsString>) -> String {
    match raw {
        Some(name) => name.to_string_lossy().into_owned(),
        None => FALLBACK_PROJECT.to_string(),
    }
}
