//! Scoreboard configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How scores are written to stdout.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable scoreboard.
    #[default]
    Text,
    /// JSON score report.
    Json,
}

/// Configuration for the scoreboard front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ScoreboardConfig {
    /// Output format for score reports.
    #[serde(default)]
    format: OutputFormat,

    /// Abort on the first rejected roll instead of ignoring it.
    #[serde(default)]
    strict: bool,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for ScoreboardConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            strict: false,
            log_filter: default_log_filter(),
        }
    }
}

impl ScoreboardConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(format = %config.format, strict = config.strict, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Returns a copy with command-line overrides applied.
    pub fn with_overrides(mut self, format: Option<OutputFormat>, strict: bool) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        self.strict |= strict;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_keys() {
        let config: ScoreboardConfig = toml::from_str("strict = true").unwrap();
        assert_eq!(*config.format(), OutputFormat::Text);
        assert!(*config.strict());
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_overrides() {
        let config = ScoreboardConfig::default().with_overrides(Some(OutputFormat::Json), false);
        assert_eq!(*config.format(), OutputFormat::Json);
        assert!(!*config.strict());

        let config = config.with_overrides(None, true);
        assert_eq!(*config.format(), OutputFormat::Json);
        assert!(*config.strict());
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(toml::from_str::<ScoreboardConfig>("format = \"xml\"").is_err());
    }
}
