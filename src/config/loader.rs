use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::HandlerConfig;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config from {origin}: {source}")]
    ParseError {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl HandlerConfig {
    /// Parses and validates a TOML document.
    ///
    /// Missing keys fall back to their defaults, so an empty document yields
    /// `HandlerConfig::default()`.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, "inline TOML".to_string())
    }

    /// Loads configuration from a TOML file.
    ///
    /// - If the file doesn't exist, returns `HandlerConfig::default()`.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(HandlerConfig::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content, format!("'{}'", path.display()))
    }

    fn parse(content: &str, origin: String) -> Result<Self, ConfigError> {
        let config: HandlerConfig = toml::from_str(content)
            .map_err(|e| ConfigError::ParseError { origin, source: e })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The intake delay is non-zero, so a command is never folded inline
    ///   with the `send` that queued it
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.intake_delay_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "intake_delay_ms must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}
