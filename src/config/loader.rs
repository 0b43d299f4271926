use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::ui::deep_link::{DeepLinkAdapter, DeepLinkTarget};

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/scene-nav/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("scene-nav").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The deep-link scheme is a valid URL scheme
    /// - The deep-link fallback names a known target
    /// - Store limits are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scheme = &self.deep_link.scheme;
        let mut chars = scheme.chars();
        let valid_scheme = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        if !valid_scheme {
            return Err(ConfigError::ValidationError {
                message: format!("Invalid deep link scheme '{}'", scheme),
            });
        }

        self.fallback_target()?;

        if self.store.max_follow_ups == 0 {
            return Err(ConfigError::ValidationError {
                message: "store.max_follow_ups must be at least 1".to_string(),
            });
        }
        if self.store.diagnostics_capacity == 0 {
            return Err(ConfigError::ValidationError {
                message: "store.diagnostics_capacity must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    /// Builds the deep-link adapter described by `[deep_link]`.
    pub fn deep_link_adapter(&self) -> Result<DeepLinkAdapter, ConfigError> {
        Ok(DeepLinkAdapter::new(
            self.deep_link.scheme.clone(),
            self.fallback_target()?,
        ))
    }

    fn fallback_target(&self) -> Result<DeepLinkTarget, ConfigError> {
        self.deep_link
            .fallback
            .parse()
            .map_err(|e| ConfigError::ValidationError {
                message: format!("Invalid deep link fallback: {}", e),
            })
    }
}
