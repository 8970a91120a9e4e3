use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::level_filters::LevelFilter;

use crate::config::types::Config;
use crate::ui::theme::parse_color;

/// Largest digit length the row can lay out sensibly.
pub const MAX_DIGIT_LENGTH: usize = 32;

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
    /// `~/.config/passcode-tui/config.toml` on Linux, the platform
    /// equivalent elsewhere via `dirs::config_dir()`. Falls back to the
    /// current directory if there is no config dir.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("passcode-tui").join("config.toml")
    }

    /// Loads the default config file, or defaults if it doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Loads and validates a specific config file. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
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
    /// - digit length is at most [`MAX_DIGIT_LENGTH`]
    /// - colors parse
    /// - the mask glyph is visible
    /// - tick interval and shake count are positive
    /// - the log level is a level name or a filter directive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.passcode.digit_length > MAX_DIGIT_LENGTH {
            return Err(invalid(format!(
                "digit_length {} exceeds the maximum of {}",
                self.passcode.digit_length, MAX_DIGIT_LENGTH
            )));
        }

        let appearance = &self.appearance;
        for (field, value) in [
            ("text_color", &appearance.text_color),
            ("border_color", &appearance.border_color),
        ] {
            if let Some(value) = value {
                parse_color(value).map_err(|err| invalid(format!("{field}: {err}")))?;
            }
        }

        if appearance.mask_glyph.is_whitespace() || appearance.mask_glyph.is_control() {
            return Err(invalid("mask_glyph must be a visible character".to_string()));
        }

        if self.ui.tick_ms == 0 {
            return Err(invalid("tick_ms must be greater than 0".to_string()));
        }

        if self.shake.count == 0 {
            return Err(invalid("shake count must be greater than 0".to_string()));
        }

        let level = self.logging.level.trim();
        if level.parse::<LevelFilter>().is_err() && !level.contains('=') {
            return Err(invalid(format!("unknown log level '{}'", self.logging.level)));
        }

        Ok(())
    }
}

fn invalid(message: String) -> ConfigError {
    ConfigError::ValidationError { message }
}
