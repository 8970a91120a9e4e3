//! File logging via `tracing-subscriber`.
//!
//! The terminal belongs to the UI, so events go to a log file instead of
//! stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Environment variable that overrides the configured filter.
pub const LOG_ENV_VAR: &str = "PASSCODE_TUI_LOG";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to create log directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open log file '{path}': {source}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid log filter '{filter}': {source}")]
    Filter {
        filter: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to install log subscriber: {message}")]
    Install { message: String },
}

/// `<state dir>/passcode-tui/passcode-tui.log`, or the cache dir on platforms
/// without a state dir.
pub fn default_log_path() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("passcode-tui")
        .join("passcode-tui.log")
}

/// Filter from [`LOG_ENV_VAR`] if set, otherwise from `level`.
pub fn build_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV_VAR) {
        return Ok(filter);
    }
    EnvFilter::try_new(level).map_err(|source| LoggingError::Filter {
        filter: level.to_string(),
        source,
    })
}

/// Installs the global subscriber. Returns the log file path, or `None` when
/// logging is off.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>, LoggingError> {
    let env_set = std::env::var_os(LOG_ENV_VAR).is_some();
    if !env_set && config.level.trim().eq_ignore_ascii_case("off") {
        return Ok(None);
    }

    let filter = build_filter(&config.level)?;
    let path = config.file.clone().unwrap_or_else(default_log_path);
    let file = open_log_file(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| LoggingError::Install {
            message: err.to_string(),
        })?;

    Ok(Some(path))
}

fn open_log_file(path: &Path) -> Result<fs::File, LoggingError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| LoggingError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::OpenFile {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_ends_in_app_dir() {
        let path = default_log_path();
        assert!(path.ends_with("passcode-tui/passcode-tui.log"));
    }

    #[test]
    fn opening_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("app.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn directive_filters_parse() {
        assert!(EnvFilter::try_new("passcode_tui=trace,warn").is_ok());
    }
}
