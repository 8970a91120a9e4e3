//! TOML configuration for the passcode widget and its host.

mod loader;
mod types;

pub use loader::{ConfigError, MAX_DIGIT_LENGTH};
pub use types::{AppearanceConfig, Config, LoggingConfig, PasscodeConfig, ShakeConfig, UiConfig};
