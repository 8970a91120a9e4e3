use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::passcode::{
    KeyboardKind, ShakeParams, DEFAULT_MASK_DELAY, DEFAULT_SHAKE_COUNT, DEFAULT_SHAKE_DURATION,
    DEFAULT_SHAKE_TRANSLATION,
};
use crate::ui::slot_row::DEFAULT_MASK_GLYPH;
use crate::ui::theme::Appearance;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub passcode: PasscodeConfig,
    #[serde(default)]
    pub appearance: AppearanceConfig,
    #[serde(default)]
    pub shake: ShakeConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Entry behavior of the widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasscodeConfig {
    /// Number of slots (default: 4).
    #[serde(default = "default_digit_length")]
    pub digit_length: usize,
    /// Mask digits shortly after they are typed (default: true).
    #[serde(default = "default_secure")]
    pub secure: bool,
    /// How long a typed digit stays readable, in milliseconds (default: 200).
    #[serde(default = "default_mask_delay_ms")]
    pub mask_delay_ms: u64,
    /// Accepted characters: "number-pad" or "ascii" (default: number-pad).
    #[serde(default)]
    pub keyboard: KeyboardKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppearanceConfig {
    /// "dark" or "light" (default: dark).
    #[serde(default)]
    pub keyboard_appearance: Appearance,
    /// Digit color; falls back to the appearance palette.
    #[serde(default)]
    pub text_color: Option<String>,
    /// Underline color; falls back to the appearance palette.
    #[serde(default)]
    pub border_color: Option<String>,
    #[serde(default = "default_mask_glyph")]
    pub mask_glyph: char,
}

/// Defaults for the rejection shake.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShakeConfig {
    #[serde(default = "default_shake_count")]
    pub count: u32,
    /// Length of one oscillation in milliseconds (default: 100).
    #[serde(default = "default_shake_duration_ms")]
    pub duration_ms: u64,
    /// Peak displacement in layout units, 10 per terminal column (default: 30).
    #[serde(default = "default_shake_translation")]
    pub translation: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw interval in milliseconds (default: 33).
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level or filter directive, e.g. "debug" or "passcode_tui=trace".
    /// "off" disables the log file.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path; defaults to the platform state directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_digit_length() -> usize {
    4
}

fn default_secure() -> bool {
    true
}

fn default_mask_delay_ms() -> u64 {
    DEFAULT_MASK_DELAY.as_millis() as u64
}

fn default_mask_glyph() -> char {
    DEFAULT_MASK_GLYPH
}

fn default_shake_count() -> u32 {
    DEFAULT_SHAKE_COUNT
}

fn default_shake_duration_ms() -> u64 {
    DEFAULT_SHAKE_DURATION.as_millis() as u64
}

fn default_shake_translation() -> f32 {
    DEFAULT_SHAKE_TRANSLATION
}

fn default_tick_ms() -> u64 {
    33
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ShakeConfig {
    pub fn params(&self) -> ShakeParams {
        ShakeParams::default()
            .with_count(self.count)
            .with_duration(Duration::from_millis(self.duration_ms))
            .with_translation(self.translation)
    }
}

impl Default for PasscodeConfig {
    fn default() -> Self {
        Self {
            digit_length: default_digit_length(),
            secure: default_secure(),
            mask_delay_ms: default_mask_delay_ms(),
            keyboard: KeyboardKind::default(),
        }
    }
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            keyboard_appearance: Appearance::default(),
            text_color: None,
            border_color: None,
            mask_glyph: default_mask_glyph(),
        }
    }
}

impl Default for ShakeConfig {
    fn default() -> Self {
        Self {
            count: default_shake_count(),
            duration_ms: default_shake_duration_ms(),
            translation: default_shake_translation(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
