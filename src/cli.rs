use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::passcode::KeyboardKind;
use crate::ui::theme::Appearance;

/// Passcode entry widget for the terminal.
#[derive(Debug, Parser)]
#[command(name = "passcode-tui", version)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of passcode digits
    #[arg(long, value_name = "N")]
    pub digits: Option<usize>,

    /// Keep typed digits visible instead of masking them
    #[arg(long)]
    pub insecure: bool,

    /// Accepted characters: number-pad or ascii
    #[arg(long, value_name = "KIND")]
    pub keyboard: Option<KeyboardKind>,

    /// Color scheme: dark or light
    #[arg(long, value_name = "THEME")]
    pub appearance: Option<Appearance>,

    /// Log level or filter directive (overrides the config file)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Layers command-line values over the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(digits) = self.digits {
            config.passcode.digit_length = digits;
        }
        if self.insecure {
            config.passcode.secure = false;
        }
        if let Some(keyboard) = self.keyboard {
            config.passcode.keyboard = keyboard;
        }
        if let Some(appearance) = self.appearance {
            config.appearance.keyboard_appearance = appearance;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "passcode-tui",
            "--digits",
            "6",
            "--insecure",
            "--keyboard",
            "ascii",
            "--appearance",
            "light",
            "--log-level",
            "debug",
        ]);
        let mut config = Config::default();
        cli.apply(&mut config);

        assert_eq!(config.passcode.digit_length, 6);
        assert!(!config.passcode.secure);
        assert_eq!(config.passcode.keyboard, KeyboardKind::Ascii);
        assert_eq!(config.appearance.keyboard_appearance, Appearance::Light);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn absent_flags_keep_config() {
        let cli = Cli::parse_from(["passcode-tui"]);
        let mut config = Config::default();
        config.passcode.digit_length = 5;
        cli.apply(&mut config);

        assert_eq!(config.passcode.digit_length, 5);
        assert!(config.passcode.secure);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn unknown_keyboard_is_rejected() {
        assert!(Cli::try_parse_from(["passcode-tui", "--keyboard", "qwerty"]).is_err());
    }
}
