use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which characters the widget accepts from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyboardKind {
    /// ASCII digits only.
    #[default]
    NumberPad,
    /// Any printable, non-whitespace character.
    Ascii,
}

impl KeyboardKind {
    pub fn accepts(&self, ch: char) -> bool {
        match self {
            Self::NumberPad => ch.is_ascii_digit(),
            Self::Ascii => !ch.is_control() && !ch.is_whitespace(),
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::NumberPad => Self::Ascii,
            Self::Ascii => Self::NumberPad,
        }
    }
}

impl fmt::Display for KeyboardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NumberPad => f.write_str("number-pad"),
            Self::Ascii => f.write_str("ascii"),
        }
    }
}

impl FromStr for KeyboardKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "number-pad" | "numberpad" | "numeric" => Ok(Self::NumberPad),
            "ascii" => Ok(Self::Ascii),
            other => Err(format!(
                "unknown keyboard kind '{other}' (expected number-pad or ascii)"
            )),
        }
    }
}
