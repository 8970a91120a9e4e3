use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

pub const ACCENT: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);

/// Light or dark rendering of the widget and its chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Appearance {
    #[default]
    Dark,
    Light,
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dark => f.write_str("dark"),
            Self::Light => f.write_str("light"),
        }
    }
}

impl FromStr for Appearance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(format!(
                "unknown appearance '{other}' (expected dark or light)"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub border: Color,
    pub chrome: Color,
    pub muted: Color,
}

impl Palette {
    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Dark => Self {
                background: Color::Rgb(0x17, 0x17, 0x17),
                text: Color::Rgb(0xe5, 0xe5, 0xe5),
                border: Color::Rgb(0x6b, 0x72, 0x80),
                chrome: Color::Rgb(0x40, 0x40, 0x40),
                muted: Color::Rgb(0x9c, 0xa3, 0xaf),
            },
            Appearance::Light => Self {
                background: Color::Rgb(0xfa, 0xfa, 0xfa),
                text: Color::DarkGray,
                border: Color::DarkGray,
                chrome: Color::Rgb(0xd4, 0xd4, 0xd4),
                muted: Color::Rgb(0x6b, 0x72, 0x80),
            },
        }
    }

    /// Replaces the text and border colors with user overrides.
    pub fn with_overrides(mut self, text: Option<Color>, border: Option<Color>) -> Self {
        if let Some(text) = text {
            self.text = text;
        }
        if let Some(border) = border {
            self.border = border;
        }
        self
    }
}

/// Parses a color name (`darkgray`), index (`8`) or hex value (`#a9a9a9`).
pub fn parse_color(value: &str) -> Result<Color, String> {
    Color::from_str(value.trim()).map_err(|_| format!("invalid color '{value}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_and_hex_colors() {
        assert_eq!(parse_color("darkgray"), Ok(Color::DarkGray));
        assert_eq!(parse_color(" #ff0000 "), Ok(Color::Rgb(0xff, 0, 0)));
        assert!(parse_color("not-a-color").is_err());
    }

    #[test]
    fn overrides_replace_only_given_colors() {
        let base = Palette::for_appearance(Appearance::Dark);
        let palette = base.with_overrides(Some(Color::Red), None);
        assert_eq!(palette.text, Color::Red);
        assert_eq!(palette.border, base.border);
    }

    #[test]
    fn appearance_round_trips_through_display() {
        for appearance in [Appearance::Dark, Appearance::Light] {
            assert_eq!(appearance.to_string().parse(), Ok(appearance));
        }
    }
}
