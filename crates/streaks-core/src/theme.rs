//! Color themes for the content card and streaks.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Color theme for the display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorTheme {
    #[default]
    Cyan,
    Green,
    White,
    Magenta,
    Yellow,
    Red,
    Blue,
}

impl ColorTheme {
    /// Convert theme to Ratatui Color.
    pub fn color(self) -> Color {
        match self {
            ColorTheme::Cyan => Color::Cyan,
            ColorTheme::Green => Color::Green,
            ColorTheme::White => Color::White,
            ColorTheme::Magenta => Color::Magenta,
            ColorTheme::Yellow => Color::Yellow,
            ColorTheme::Red => Color::Red,
            ColorTheme::Blue => Color::Blue,
        }
    }

    /// Base hue in degrees that streak colors are spread around.
    pub fn hue(self) -> f32 {
        match self {
            ColorTheme::Cyan => 185.0,
            ColorTheme::Green => 120.0,
            ColorTheme::White => 220.0,
            ColorTheme::Magenta => 300.0,
            ColorTheme::Yellow => 55.0,
            ColorTheme::Red => 0.0,
            ColorTheme::Blue => 230.0,
        }
    }

    /// Saturation for streak colors; white stays near grey.
    pub fn saturation(self) -> f32 {
        match self {
            ColorTheme::White => 0.1,
            _ => 0.7,
        }
    }
}
