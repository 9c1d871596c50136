//! Color palettes for the light and dark themes

use crate::config::Theme;
use ratatui::style::{Color, Modifier, Style};

/// Colors every screen draws with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub subtext: Color,
    pub accent: Color,
    pub on_accent: Color,
    pub success: Color,
    pub error: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::Rgb(0xF5, 0xF9, 0xFF),
                surface: Color::Rgb(0xE3, 0xF2, 0xFD),
                text: Color::Rgb(0x0D, 0x47, 0xA1),
                subtext: Color::Rgb(0x19, 0x76, 0xD2),
                accent: Color::Rgb(0x19, 0x76, 0xD2),
                on_accent: Color::Rgb(0xFF, 0xFF, 0xFF),
                success: Color::Rgb(0x1F, 0xA9, 0x7C),
                error: Color::Rgb(0xE7, 0x4C, 0x3C),
            },
            Theme::Dark => Self {
                background: Color::Rgb(0x0A, 0x0E, 0x17),
                surface: Color::Rgb(0x1E, 0x29, 0x3B),
                text: Color::Rgb(0xE1, 0xF5, 0xFE),
                subtext: Color::Rgb(0xB3, 0xE5, 0xFC),
                accent: Color::Rgb(0x4F, 0xC3, 0xF7),
                on_accent: Color::Rgb(0x0A, 0x0E, 0x17),
                success: Color::Rgb(0x1F, 0xA9, 0x7C),
                error: Color::Rgb(0xE7, 0x4C, 0x3C),
            },
        }
    }

    /// Base style of a screen
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.text)
            .bg(self.background)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.subtext).bg(self.background)
    }

    pub fn highlight(&self) -> Style {
        Style::default().fg(self.on_accent).bg(self.accent)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.accent).bg(self.background)
    }

    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.background)
            .add_modifier(Modifier::BOLD)
    }
}

/// Parse a `#rrggbb` color identifier
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Goal color, or the accent when the identifier is not a hex color
pub fn goal_color(hex: &str, palette: &Palette) -> Color {
    parse_hex_color(hex).unwrap_or(palette.accent)
}
