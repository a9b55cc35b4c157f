//! Color theme.

use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub focus_style: Style,
    pub default_badge_style: Style,
    pub dimmed_style: Style,
    pub danger_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color(Color::Blue)
    }
}

impl Theme {
    /// Builds a theme from a color name or hex code, falling back to blue.
    #[must_use]
    pub fn new(accent_color: &str) -> Self {
        Self::from_color(parse_color(accent_color))
    }

    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        Self {
            accent,
            focus_style: Style::default()
                .fg(Color::Black)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
            default_badge_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            dimmed_style: Style::default().fg(Color::DarkGray),
            danger_style: Style::default().fg(Color::Red),
        }
    }
}

fn parse_color(s: &str) -> Color {
    Color::from_str(s).unwrap_or_else(|_| {
        tracing::warn!(color = %s, "Unknown accent color, using blue");
        Color::Blue
    })
}
