//! Theme and styling configuration.

use ratatui::style::{Color, Modifier, Style};

use crate::site::ThemeMode;

/// Color theme for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Primary foreground color.
    pub fg: Color,
    /// Primary background color.
    pub bg: Color,
    /// Accent used for the logo, borders and the selection marker.
    pub accent: Color,
    /// Secondary text such as subtitles and hints.
    pub muted: Color,
    /// Background of the highlighted palette entry.
    pub highlight: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            fg: Color::Black,
            bg: Color::White,
            accent: Color::Blue,
            muted: Color::Gray,
            highlight: Color::Rgb(225, 230, 240),
        }
    }

    pub fn dark() -> Self {
        Self {
            fg: Color::White,
            bg: Color::Black,
            accent: Color::Cyan,
            muted: Color::DarkGray,
            highlight: Color::Rgb(40, 44, 52),
        }
    }

    /// Colors for `mode`.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.fg).add_modifier(Modifier::BOLD)
    }

    pub fn selected(&self) -> Style {
        Style::default().bg(self.highlight)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
