//! Header logo that follows the theme.

use super::ThemeMode;

/// The site logo, with one variant per theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logo {
    light: String,
    dark: String,
    mode: ThemeMode,
}

impl Logo {
    pub fn new(light: impl Into<String>, dark: impl Into<String>) -> Self {
        Self {
            light: light.into(),
            dark: dark.into(),
            mode: ThemeMode::Light,
        }
    }

    /// Swap to the variant for `mode`.
    pub fn update(&mut self, mode: ThemeMode) {
        self.mode = mode;
    }

    /// The variant currently shown.
    pub fn current(&self) -> &str {
        match self.mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

impl Default for Logo {
    fn default() -> Self {
        Self::new("◇ studio", "◆ studio")
    }
}
