//! Light/dark theme preference and where it is kept.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// The site's color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Holds the theme preference across sessions.
pub trait ThemeStore {
    /// The current preference.
    fn theme(&self) -> ThemeMode;

    /// Replace the preference. Storage failures are not reported.
    fn set_theme(&mut self, mode: ThemeMode);
}

/// Keeps the preference in memory only.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    mode: ThemeMode,
}

impl MemoryThemeStore {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn theme(&self) -> ThemeMode {
        self.mode
    }

    fn set_theme(&mut self, mode: ThemeMode) {
        self.mode = mode;
    }
}

/// On-disk layout of `state.toml`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SavedState {
    #[serde(default)]
    theme: Option<ThemeMode>,
}

/// Persists the preference to a small TOML file.
#[derive(Debug)]
pub struct FileThemeStore {
    path: PathBuf,
    mode: ThemeMode,
}

impl FileThemeStore {
    /// Open the store at `path`, reading any saved preference.
    ///
    /// A missing or unreadable file means light mode.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mode = match Self::read(&path) {
            Ok(mode) => mode,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring unreadable theme state");
                ThemeMode::default()
            }
        };
        debug!(path = %path.display(), theme = mode.as_str(), "Theme store opened");
        Self { path, mode }
    }

    /// Platform location of `state.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|d| d.join("quickswitch").join("state.toml"))
    }

    fn read(path: &Path) -> anyhow::Result<ThemeMode> {
        if !path.exists() {
            return Ok(ThemeMode::default());
        }
        let contents = fs::read_to_string(path)?;
        let state: SavedState = toml::from_str(&contents)?;
        Ok(state.theme.unwrap_or_default())
    }

    fn persist(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let state = SavedState {
            theme: Some(self.mode),
        };
        fs::write(&self.path, toml::to_string(&state)?)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}

impl ThemeStore for FileThemeStore {
    fn theme(&self) -> ThemeMode {
        self.mode
    }

    fn set_theme(&mut self, mode: ThemeMode) {
        self.mode = mode;
        if let Err(e) = self.persist() {
            warn!(error = %e, "Failed to persist theme preference");
        }
    }
}
