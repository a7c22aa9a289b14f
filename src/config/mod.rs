//! Configuration management for quickswitch.
//!
//! This module handles loading, saving, and validating `config.toml`, which
//! describes the site: its name, pages, palette commands and timings.

mod settings;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::commands::{CommandEntry, CommandRegistry, RegistryError};
use crate::site::{SitePage, SitePages};

pub use settings::{PaletteSettings, SiteSettings, TaglineSettings, TransitionSettings};

/// Errors that can occur while handling configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine the configuration directory")]
    NoConfigDir,

    #[error("failed to create configuration directory: {0}")]
    CreateDirError(#[source] std::io::Error),

    #[error("failed to read configuration file: {0}")]
    ReadError(#[source] std::io::Error),

    #[error("failed to write configuration file: {0}")]
    WriteError(#[source] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("failed to serialize configuration: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("{0}")]
    ValidationError(String),
}

impl From<RegistryError> for ConfigError {
    fn from(err: RegistryError) -> Self {
        ConfigError::ValidationError(err.to_string())
    }
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// The full configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteSettings,
    pub palette: PaletteSettings,
    pub transition: TransitionSettings,
    pub tagline: TaglineSettings,
    /// Replaces the built-in palette commands when non-empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<CommandEntry>,
    /// Replaces the built-in pages when non-empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<SitePage>,
}

impl Config {
    /// Directory holding `config.toml`.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join("quickswitch"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Default location of `config.toml`.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load the configuration from the default location.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load and validate the configuration at `path`.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        info!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Write the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::CreateDirError)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(ConfigError::WriteError)?;
        debug!(path = %path.display(), "Configuration saved");
        Ok(())
    }

    /// Check the configuration for mistakes.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::ValidationError` describing the first problem.
    pub fn validate(&self) -> Result<()> {
        self.registry()?;

        if let Some(url) = &self.site.base_url {
            if !url.starts_with("https://") && !url.starts_with("http://") {
                return Err(ConfigError::ValidationError(format!(
                    "site.base_url '{}' must start with http:// or https://",
                    url
                )));
            }
        }

        if !self.site.start_page.starts_with('/') {
            return Err(ConfigError::ValidationError(format!(
                "site.start_page '{}' must start with /",
                self.site.start_page
            )));
        }

        for (idx, page) in self.pages.iter().enumerate() {
            if !page.path.starts_with('/') {
                return Err(ConfigError::ValidationError(format!(
                    "page '{}': path must start with /",
                    page.path
                )));
            }
            if page.title.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "page '{}': title cannot be empty",
                    page.path
                )));
            }
            if self.pages[..idx].iter().any(|p| p.path == page.path) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate page path '{}'",
                    page.path
                )));
            }
        }

        if self.tagline.words.len() > 1 && self.tagline.interval_ms == 0 {
            return Err(ConfigError::ValidationError(
                "tagline.interval_ms must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// The palette commands: configured ones, or the built-in set.
    pub fn registry(&self) -> Result<CommandRegistry> {
        if self.commands.is_empty() {
            Ok(CommandRegistry::new())
        } else {
            Ok(CommandRegistry::from_entries(&self.commands)?)
        }
    }

    /// The site pages: configured ones, or the built-in set.
    pub fn site_pages(&self) -> SitePages {
        if self.pages.is_empty() {
            SitePages::default()
        } else {
            SitePages::new(self.pages.clone())
        }
    }

    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition.duration_ms)
    }

    pub fn tagline_interval(&self) -> Duration {
        Duration::from_millis(self.tagline.interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Effect;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(config.palette.enabled);
        assert_eq!(config.transition_duration(), Duration::from_millis(600));
        assert_eq!(config.registry().unwrap().commands().len(), 6);
        assert_eq!(config.site_pages().pages().len(), 4);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [site]
            name = "acme"

            [transition]
            duration_ms = 0
            "#,
        )
        .unwrap();

        assert_eq!(config.site.name, "acme");
        assert_eq!(config.site.start_page, "/");
        assert_eq!(config.transition_duration(), Duration::ZERO);
        assert!(config.palette.enabled);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quickswitch").join("config.toml");

        let mut config = Config::default();
        config.site.base_url = Some("https://studio.example".to_string());
        config.commands = vec![CommandEntry {
            title: "Top".to_string(),
            action: Some(Effect::ScrollTop),
            ..Default::default()
        }];
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_from_rejects_invalid_command() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
            [[commands]]
            title = "Broken"
            "#,
        )
        .unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("needs either a url or an action"));
    }

    #[test]
    fn test_load_from_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[site\nname = ").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            Config::load_from(&dir.path().join("absent.toml")),
            Err(ConfigError::ReadError(_))
        ));
    }

    #[test]
    fn test_validate_base_url() {
        let mut config = Config::default();
        config.site.base_url = Some("studio.example".to_string());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("must start with http"));
    }

    #[test]
    fn test_validate_duplicate_pages() {
        let mut config = Config::default();
        config.pages = vec![
            SitePage::new("/", "Home", &[]),
            SitePage::new("/", "Also home", &[]),
        ];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate page path"));
    }

    #[test]
    fn test_validate_tagline_interval() {
        let mut config = Config::default();
        config.tagline.interval_ms = 0;
        assert!(config.validate().is_err());

        config.tagline.words = vec!["one".to_string()];
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_load_without_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let previous = std::env::var_os("XDG_CONFIG_HOME");
        std::env::set_var("XDG_CONFIG_HOME", dir.path());

        let result = Config::load();

        match previous {
            Some(value) => std::env::set_var("XDG_CONFIG_HOME", value),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
        assert_eq!(result.unwrap(), Config::default());
    }
}
