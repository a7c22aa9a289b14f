//! Configuration sections.

use serde::{Deserialize, Serialize};

use crate::site::DEFAULT_TRANSITION_MS;
use crate::ui::DEFAULT_ROTATION_MS;

/// `[site]`: identity and link handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    /// Name shown next to the logo mark.
    pub name: String,
    /// Public address of the site, used when opening pages in a browser.
    pub base_url: Option<String>,
    /// Also open loaded pages in the system browser.
    pub open_in_browser: bool,
    /// Page shown at startup.
    pub start_page: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            name: "studio".to_string(),
            base_url: None,
            open_in_browser: false,
            start_page: "/".to_string(),
        }
    }
}

/// `[palette]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteSettings {
    /// When false the quick switcher is not available at all.
    pub enabled: bool,
}

impl Default for PaletteSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// `[transition]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionSettings {
    /// Delay between starting a navigation and loading the page. 0 disables
    /// the transition.
    pub duration_ms: u64,
}

impl Default for TransitionSettings {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_TRANSITION_MS,
        }
    }
}

/// `[tagline]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaglineSettings {
    pub words: Vec<String>,
    pub interval_ms: u64,
}

impl Default for TaglineSettings {
    fn default() -> Self {
        Self {
            words: vec![
                "websites".to_string(),
                "brands".to_string(),
                "products".to_string(),
            ],
            interval_ms: DEFAULT_ROTATION_MS,
        }
    }
}
