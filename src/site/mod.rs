//! Page-level collaborators shared by the overlays.
//!
//! The command palette, the navigation drawer and the page view all act on
//! the same [`Site`]: one scroll lock, one theme preference, one navigator,
//! one viewport and the header logo.

mod logo;
mod navigation;
mod pages;
mod scroll_lock;
mod theme_store;
mod viewport;

use std::time::Instant;

use tracing::{debug, info};

use crate::commands::{CommandTarget, Effect};

pub use logo::Logo;
pub use navigation::{is_site_link, Navigator, PageTransition, DEFAULT_TRANSITION_MS};
pub use pages::{SitePage, SitePages};
pub use scroll_lock::ScrollLock;
pub use theme_store::{FileThemeStore, MemoryThemeStore, ThemeMode, ThemeStore};
pub use viewport::Viewport;

/// Shared page state the overlays read and change.
pub struct Site {
    /// Background scroll suppression.
    pub scroll_lock: ScrollLock,
    /// Scroll position of the page view.
    pub viewport: Viewport,
    /// Header logo, kept in step with the theme.
    pub logo: Logo,
    theme_store: Box<dyn ThemeStore>,
    navigator: Box<dyn Navigator>,
}

impl Site {
    /// Create the site context. The logo starts on the stored theme.
    pub fn new(
        theme_store: Box<dyn ThemeStore>,
        navigator: Box<dyn Navigator>,
        mut logo: Logo,
    ) -> Self {
        logo.update(theme_store.theme());
        Self {
            scroll_lock: ScrollLock::new(),
            viewport: Viewport::new(),
            logo,
            theme_store,
            navigator,
        }
    }

    /// Current theme preference.
    pub fn theme(&self) -> ThemeMode {
        self.theme_store.theme()
    }

    /// Store `mode` and update everything that displays it.
    pub fn set_theme(&mut self, mode: ThemeMode) {
        self.theme_store.set_theme(mode);
        self.logo.update(mode);
    }

    /// Flip light/dark, persist the result and update the logo.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        let next = self.theme().toggled();
        self.set_theme(next);
        info!(theme = next.as_str(), "Theme toggled");
        next
    }

    /// Start navigating to `url`.
    pub fn navigate(&mut self, url: &str) {
        self.navigator.navigate(url);
    }

    /// URL whose transition has finished, if any.
    pub fn poll_navigation(&mut self, now: Instant) -> Option<String> {
        self.navigator.poll(now)
    }

    /// Where the running transition is heading.
    pub fn pending_navigation(&self) -> Option<&str> {
        self.navigator.pending_url()
    }

    /// Run a non-navigational effect.
    pub fn run_effect(&mut self, effect: Effect) {
        debug!(effect = effect.id(), "Running effect");
        match effect {
            Effect::ToggleTheme => {
                self.toggle_theme();
            }
            Effect::ScrollTop => self.viewport.scroll_to_top(),
        }
    }

    /// Carry out what a command targets.
    pub fn dispatch(&mut self, target: &CommandTarget) {
        match target {
            CommandTarget::Destination(url) => self.navigate(url),
            CommandTarget::Effect(effect) => self.run_effect(*effect),
        }
    }
}
