//! Navigation between pages, with a short transition before each load.

use std::time::{Duration, Instant};

use tracing::{debug, trace};

/// Default time between starting a transition and loading the page.
pub const DEFAULT_TRANSITION_MS: u64 = 600;

/// Moves the site to another URL.
pub trait Navigator {
    /// Start navigating to `url`. Never fails from the caller's side.
    fn navigate(&mut self, url: &str);

    /// The URL to load now, if a navigation has finished its transition.
    fn poll(&mut self, _now: Instant) -> Option<String> {
        None
    }

    /// URL of the navigation whose transition is still running.
    fn pending_url(&self) -> Option<&str> {
        None
    }
}

/// A navigation waiting for its transition to end.
#[derive(Debug, Clone)]
struct PendingNavigation {
    url: String,
    due: Instant,
}

/// Navigator that plays a page transition and then hands out the URL.
#[derive(Debug)]
pub struct PageTransition {
    duration: Duration,
    pending: Option<PendingNavigation>,
}

impl PageTransition {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            pending: None,
        }
    }

    fn start(&mut self, url: &str, now: Instant) {
        debug!(url, delay_ms = self.duration.as_millis() as u64, "Starting page transition");
        self.pending = Some(PendingNavigation {
            url: url.to_string(),
            due: now + self.duration,
        });
    }
}

impl Default for PageTransition {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_TRANSITION_MS))
    }
}

impl Navigator for PageTransition {
    fn navigate(&mut self, url: &str) {
        self.start(url, Instant::now());
    }

    fn poll(&mut self, now: Instant) -> Option<String> {
        if !self.pending.as_ref().is_some_and(|p| now >= p.due) {
            return None;
        }
        let url = self.pending.take().map(|p| p.url);
        trace!(url = ?url, "Page transition finished");
        url
    }

    fn pending_url(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.url.as_str())
    }
}

/// Whether `url` points at a page of this site.
///
/// Site pages start with a single `/` or end in `.html`; protocol-relative
/// and `mailto:` links go elsewhere.
pub fn is_site_link(url: &str) -> bool {
    !url.starts_with("//")
        && !url.starts_with("mailto:")
        && (url.starts_with('/') || url.ends_with(".html"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_waits_for_duration() {
        let mut nav = PageTransition::new(Duration::from_millis(600));
        let start = Instant::now();
        nav.start("/pages/work.html", start);

        assert_eq!(nav.pending_url(), Some("/pages/work.html"));
        assert_eq!(nav.poll(start + Duration::from_millis(599)), None);
        assert_eq!(
            nav.poll(start + Duration::from_millis(600)),
            Some("/pages/work.html".to_string())
        );
        assert_eq!(nav.pending_url(), None);
        assert_eq!(nav.poll(start + Duration::from_secs(5)), None);
    }

    #[test]
    fn test_zero_duration_transition() {
        let mut nav = PageTransition::new(Duration::ZERO);
        nav.navigate("/");
        assert_eq!(nav.poll(Instant::now()), Some("/".to_string()));
    }

    #[test]
    fn test_new_navigation_replaces_pending() {
        let mut nav = PageTransition::new(Duration::from_millis(100));
        let start = Instant::now();
        nav.start("/pages/work.html", start);
        nav.start("/pages/contact.html", start);

        assert_eq!(nav.pending_url(), Some("/pages/contact.html"));
        assert_eq!(
            nav.poll(start + Duration::from_millis(100)),
            Some("/pages/contact.html".to_string())
        );
    }

    #[test]
    fn test_default_duration() {
        let nav = PageTransition::default();
        assert_eq!(nav.duration, Duration::from_millis(DEFAULT_TRANSITION_MS));
        assert!(nav.pending_url().is_none());
    }

    #[test]
    fn test_is_site_link() {
        assert!(is_site_link("/"));
        assert!(is_site_link("/pages/services.html"));
        assert!(is_site_link("about.html"));
        assert!(!is_site_link("//cdn.example.com/app.js"));
        assert!(!is_site_link("mailto:hello@example.com"));
        assert!(!is_site_link("https://example.com"));
    }
}
