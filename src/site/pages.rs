//! The site's pages.

use serde::{Deserialize, Serialize};

/// One page of the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitePage {
    /// URL path, e.g. `/pages/work.html`.
    pub path: String,
    /// Title shown in the header and the navigation drawer.
    pub title: String,
    /// Body text, one entry per line.
    #[serde(default)]
    pub body: Vec<String>,
}

impl SitePage {
    pub fn new(path: impl Into<String>, title: impl Into<String>, body: &[&str]) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            body: body.iter().map(|l| l.to_string()).collect(),
        }
    }

    /// Page shown for paths the site does not have.
    pub fn not_found(path: &str) -> Self {
        Self {
            path: path.to_string(),
            title: "Page not found".to_string(),
            body: vec![
                String::new(),
                format!("Nothing lives at {}.", path),
                String::new(),
                "Press Ctrl+K to jump somewhere else.".to_string(),
            ],
        }
    }
}

/// The pages the site serves, in navigation order.
#[derive(Debug, Clone)]
pub struct SitePages {
    pages: Vec<SitePage>,
}

impl SitePages {
    pub fn new(pages: Vec<SitePage>) -> Self {
        Self { pages }
    }

    /// Find a page by path. `/index.html` is the same page as `/`.
    pub fn find(&self, path: &str) -> Option<&SitePage> {
        let path = match path {
            "/index.html" | "index.html" => "/",
            other => other,
        };
        self.pages.iter().find(|p| p.path == path)
    }

    /// The page for `path`, or a not-found page.
    pub fn resolve(&self, path: &str) -> SitePage {
        self.find(path)
            .cloned()
            .unwrap_or_else(|| SitePage::not_found(path))
    }

    pub fn pages(&self) -> &[SitePage] {
        &self.pages
    }
}

impl Default for SitePages {
    fn default() -> Self {
        Self::new(vec![
            SitePage::new(
                "/",
                "Home",
                &[
                    "We design and build websites that feel alive.",
                    "",
                    "Small studio. Sharp type. Fast pages.",
                    "",
                    "Selected clients",
                    "  Northwind Coffee, Halcyon Labs, Brightside Clinics",
                    "",
                    "Open the quick switcher with Ctrl+K to get around.",
                ],
            ),
            SitePage::new(
                "/pages/services.html",
                "Services",
                &[
                    "What we do",
                    "",
                    "  Brand identity and art direction",
                    "  Marketing sites and landing pages",
                    "  Design systems",
                    "  Performance and accessibility audits",
                ],
            ),
            SitePage::new(
                "/pages/work.html",
                "Work",
                &[
                    "Our projects",
                    "",
                    "  Northwind Coffee: e-commerce relaunch",
                    "  Halcyon Labs: product site and docs",
                    "  Brightside Clinics: booking flow redesign",
                    "  Fieldnotes: editorial magazine",
                ],
            ),
            SitePage::new(
                "/pages/contact.html",
                "Contact",
                &[
                    "Get a quote",
                    "",
                    "Tell us about your project and we will reply within two days.",
                    "",
                    "  hello@studio.example",
                ],
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pages_cover_registry_destinations() {
        let pages = SitePages::default();
        for path in [
            "/",
            "/pages/services.html",
            "/pages/work.html",
            "/pages/contact.html",
        ] {
            assert!(pages.find(path).is_some(), "missing {path}");
        }
    }

    #[test]
    fn test_index_alias() {
        let pages = SitePages::default();
        assert_eq!(pages.find("/index.html").unwrap().title, "Home");
    }

    #[test]
    fn test_resolve_unknown_path() {
        let pages = SitePages::default();
        let page = pages.resolve("/pages/blog.html");
        assert_eq!(page.title, "Page not found");
        assert_eq!(page.path, "/pages/blog.html");
        assert!(page.body.iter().any(|l| l.contains("/pages/blog.html")));
    }
}
