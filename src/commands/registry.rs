//! Command registry for the command palette.
//!
//! Provides command definitions and substring matching. Results always keep
//! registry order; there is no scoring.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A command that can be executed from the command palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Display title shown in the palette.
    pub title: String,
    /// One-line description shown under the title.
    pub subtitle: String,
    /// Display glyph. Not used for matching.
    pub icon: String,
    /// Lowercase search tokens.
    pub keywords: Vec<String>,
    /// What happens when the command runs.
    pub target: CommandTarget,
}

/// The single thing a command does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandTarget {
    /// Navigate to a URL.
    Destination(String),
    /// Run a non-navigational effect.
    Effect(Effect),
}

/// Non-navigational actions a command can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Effect {
    /// Flip between light and dark mode.
    ToggleTheme,
    /// Jump the page back to the top.
    ScrollTop,
}

impl Effect {
    /// Identifier used in configuration files.
    pub fn id(&self) -> &'static str {
        match self {
            Self::ToggleTheme => "toggle-theme",
            Self::ScrollTop => "scroll-top",
        }
    }
}

impl Command {
    /// Create a command that navigates to `url`.
    pub fn navigate(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        icon: impl Into<String>,
        url: impl Into<String>,
        keywords: &[&str],
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            icon: icon.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            target: CommandTarget::Destination(url.into()),
        }
    }

    /// Create a command that runs `effect`.
    pub fn effect(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        icon: impl Into<String>,
        effect: Effect,
        keywords: &[&str],
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            icon: icon.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            target: CommandTarget::Effect(effect),
        }
    }

    /// Check whether this command matches a query.
    ///
    /// An empty query matches everything. Otherwise the lowercased query must
    /// be a substring of the title, the subtitle, or one of the keywords.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }

        let query_lower = query.to_lowercase();
        self.title.to_lowercase().contains(&query_lower)
            || self.subtitle.to_lowercase().contains(&query_lower)
            || self.keywords.iter().any(|k| k.contains(&query_lower))
    }
}

/// A command entry as written in the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandEntry {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<Effect>,
}

/// Errors raised when building a registry from configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("command list cannot be empty")]
    EmptyRegistry,

    #[error("command #{0} has an empty title")]
    EmptyTitle(usize),

    #[error("command '{0}' needs either a url or an action")]
    MissingTarget(String),

    #[error("command '{0}' cannot have both a url and an action")]
    ConflictingTarget(String),
}

/// Ordered, immutable list of available commands.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    /// Create a registry with the site's default commands.
    pub fn new() -> Self {
        let commands = vec![
            Command::navigate("Home", "Go to homepage", "⌂", "/", &["home"]),
            Command::navigate(
                "Services",
                "What we do",
                "☏",
                "/pages/services.html",
                &["services", "what"],
            ),
            Command::navigate(
                "Work",
                "Our projects",
                "▣",
                "/pages/work.html",
                &["work", "projects", "portfolio"],
            ),
            Command::navigate(
                "Contact",
                "Get a quote",
                "✉",
                "/pages/contact.html",
                &["contact", "quote", "email", "hire"],
            ),
            Command::effect(
                "Toggle Dark Mode",
                "Switch theme",
                "◐",
                Effect::ToggleTheme,
                &["dark", "theme", "mode"],
            ),
            Command::effect(
                "Back to Top",
                "Scroll to top",
                "↑",
                Effect::ScrollTop,
                &["top", "scroll"],
            ),
        ];

        Self { commands }
    }

    /// Build a registry from configuration entries.
    ///
    /// Keywords are lowercased so matching can compare them directly.
    ///
    /// # Errors
    ///
    /// Fails if the list is empty, a title is blank, or an entry does not set
    /// exactly one of `url` and `action`.
    pub fn from_entries(entries: &[CommandEntry]) -> Result<Self, RegistryError> {
        if entries.is_empty() {
            return Err(RegistryError::EmptyRegistry);
        }

        let mut commands = Vec::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            if entry.title.trim().is_empty() {
                return Err(RegistryError::EmptyTitle(idx + 1));
            }

            let target = match (&entry.url, entry.action) {
                (Some(url), None) => CommandTarget::Destination(url.clone()),
                (None, Some(effect)) => CommandTarget::Effect(effect),
                (None, None) => return Err(RegistryError::MissingTarget(entry.title.clone())),
                (Some(_), Some(_)) => {
                    return Err(RegistryError::ConflictingTarget(entry.title.clone()))
                }
            };

            commands.push(Command {
                title: entry.title.clone(),
                subtitle: entry.subtitle.clone(),
                icon: entry.icon.clone(),
                keywords: entry.keywords.iter().map(|k| k.to_lowercase()).collect(),
                target,
            });
        }

        Ok(Self { commands })
    }

    /// Positions of the commands matching `query`, in registry order.
    pub fn matching_indices(&self, query: &str) -> Vec<usize> {
        self.commands
            .iter()
            .enumerate()
            .filter(|(_, cmd)| cmd.matches(query))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Get a command by position.
    pub fn get(&self, index: usize) -> Option<&Command> {
        self.commands.get(index)
    }

    /// Get all registered commands.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
