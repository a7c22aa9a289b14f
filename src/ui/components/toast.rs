//! Short-lived status messages in the bottom-right corner.

use std::collections::vec_deque::{self, VecDeque};
use std::time::{Duration, Instant};

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// How a toast looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Warning,
}

impl ToastKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Info => "ℹ",
            ToastKind::Warning => "⚠",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            ToastKind::Info => Color::Blue,
            ToastKind::Warning => Color::Yellow,
        }
    }

    /// How long a toast of this kind stays up.
    pub fn lifetime(&self) -> Duration {
        match self {
            ToastKind::Info => Duration::from_secs(3),
            ToastKind::Warning => Duration::from_secs(6),
        }
    }
}

/// A single message.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind, now: Instant) -> Self {
        Self {
            message: message.into(),
            kind,
            expires_at: now + kind.lifetime(),
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Stack of visible toasts, oldest first.
#[derive(Debug)]
pub struct Toasts {
    toasts: VecDeque<Toast>,
    max_visible: usize,
}

impl Default for Toasts {
    fn default() -> Self {
        Self {
            toasts: VecDeque::new(),
            max_visible: 3,
        }
    }
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a toast, dropping the oldest past the visible limit.
    pub fn push(&mut self, toast: Toast) {
        self.toasts.push_back(toast);
        while self.toasts.len() > self.max_visible {
            self.toasts.pop_front();
        }
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Toast::new(message, ToastKind::Info, Instant::now()));
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(Toast::new(message, ToastKind::Warning, Instant::now()));
    }

    /// Drop expired toasts.
    pub fn tick(&mut self, now: Instant) {
        self.toasts.retain(|t| !t.is_expired(now));
    }

    /// Visible toasts, oldest first.
    pub fn iter(&self) -> vec_deque::Iter<'_, Toast> {
        self.toasts.iter()
    }

    /// Render the stack in the bottom-right corner of `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let width = 48.min(area.width.saturating_sub(2));
        let mut bottom = area.y + area.height.saturating_sub(1);

        for toast in self.iter().rev() {
            if bottom < area.y + 3 {
                break;
            }
            let rect = Rect::new(
                area.x + area.width.saturating_sub(width + 1),
                bottom - 3,
                width,
                3,
            );
            bottom -= 3;

            let style = Style::default().fg(toast.kind.color());
            let line = Line::from(vec![
                Span::styled(format!("{} ", toast.kind.icon()), style.add_modifier(Modifier::BOLD)),
                Span::styled(toast.message.as_str(), style),
            ]);
            frame.render_widget(Clear, rect);
            frame.render_widget(
                Paragraph::new(line).block(Block::default().borders(Borders::ALL).border_style(style)),
                rect,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expiry() {
        let now = Instant::now();
        let toast = Toast::new("Saved", ToastKind::Info, now);
        assert!(!toast.is_expired(now));
        assert!(toast.is_expired(now + Duration::from_secs(3)));
    }

    #[test]
    fn test_warning_lives_longer() {
        assert!(ToastKind::Warning.lifetime() > ToastKind::Info.lifetime());
    }

    #[test]
    fn test_max_visible() {
        let mut toasts = Toasts::new();
        for i in 0..5 {
            toasts.info(format!("message {i}"));
        }
        assert_eq!(toasts.iter().count(), 3);
        let messages: Vec<&str> = toasts.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["message 2", "message 3", "message 4"]);
    }

    #[test]
    fn test_tick_removes_expired() {
        let mut toasts = Toasts::new();
        let now = Instant::now();
        toasts.push(Toast::new("old", ToastKind::Info, now));
        toasts.push(Toast::new("warn", ToastKind::Warning, now));

        toasts.tick(now + Duration::from_secs(4));
        assert_eq!(toasts.iter().count(), 1);
        assert_eq!(toasts.iter().next().unwrap().kind, ToastKind::Warning);
    }
}
