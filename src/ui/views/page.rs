//! Page view: the body of the current site page.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::site::{SitePage, Viewport};
use crate::ui::theme::Theme;

/// Shows one page and scrolls through its body.
#[derive(Debug, Clone)]
pub struct PageView {
    page: SitePage,
    /// Body height from the last render, used to bound scrolling.
    last_height: u16,
}

impl PageView {
    pub fn new(page: SitePage) -> Self {
        Self {
            page,
            last_height: 0,
        }
    }

    pub fn page(&self) -> &SitePage {
        &self.page
    }

    /// Replace the page being shown.
    pub fn set_page(&mut self, page: SitePage) {
        self.page = page;
    }

    /// Largest useful scroll offset for the last rendered height.
    pub fn max_offset(&self) -> u16 {
        let lines = self.page.body.len() as u16 + 2;
        lines.saturating_sub(self.last_height)
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, viewport: &Viewport, theme: &Theme) {
        self.last_height = area.height;

        let mut lines = vec![
            Line::from(Span::styled(self.page.title.as_str(), theme.title())),
            Line::raw(""),
        ];
        lines.extend(
            self.page
                .body
                .iter()
                .map(|l| Line::from(Span::styled(l.as_str(), theme.base()))),
        );

        let paragraph = Paragraph::new(lines)
            .style(theme.base())
            .block(Block::default().borders(Borders::NONE))
            .scroll((viewport.offset(), 0));
        frame.render_widget(paragraph, area);
    }

    /// Status line with the page path and key hints.
    pub fn render_status_bar(&self, frame: &mut Frame, area: Rect, locked: bool, theme: &Theme) {
        let mut spans = vec![
            Span::styled(format!(" {} ", self.page.path), theme.selected().fg(theme.fg)),
            Span::raw(" "),
            Span::styled("Ctrl+K switch · m menu · j/k scroll · q quit", theme.muted()),
        ];
        if locked {
            spans.push(Span::styled("  (scroll locked)", theme.muted()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)).style(theme.base()), area);
    }
}

/// Cover `area` while a page transition runs.
pub fn render_transition(frame: &mut Frame, area: Rect, target: Option<&str>, theme: &Theme) {
    frame.render_widget(Clear, area);
    let label = target.map(|t| format!("→ {}", t)).unwrap_or_default();
    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(label, theme.accent())),
    ];
    let cover = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(theme.selected());
    frame.render_widget(cover, area);
}
