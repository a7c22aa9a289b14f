//! Site header: logo, tagline and the quick-switch shortcut hint.

use ratatui::{
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::Theme;

/// Label of the clickable shortcut hint.
const SHORTCUT_HINT: &str = " ⌃K ";

/// Renders the header and remembers where the shortcut hint was drawn.
#[derive(Debug, Default)]
pub struct Header {
    shortcut_area: Option<Rect>,
}

impl Header {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether (`column`, `row`) hits the shortcut hint.
    pub fn hits_shortcut(&self, column: u16, row: u16) -> bool {
        self.shortcut_area
            .is_some_and(|r| r.contains(Position::new(column, row)))
    }

    /// Render `logo`, the site name and the rotating `tagline` word.
    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        logo: &str,
        page_title: &str,
        tagline: &str,
        theme: &Theme,
    ) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme.muted())
            .style(theme.base());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut spans = vec![
            Span::styled(logo, theme.accent()),
            Span::styled("  /  ", theme.muted()),
            Span::styled(page_title, theme.title()),
        ];
        if !tagline.is_empty() {
            spans.push(Span::styled("   we make ", theme.muted()));
            spans.push(Span::styled(tagline, theme.accent()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), inner);

        let hint_width = SHORTCUT_HINT.chars().count() as u16;
        if inner.width > hint_width && inner.height > 0 {
            let hint = Rect::new(inner.x + inner.width - hint_width, inner.y, hint_width, 1);
            frame.render_widget(
                Paragraph::new(Span::styled(SHORTCUT_HINT, theme.selected().fg(theme.fg))),
                hint,
            );
            self.shortcut_area = Some(hint);
        } else {
            self.shortcut_area = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_shortcut_hit_area() {
        let mut header = Header::new();
        assert!(!header.hits_shortcut(0, 0));

        let mut terminal = Terminal::new(TestBackend::new(60, 3)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                header.render(frame, area, "◇ studio", "Home", "brands", &Theme::default());
            })
            .unwrap();

        assert!(header.hits_shortcut(58, 0));
        assert!(!header.hits_shortcut(2, 0));
    }
}
