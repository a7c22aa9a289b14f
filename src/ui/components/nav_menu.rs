//! Navigation drawer.
//!
//! The small-screen menu of the site, drawn as a panel on the right edge.
//! While open it keeps the page scroll lock set.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};
use tracing::debug;

use crate::site::{Site, SitePages};
use crate::ui::theme::Theme;

/// Width of the drawer in columns.
const DRAWER_WIDTH: u16 = 30;

/// Actions returned from drawer input handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavMenuAction {
    /// A link was followed.
    Follow(String),
    /// The drawer was closed without following a link.
    Close,
}

/// A link in the drawer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// The navigation drawer.
pub struct NavMenu {
    links: Vec<NavLink>,
    selected: usize,
    open: bool,
    /// Link rows from the last render.
    link_areas: Vec<Rect>,
    /// Drawer box from the last render.
    content: Option<Rect>,
}

impl NavMenu {
    pub fn new(links: Vec<NavLink>) -> Self {
        Self {
            links,
            selected: 0,
            open: false,
            link_areas: Vec::new(),
            content: None,
        }
    }

    /// One link per site page, in page order.
    pub fn from_pages(pages: &SitePages) -> Self {
        Self::new(
            pages
                .pages()
                .iter()
                .map(|p| NavLink {
                    label: p.title.clone(),
                    href: p.path.clone(),
                })
                .collect(),
        )
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self, site: &mut Site) {
        if self.open {
            return;
        }
        self.open = true;
        self.selected = 0;
        site.scroll_lock.acquire();
        debug!("Navigation drawer opened");
    }

    pub fn close(&mut self, site: &mut Site) {
        if !self.open {
            return;
        }
        self.open = false;
        self.link_areas.clear();
        self.content = None;
        site.scroll_lock.release();
        debug!("Navigation drawer closed");
    }

    pub fn toggle(&mut self, site: &mut Site) {
        if self.open {
            self.close(site);
        } else {
            self.open(site);
        }
    }

    /// Close the drawer, then navigate to the link at `index`.
    fn follow(&mut self, index: usize, site: &mut Site) -> Option<NavMenuAction> {
        let href = self.links.get(index)?.href.clone();
        self.close(site);
        site.navigate(&href);
        Some(NavMenuAction::Follow(href))
    }

    /// Handle keyboard input while open.
    pub fn handle_input(&mut self, key: KeyEvent, site: &mut Site) -> Option<NavMenuAction> {
        if !self.open {
            return None;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) | (KeyCode::Char('m'), KeyModifiers::NONE) => {
                self.close(site);
                Some(NavMenuAction::Close)
            }
            (KeyCode::Enter, _) => self.follow(self.selected, site),
            (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
                if !self.links.is_empty() {
                    self.selected = (self.selected + 1) % self.links.len();
                }
                None
            }
            (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => {
                if !self.links.is_empty() {
                    self.selected = self
                        .selected
                        .checked_sub(1)
                        .unwrap_or(self.links.len() - 1);
                }
                None
            }
            _ => None,
        }
    }

    /// Handle a left click while open.
    pub fn handle_click(&mut self, column: u16, row: u16, site: &mut Site) -> Option<NavMenuAction> {
        if !self.open {
            return None;
        }
        let pos = Position::new(column, row);

        if let Some(index) = self.link_areas.iter().position(|r| r.contains(pos)) {
            return self.follow(index, site);
        }
        if self.content.is_some_and(|r| r.contains(pos)) {
            return None;
        }
        self.close(site);
        Some(NavMenuAction::Close)
    }

    /// Render the drawer along the right edge of `area`.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if !self.open {
            return;
        }

        let width = DRAWER_WIDTH.min(area.width);
        let drawer = Rect::new(area.x + area.width - width, area.y, width, area.height);
        frame.render_widget(Clear, drawer);

        let block = Block::default()
            .borders(Borders::LEFT)
            .border_style(theme.accent())
            .style(theme.base())
            .title(" Menu ")
            .title_style(theme.title());
        let inner = block.inner(drawer);
        frame.render_widget(block, drawer);

        let items: Vec<ListItem> = self
            .links
            .iter()
            .enumerate()
            .map(|(idx, link)| {
                let line = if idx == self.selected {
                    Line::from(vec![
                        Span::styled("› ", theme.accent()),
                        Span::styled(link.label.as_str(), theme.title()),
                    ])
                } else {
                    Line::from(vec![Span::raw("  "), Span::styled(link.label.as_str(), theme.base())])
                };
                ListItem::new(line)
            })
            .collect();
        frame.render_widget(List::new(items), inner);

        self.link_areas = (0..self.links.len() as u16)
            .take_while(|&i| i < inner.height)
            .map(|i| Rect::new(inner.x, inner.y + i, inner.width, 1))
            .collect();
        self.content = Some(drawer);
    }
}
