//! Command palette component.
//!
//! A Ctrl+K quick switcher over the command registry. It supports:
//! - Case-insensitive substring filtering in registry order
//! - Enter to run the first result, Esc to dismiss
//! - Clicking an entry to run it, clicking the backdrop to dismiss
//!
//! There is no list navigation: only the first result can be selected.
//! While open, the palette holds the page scroll lock.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tracing::{debug, info, trace};

use crate::commands::{Command, CommandRegistry, CommandTarget};
use crate::site::Site;
use crate::ui::components::QueryInput;
use crate::ui::theme::Theme;

/// Rows used by each result entry (title + subtitle).
const ENTRY_HEIGHT: u16 = 2;

const PROMPT: &str = "> ";

/// Terminal columns taken by the query text left of the cursor.
fn cursor_offset(input: &QueryInput) -> u16 {
    Span::raw(input.before_cursor()).width() as u16
}

/// Actions returned from command palette input handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandPaletteAction {
    /// A command ran with this target.
    Execute(CommandTarget),
    /// The palette was dismissed.
    Cancel,
}

/// Screen regions of the last render, used for click activation.
#[derive(Debug, Clone, Default)]
struct HitAreas {
    /// The palette box. Clicks outside it hit the backdrop.
    content: Option<Rect>,
    /// One rectangle per rendered result, in result order.
    entries: Vec<Rect>,
}

/// Transient state of an open palette.
#[derive(Debug, Clone)]
struct PaletteSession {
    input: QueryInput,
    /// Registry positions of the matching commands.
    results: Vec<usize>,
    selected: Option<usize>,
    hit_areas: HitAreas,
}

impl PaletteSession {
    fn new(registry: &CommandRegistry) -> Self {
        let mut session = Self {
            input: QueryInput::new(),
            results: Vec::new(),
            selected: None,
            hit_areas: HitAreas::default(),
        };
        session.refilter(registry);
        session
    }

    fn refilter(&mut self, registry: &CommandRegistry) {
        self.results = registry.matching_indices(self.input.value());
        self.selected = if self.results.is_empty() { None } else { Some(0) };
        trace!(
            query = self.input.value(),
            results = self.results.len(),
            "Palette results updated"
        );
    }
}

#[derive(Debug, Clone, Default)]
enum PaletteState {
    #[default]
    Closed,
    Open(PaletteSession),
}

/// Command palette component for quick command access.
pub struct CommandPalette {
    /// Command registry with all available commands.
    registry: CommandRegistry,
    state: PaletteState,
}

impl CommandPalette {
    /// Create a closed palette over `registry`.
    pub fn new(registry: CommandRegistry) -> Self {
        Self {
            registry,
            state: PaletteState::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, PaletteState::Open(_))
    }

    /// The current query, or `None` while closed.
    pub fn query(&self) -> Option<&str> {
        self.session().map(|s| s.input.value())
    }

    /// Commands currently shown, in registry order. Empty while closed.
    pub fn visible_results(&self) -> Vec<&Command> {
        self.session()
            .map(|s| {
                s.results
                    .iter()
                    .filter_map(|&idx| self.registry.get(idx))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Position of the highlighted result, if there is one.
    pub fn selected_index(&self) -> Option<usize> {
        self.session().and_then(|s| s.selected)
    }

    fn session(&self) -> Option<&PaletteSession> {
        match &self.state {
            PaletteState::Open(session) => Some(session),
            PaletteState::Closed => None,
        }
    }

    /// Open the palette with an empty query and lock page scrolling.
    ///
    /// Opening an open palette does nothing.
    pub fn open(&mut self, site: &mut Site) {
        if self.is_open() {
            trace!("Palette already open");
            return;
        }
        self.state = PaletteState::Open(PaletteSession::new(&self.registry));
        site.scroll_lock.acquire();
        debug!("Command palette opened");
    }

    /// Close the palette and unlock page scrolling.
    ///
    /// The lock is cleared even if the drawer locked it too. Closing a closed
    /// palette does nothing.
    pub fn close(&mut self, site: &mut Site) {
        if !self.is_open() {
            return;
        }
        self.state = PaletteState::Closed;
        site.scroll_lock.release();
        debug!("Command palette closed");
    }

    /// Open if closed, close if open.
    pub fn toggle(&mut self, site: &mut Site) {
        if self.is_open() {
            self.close(site);
        } else {
            self.open(site);
        }
    }

    /// Replace the query and refilter. Ignored while closed.
    pub fn set_query(&mut self, text: &str) {
        if let PaletteState::Open(session) = &mut self.state {
            session.input.set_value(text);
            session.refilter(&self.registry);
        }
    }

    /// Run the visible result at `position`.
    ///
    /// The palette closes before the command's target is dispatched. Positions
    /// outside the visible results are ignored.
    pub fn execute(&mut self, position: usize, site: &mut Site) -> Option<CommandTarget> {
        let command = self
            .session()
            .and_then(|s| s.results.get(position))
            .and_then(|&idx| self.registry.get(idx))?;
        let title = command.title.clone();
        let target = command.target.clone();

        self.close(site);
        info!(command = %title, "Executing command");
        site.dispatch(&target);
        Some(target)
    }

    /// Handle keyboard input while open.
    ///
    /// Returns an action if a command ran or the palette was dismissed.
    pub fn handle_input(&mut self, key: KeyEvent, site: &mut Site) -> Option<CommandPaletteAction> {
        let PaletteState::Open(session) = &mut self.state else {
            return None;
        };

        match key.code {
            KeyCode::Esc => {
                self.close(site);
                Some(CommandPaletteAction::Cancel)
            }
            KeyCode::Enter => {
                let selected = session.selected?;
                self.execute(selected, site)
                    .map(CommandPaletteAction::Execute)
            }
            // The selection is fixed to the first result.
            KeyCode::Up | KeyCode::Down | KeyCode::Tab | KeyCode::BackTab => None,
            _ => {
                if session.input.handle_input(key) {
                    session.refilter(&self.registry);
                }
                None
            }
        }
    }

    /// Handle a left click at (`column`, `row`) while open.
    ///
    /// Clicking a result runs it; clicking outside the palette box closes it.
    pub fn handle_click(
        &mut self,
        column: u16,
        row: u16,
        site: &mut Site,
    ) -> Option<CommandPaletteAction> {
        let session = self.session()?;
        let pos = Position::new(column, row);
        let hit = session.hit_areas.entries.iter().position(|r| r.contains(pos));
        let inside = session
            .hit_areas
            .content
            .is_some_and(|r| r.contains(pos));

        if let Some(position) = hit {
            return self
                .execute(position, site)
                .map(CommandPaletteAction::Execute);
        }
        if inside {
            return None;
        }

        debug!(column, row, "Backdrop clicked");
        self.close(site);
        Some(CommandPaletteAction::Cancel)
    }

    /// Render the command palette.
    ///
    /// Each render replaces the click targets of the previous one.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let Some(session) = self.session() else {
            return;
        };

        // Centered, ~60 chars wide, in the upper third
        let width = 60.min(area.width.saturating_sub(4));
        let height = 17.min(area.height.saturating_sub(2));
        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height / 6;
        let palette_area = Rect::new(x, y, width, height).intersection(area);

        frame.render_widget(Clear, palette_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.accent())
            .style(theme.base())
            .title(" Quick switch ")
            .title_style(theme.title());

        let inner = block.inner(palette_area);
        frame.render_widget(block, palette_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Query
                Constraint::Length(1), // Separator
                Constraint::Min(1),    // Results
            ])
            .split(inner);

        Self::render_query(frame, chunks[0], &session.input, theme);

        let separator = Paragraph::new(Line::from(Span::styled(
            "─".repeat(chunks[1].width as usize),
            theme.muted(),
        )));
        frame.render_widget(separator, chunks[1]);

        let results = self.visible_results();
        let entries =
            Self::render_results(frame, chunks[2], &results, self.selected_index(), theme);

        if let PaletteState::Open(session) = &mut self.state {
            session.hit_areas = HitAreas {
                content: Some(palette_area),
                entries,
            };
        }
    }

    /// Render the query line and put the terminal cursor on it.
    fn render_query(frame: &mut Frame, area: Rect, input: &QueryInput, theme: &Theme) {
        let line = if input.is_empty() {
            Line::from(vec![
                Span::styled(PROMPT, theme.accent()),
                Span::styled("Search pages and actions...", theme.muted()),
            ])
        } else {
            Line::from(vec![
                Span::styled(PROMPT, theme.accent()),
                Span::styled(input.value().to_string(), theme.base()),
            ])
        };
        frame.render_widget(Paragraph::new(line), area);

        let cursor_x = area.x + PROMPT.len() as u16 + cursor_offset(input);
        if cursor_x < area.x + area.width {
            frame.set_cursor_position(Position::new(cursor_x, area.y));
        }
    }

    /// Render the result entries and return their rectangles.
    fn render_results(
        frame: &mut Frame,
        area: Rect,
        results: &[&Command],
        selected: Option<usize>,
        theme: &Theme,
    ) -> Vec<Rect> {
        if results.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                "No matching commands",
                theme.muted(),
            )));
            frame.render_widget(empty, area);
            return Vec::new();
        }

        let mut entries = Vec::with_capacity(results.len());
        for (position, cmd) in results.iter().enumerate() {
            let top = area.y + position as u16 * ENTRY_HEIGHT;
            if top + ENTRY_HEIGHT > area.y + area.height {
                break;
            }

            let entry_area = Rect::new(area.x, top, area.width, ENTRY_HEIGHT);
            let is_selected = selected == Some(position);
            frame.render_widget(Self::entry(cmd, is_selected, theme), entry_area);
            entries.push(entry_area);
        }
        entries
    }

    /// Build the two-line widget for one result.
    fn entry<'a>(cmd: &'a Command, is_selected: bool, theme: &Theme) -> Paragraph<'a> {
        let marker = if is_selected {
            Span::styled("▌", theme.accent())
        } else {
            Span::raw(" ")
        };

        let lines = vec![
            Line::from(vec![
                marker.clone(),
                Span::styled(format!("{} ", cmd.icon), theme.accent()),
                Span::styled(cmd.title.as_str(), theme.title()),
            ]),
            Line::from(vec![
                marker,
                Span::raw("  "),
                Span::styled(cmd.subtitle.as_str(), theme.muted()),
            ]),
        ];

        let style = if is_selected {
            theme.selected()
        } else {
            theme.base()
        };
        Paragraph::new(lines).style(style)
    }
}

impl Default for CommandPalette {
    fn default() -> Self {
        Self::new(CommandRegistry::new())
    }
}
