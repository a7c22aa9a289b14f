//! Main application state and event loop.
//!
//! This module implements The Elm Architecture (TEA) pattern: every event
//! goes through [`App::update`] and the screen is drawn by [`App::view`].

use std::time::Instant;

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Block,
    Frame,
};
use tracing::{debug, info, trace, warn};

use crate::commands::{CommandTarget, Effect};
use crate::config::Config;
use crate::error::AppError;
use crate::events::{Event, KeyBindings};
use crate::site::{
    is_site_link, FileThemeStore, Logo, MemoryThemeStore, PageTransition, Site, SitePages,
    ThemeMode, ThemeStore,
};
use crate::ui::{
    render_transition, CommandPalette, CommandPaletteAction, Header, NavMenu, NavMenuAction,
    PageView, RotatingText, Theme, Toasts,
};

/// Lines moved per mouse wheel step.
const WHEEL_STEP: i32 = 3;

/// The main application struct that holds all state.
pub struct App {
    config: Config,
    site: Site,
    /// `None` when the quick switcher is disabled; the page works without it.
    palette: Option<CommandPalette>,
    menu: NavMenu,
    pages: SitePages,
    page_view: PageView,
    header: Header,
    tagline: RotatingText,
    toasts: Toasts,
    keys: KeyBindings,
    should_quit: bool,
}

impl App {
    /// Create the application with the persisted theme and a timed page
    /// transition.
    pub fn new(config: Config) -> Self {
        let store: Box<dyn ThemeStore> = match FileThemeStore::default_path() {
            Some(path) => Box::new(FileThemeStore::open(path)),
            None => {
                warn!("No data directory, theme preference will not be saved");
                Box::new(MemoryThemeStore::new(ThemeMode::default()))
            }
        };
        let navigator = Box::new(PageTransition::new(config.transition_duration()));
        let logo = Logo::new(
            format!("◇ {}", config.site.name),
            format!("◆ {}", config.site.name),
        );
        Self::with_site(config, Site::new(store, navigator, logo))
    }

    /// Create the application around an existing site context.
    pub fn with_site(config: Config, site: Site) -> Self {
        debug!(
            palette = config.palette.enabled,
            start_page = %config.site.start_page,
            "Creating application"
        );

        // A config that validated always yields a registry; the built-in set
        // is used otherwise.
        let palette = config.palette.enabled.then(|| {
            let registry = config.registry().unwrap_or_else(|e| {
                warn!(error = %e, "Invalid commands, using built-in set");
                Default::default()
            });
            debug!(commands = registry.commands().len(), "Command registry loaded");
            CommandPalette::new(registry)
        });

        let pages = config.site_pages();
        let page_view = PageView::new(pages.resolve(&config.site.start_page));
        let menu = NavMenu::from_pages(&pages);
        let tagline = RotatingText::new(config.tagline.words.clone(), config.tagline_interval());

        Self {
            config,
            site,
            palette,
            menu,
            pages,
            page_view,
            header: Header::new(),
            tagline,
            toasts: Toasts::new(),
            keys: KeyBindings::default(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Override the stored theme, e.g. from the command line.
    pub fn set_theme(&mut self, mode: ThemeMode) {
        if self.site.theme() != mode {
            self.site.set_theme(mode);
        }
    }

    /// Report a non-fatal error to the user.
    pub fn handle_error(&mut self, error: &AppError) {
        warn!(error = %error, "Recoverable error");
        let mut message = error.user_message();
        if let Some(action) = error.suggested_action() {
            message.push(' ');
            message.push_str(action);
        }
        self.toasts.warning(message);
    }

    /// Update the application state based on an event.
    pub fn update(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                trace!(key = ?key.code, modifiers = ?key.modifiers, "Key event");
                self.handle_key_event(key);
            }
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Resize(width, height) => {
                trace!(width, height, "Terminal resize event");
            }
            Event::Tick => self.handle_tick(Instant::now()),
            Event::Paste(text) => self.handle_paste(&text),
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.keys.is_force_quit(&key) {
            self.should_quit = true;
            return;
        }

        // The shortcut wins over everything else, including an open drawer.
        if self.keys.is_palette_toggle(&key) {
            if let Some(palette) = self.palette.as_mut() {
                palette.toggle(&mut self.site);
            }
            return;
        }

        if let Some(palette) = self.palette.as_mut().filter(|p| p.is_open()) {
            let action = palette.handle_input(key, &mut self.site);
            self.after_palette_action(action);
            return;
        }

        if self.menu.is_open() {
            if let Some(NavMenuAction::Follow(href)) = self.menu.handle_input(key, &mut self.site) {
                debug!(href, "Drawer link followed");
            }
            return;
        }

        if self.keys.is_quit(&key) {
            self.should_quit = true;
        } else if self.keys.is_menu_toggle(&key) {
            self.menu.toggle(&mut self.site);
        } else if let Some(delta) = self.keys.scroll_delta(&key, self.page_step()) {
            self.scroll_page(delta);
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(mouse.column, mouse.row),
            MouseEventKind::ScrollDown => self.scroll_page(WHEEL_STEP),
            MouseEventKind::ScrollUp => self.scroll_page(-WHEEL_STEP),
            _ => {}
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        if let Some(palette) = self.palette.as_mut().filter(|p| p.is_open()) {
            let action = palette.handle_click(column, row, &mut self.site);
            self.after_palette_action(action);
            return;
        }
        if self.menu.is_open() {
            self.menu.handle_click(column, row, &mut self.site);
            return;
        }
        if self.header.hits_shortcut(column, row) {
            if let Some(palette) = self.palette.as_mut() {
                palette.open(&mut self.site);
            }
        }
    }

    /// Append pasted text to the query of an open palette.
    ///
    /// Control characters such as newlines are dropped. Pastes are ignored
    /// everywhere else.
    fn handle_paste(&mut self, text: &str) {
        let Some(palette) = self.palette.as_mut().filter(|p| p.is_open()) else {
            trace!(len = text.len(), "Paste ignored");
            return;
        };
        let pasted: String = text.chars().filter(|c| !c.is_control()).collect();
        let query = format!("{}{}", palette.query().unwrap_or_default(), pasted);
        palette.set_query(&query);
    }

    fn after_palette_action(&mut self, action: Option<CommandPaletteAction>) {
        let Some(CommandPaletteAction::Execute(target)) = action else {
            return;
        };
        debug!(target = ?target, "Palette command executed");
        if target == CommandTarget::Effect(Effect::ToggleTheme) {
            self.toasts
                .info(format!("Switched to {} theme", self.site.theme().as_str()));
        }
    }

    /// Scroll the page unless an overlay holds the scroll lock.
    fn scroll_page(&mut self, delta: i32) {
        if self.site.scroll_lock.is_locked() {
            trace!(delta, "Scroll suppressed");
            return;
        }
        let max = self.page_view.max_offset();
        self.site.viewport.scroll_by(delta, max);
    }

    fn page_step(&self) -> u16 {
        (self.page_view.max_offset() / 2).max(1)
    }

    /// Advance timers: page transitions, the tagline and notifications.
    fn handle_tick(&mut self, now: Instant) {
        if let Some(url) = self.site.poll_navigation(now) {
            self.load_url(&url);
        }
        self.tagline.tick(now);
        self.toasts.tick(now);
    }

    /// Show the page a finished navigation points at.
    fn load_url(&mut self, url: &str) {
        if !is_site_link(url) {
            self.open_external(url);
            return;
        }

        let page = self.pages.resolve(url);
        info!(url, title = %page.title, "Loading page");
        self.page_view.set_page(page);
        self.site.viewport.scroll_to_top();

        if self.config.site.open_in_browser {
            if let Some(base) = &self.config.site.base_url {
                let full = format!("{}{}", base.trim_end_matches('/'), url);
                self.open_external(&full);
            }
        }
    }

    fn open_external(&mut self, url: &str) {
        info!(url, "Opening with system handler");
        match open::that(url) {
            Ok(()) => self.toasts.info(format!("Opened {}", url)),
            Err(e) => {
                warn!(url, error = %e, "Failed to open link");
                self.toasts.warning(format!("Could not open {}", url));
            }
        }
    }

    /// Render the application UI.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let theme = Theme::for_mode(self.site.theme());
        frame.render_widget(Block::default().style(theme.base()), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Header
                Constraint::Min(1),    // Page
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        self.header.render(
            frame,
            chunks[0],
            self.site.logo.current(),
            &self.page_view.page().title,
            self.tagline.current(),
            &theme,
        );
        self.page_view
            .render(frame, chunks[1], &self.site.viewport, &theme);
        self.page_view.render_status_bar(
            frame,
            chunks[2],
            self.site.scroll_lock.is_locked(),
            &theme,
        );

        if let Some(target) = self.site.pending_navigation() {
            render_transition(frame, chunks[1], Some(target), &theme);
        }

        self.menu.render(frame, area, &theme);
        if let Some(palette) = self.palette.as_mut() {
            palette.render(frame, area, &theme);
        }
        self.toasts.render(frame, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::site::testing::recording_site;
    use crate::site::SitePage;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl_k() -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.update(key(KeyCode::Char(c)));
        }
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn draw(app: &mut App) {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| app.view(frame)).unwrap();
    }

    /// An app whose navigations finish on the next tick.
    fn instant_app() -> App {
        let site = Site::new(
            Box::new(MemoryThemeStore::new(ThemeMode::Light)),
            Box::new(PageTransition::new(Duration::ZERO)),
            Logo::default(),
        );
        App::with_site(Config::default(), site)
    }

    #[test]
    fn test_shortcut_twice_opens_then_closes() {
        let (site, _, _) = recording_site();
        let mut app = App::with_site(Config::default(), site);

        app.update(ctrl_k());
        assert!(app.palette.as_ref().unwrap().is_open());
        assert!(app.site.scroll_lock.is_locked());

        app.update(ctrl_k());
        assert!(!app.palette.as_ref().unwrap().is_open());
        assert!(!app.site.scroll_lock.is_locked());
    }

    #[test]
    fn test_shortcut_is_noop_when_palette_disabled() {
        let (site, _, _) = recording_site();
        let mut config = Config::default();
        config.palette.enabled = false;
        let mut app = App::with_site(config, site);

        app.update(ctrl_k());
        assert!(app.palette.is_none());
        assert!(!app.site.scroll_lock.is_locked());

        draw(&mut app);
        app.update(key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn test_typing_goes_to_palette_not_global_keys() {
        let (site, _, _) = recording_site();
        let mut app = App::with_site(Config::default(), site);

        app.update(ctrl_k());
        type_text(&mut app, "quote");

        assert!(!app.should_quit());
        assert!(!app.menu.is_open());
        let palette = app.palette.as_ref().unwrap();
        assert_eq!(palette.query(), Some("quote"));
        assert_eq!(palette.visible_results().len(), 1);
        assert_eq!(palette.visible_results()[0].title, "Contact");
    }

    #[test]
    fn test_enter_navigates_and_closes() {
        let (site, navigator, _) = recording_site();
        let mut app = App::with_site(Config::default(), site);

        app.update(ctrl_k());
        type_text(&mut app, "work");
        app.update(key(KeyCode::Enter));

        assert!(!app.palette.as_ref().unwrap().is_open());
        assert_eq!(*navigator.urls.borrow(), vec!["/pages/work.html".to_string()]);
    }

    #[test]
    fn test_toggle_theme_command_writes_once() {
        let (site, _, store) = recording_site();
        let mut app = App::with_site(Config::default(), site);

        app.update(ctrl_k());
        type_text(&mut app, "dark");
        app.update(key(KeyCode::Enter));

        assert_eq!(store.writes.get(), 1);
        assert_eq!(app.site.theme(), ThemeMode::Dark);
        let mut expected = Logo::default();
        expected.update(ThemeMode::Dark);
        assert_eq!(app.site.logo.current(), expected.current());
    }

    #[test]
    fn test_closing_palette_clears_lock_held_by_menu() {
        let (site, _, _) = recording_site();
        let mut app = App::with_site(Config::default(), site);

        app.update(key(KeyCode::Char('m')));
        assert!(app.menu.is_open());

        app.update(ctrl_k());
        app.update(key(KeyCode::Esc));
        assert!(!app.palette.as_ref().unwrap().is_open());
        assert!(app.menu.is_open());
        assert!(!app.site.scroll_lock.is_locked());
    }

    #[test]
    fn test_scroll_blocked_while_locked() {
        let (site, _, _) = recording_site();
        let mut config = Config::default();
        let body = ["paragraph"; 40];
        config.pages = vec![SitePage::new("/", "Home", &body)];
        let mut app = App::with_site(config, site);
        draw(&mut app);

        app.update(key(KeyCode::Char('j')));
        assert_eq!(app.site.viewport.offset(), 1);

        app.update(ctrl_k());
        app.update(Event::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }));
        assert_eq!(app.site.viewport.offset(), 1);
    }

    #[test]
    fn test_header_shortcut_click_opens_palette() {
        let (site, _, _) = recording_site();
        let mut app = App::with_site(Config::default(), site);
        draw(&mut app);

        // The hint sits at the right end of the first row.
        app.update(click(78, 0));
        assert!(app.palette.as_ref().unwrap().is_open());

        draw(&mut app);
        app.update(click(0, 29));
        assert!(!app.palette.as_ref().unwrap().is_open());
    }

    #[test]
    fn test_finished_navigation_loads_page() {
        let mut app = instant_app();

        app.update(ctrl_k());
        type_text(&mut app, "services");
        app.update(key(KeyCode::Enter));
        app.update(Event::Tick);

        assert_eq!(app.page_view.page().path, "/pages/services.html");
        assert!(app.site.viewport.offset() == 0);
    }

    #[test]
    fn test_drawer_link_loads_page() {
        let mut app = instant_app();

        app.update(key(KeyCode::Char('m')));
        app.update(key(KeyCode::Down));
        app.update(key(KeyCode::Enter));
        app.update(Event::Tick);

        assert!(!app.menu.is_open());
        assert_eq!(app.page_view.page().path, "/pages/services.html");
    }

    #[test]
    fn test_config_error_becomes_warning_toast() {
        let (site, _, _) = recording_site();
        let mut app = App::with_site(Config::default(), site);

        let error = AppError::from(ConfigError::ValidationError("bad page".to_string()));
        app.handle_error(&error);
        assert_eq!(app.toasts.iter().count(), 1);
    }

    #[test]
    fn test_quit_keys() {
        let (site, _, _) = recording_site();
        let mut app = App::with_site(Config::default(), site);
        app.update(key(KeyCode::Char('q')));
        assert!(app.should_quit());

        let (site, _, _) = recording_site();
        let mut app = App::with_site(Config::default(), site);
        app.update(ctrl_k());
        app.update(Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(app.should_quit());
    }

    #[test]
    fn test_theme_command_shows_toast() {
        let (site, _, _) = recording_site();
        let mut app = App::with_site(Config::default(), site);

        app.update(ctrl_k());
        type_text(&mut app, "theme");
        app.update(key(KeyCode::Enter));

        let messages: Vec<_> = app.toasts.iter().map(|t| t.message.clone()).collect();
        assert_eq!(messages, vec!["Switched to dark theme".to_string()]);
    }

    #[test]
    fn test_paste_appends_to_query() {
        let (site, _, _) = recording_site();
        let mut app = App::with_site(Config::default(), site);

        // Nothing to paste into while closed.
        app.update(Event::Paste("work".to_string()));
        assert!(!app.palette.as_ref().unwrap().is_open());

        app.update(ctrl_k());
        type_text(&mut app, "ser");
        app.update(Event::Paste("vices\n".to_string()));

        let palette = app.palette.as_ref().unwrap();
        assert_eq!(palette.query(), Some("services"));
        assert_eq!(palette.visible_results()[0].title, "Services");
    }

    #[test]
    fn test_transition_overlay_names_target() {
        let site = Site::new(
            Box::new(MemoryThemeStore::new(ThemeMode::Light)),
            Box::new(PageTransition::new(Duration::from_secs(60))),
            Logo::default(),
        );
        let mut app = App::with_site(Config::default(), site);
        app.update(ctrl_k());
        type_text(&mut app, "work");
        app.update(key(KeyCode::Enter));

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| app.view(frame)).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("/pages/work.html"));
    }
}
