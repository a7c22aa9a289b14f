//! quickswitch - a terminal rendition of a studio website with a Ctrl+K
//! quick switcher.

mod app;
mod commands;
mod config;
mod error;
mod events;
mod logging;
mod site;
mod ui;

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{
        DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info, warn};

use crate::app::App;
use crate::config::Config;
use crate::error::AppError;
use crate::events::EventHandler;
use crate::site::ThemeMode;

/// Browse the studio site from the terminal.
#[derive(Parser)]
#[command(name = "quickswitch")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page to show first, e.g. /pages/work.html
    #[arg(short, long)]
    page: Option<String>,

    /// Theme to use, stored for later runs
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    /// Start without the quick switcher
    #[arg(long)]
    no_palette: bool,

    /// Write the default configuration to the config path and exit
    #[arg(long)]
    write_config: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for ThemeMode {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => ThemeMode::Light,
            ThemeArg::Dark => ThemeMode::Dark,
        }
    }
}

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableBracketedPaste
        );
        original_hook(panic_info);
    }));
}

/// Load the configuration, falling back to defaults on any error.
fn load_config(path: Option<&PathBuf>) -> (Config, Option<AppError>) {
    let loaded = match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    match loaded {
        Ok(config) => (config, None),
        Err(e) => {
            warn!(error = %e, "Failed to load config, using defaults");
            (Config::default(), Some(e.into()))
        }
    }
}

/// Save the built-in configuration to `path`, or to the standard location.
fn write_default_config(path: Option<&PathBuf>) -> error::Result<PathBuf> {
    let path = match path {
        Some(path) => path.clone(),
        None => Config::config_path()?,
    };
    Config::default().save_to(&path)?;
    info!(path = %path.display(), "Default configuration written");
    Ok(path)
}

fn check_terminal() -> error::Result<()> {
    if io::stdout().is_terminal() {
        Ok(())
    } else {
        Err(AppError::terminal("stdout is not a terminal"))
    }
}

fn report(err: &AppError) {
    error!(error = %err, "Startup failed");
    eprintln!("{}", err.user_message());
    if let Some(action) = err.suggested_action() {
        eprintln!("{}", action);
    }
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> error::Result<()> {
    let events = EventHandler::new();
    while !app.should_quit() {
        terminal.draw(|frame| app.view(frame))?;
        let event = events.next()?;
        app.update(event);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_error = logging::init()
        .err()
        .map(|e| AppError::other(format!("Logging disabled: {}", e)));

    if cli.write_config {
        return match write_default_config(cli.config.as_ref()) {
            Ok(path) => {
                println!("Wrote {}", path.display());
                Ok(())
            }
            Err(err) => {
                report(&err);
                Err(err.into())
            }
        };
    }

    let (mut config, config_error) = load_config(cli.config.as_ref());
    if let Some(page) = cli.page {
        config.site.start_page = page;
    }
    if cli.no_palette {
        config.palette.enabled = false;
    }

    let mut app = App::new(config);
    if let Some(theme) = cli.theme {
        app.set_theme(theme.into());
    }

    let startup_errors = [log_error, config_error, check_terminal().err()];
    for err in startup_errors.into_iter().flatten() {
        if err.is_critical() {
            report(&err);
            return Err(err.into());
        }
        app.handle_error(&err);
    }

    setup_panic_hook();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    logging::shutdown();

    if let Err(err) = res {
        error!(error = %err, "Event loop failed");
        if let Some(dir) = logging::log_directory() {
            eprintln!("{}\nLogs: {}", err.user_message(), dir.display());
        } else {
            eprintln!("{}", err.user_message());
        }
    }

    Ok(())
}
