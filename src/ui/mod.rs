//! User interface components and views.
//!
//! Everything here draws with ratatui and reacts to crossterm input. Shared
//! page state lives in [`crate::site`]; components borrow it per call.

mod components;
pub mod theme;
mod views;

pub use components::{
    CommandPalette, CommandPaletteAction, Header, NavMenu, NavMenuAction, RotatingText, Toasts,
    DEFAULT_ROTATION_MS,
};
pub use theme::Theme;
pub use views::{render_transition, PageView};
