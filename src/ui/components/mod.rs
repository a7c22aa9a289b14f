//! Reusable UI components.

mod command_palette;
mod header;
mod input;
mod nav_menu;
mod rotating_text;
mod toast;

pub use command_palette::{CommandPalette, CommandPaletteAction};
pub use header::Header;
pub use input::QueryInput;
pub use nav_menu::{NavMenu, NavMenuAction};
pub use rotating_text::{RotatingText, DEFAULT_ROTATION_MS};
pub use toast::Toasts;
