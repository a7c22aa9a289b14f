//! Command system for the command palette.
//!
//! This module provides:
//! - Command definitions with a closed set of effects
//! - The ordered command registry
//! - Case-insensitive substring matching

mod registry;

pub use registry::{Command, CommandEntry, CommandRegistry, CommandTarget, Effect, RegistryError};
