//! Command-line interface for mealfinder.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    BrowseArgs, Cli, Commands, CompletionsArgs, FindArgs, LocationsArgs, ShowArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
