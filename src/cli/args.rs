//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// mealfinder - Campus dining menus in the terminal.
#[derive(Debug, Parser)]
#[command(name = "mealfinder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides ~/.config/mealfinder/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Minimal output (no progress bar)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch and display menus for a date range
    Show(ShowArgs),

    /// Show which dates in a range serve a specific item
    Find(FindArgs),

    /// List configured dining locations
    Locations(LocationsArgs),

    /// Browse menus interactively (default if no command specified)
    Browse(BrowseArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ShowArgs {
    /// Dining location to query
    #[arg(short, long)]
    pub location: String,

    /// First date of the range (yyyy-mm-dd, defaults to today)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Last date of the range (yyyy-mm-dd, defaults to the configured span past the first)
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Only show items matching this case-insensitive pattern
    #[arg(short = 'Q', long)]
    pub query: Option<String>,
}

/// Arguments for the `find` command.
#[derive(Debug, Clone, clap::Args)]
pub struct FindArgs {
    /// Exact item name to look for
    pub item: String,

    /// Dining location to query
    #[arg(short, long)]
    pub location: String,

    /// First date of the range (yyyy-mm-dd, defaults to today)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Last date of the range (yyyy-mm-dd, defaults to the configured span past the first)
    #[arg(long)]
    pub to: Option<NaiveDate>,
}

/// Arguments for the `locations` command.
#[derive(Debug, Clone, clap::Args)]
pub struct LocationsArgs {
    /// Also print upstream identifiers
    #[arg(long)]
    pub ids: bool,
}

/// Arguments for the `browse` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct BrowseArgs {
    /// Location to start at (defaults to the first configured)
    #[arg(short, long)]
    pub location: Option<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
