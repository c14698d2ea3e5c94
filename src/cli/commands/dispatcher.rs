//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{BrowseArgs, Cli, Commands};
use crate::config::MenuConfig;
use crate::error::Result;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    fn execute(&self) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config: MenuConfig,
    quiet: bool,
}

impl CommandDispatcher {
    /// Create a new dispatcher over a loaded configuration.
    pub fn new(config: MenuConfig, quiet: bool) -> Self {
        Self { config, quiet }
    }

    /// The configuration commands run against.
    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// Dispatch and execute a command.
    ///
    /// No subcommand starts the interactive browser.
    pub fn dispatch(&self, cli: &Cli) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Show(args)) => {
                show::ShowCommand::new(&self.config, args.clone(), self.quiet).execute()
            }
            Some(Commands::Find(args)) => {
                find::FindCommand::new(&self.config, args.clone(), self.quiet).execute()
            }
            Some(Commands::Locations(args)) => {
                locations::LocationsCommand::new(&self.config, args.clone()).execute()
            }
            Some(Commands::Browse(args)) => {
                browse::BrowseCommand::new(&self.config, args.clone(), self.quiet).execute()
            }
            Some(Commands::Completions(args)) => {
                completions::CompletionsCommand::new(args.clone()).execute()
            }
            None => {
                browse::BrowseCommand::new(&self.config, BrowseArgs::default(), self.quiet)
                    .execute()
            }
        }
    }
}

use super::{browse, completions, find, locations, show};

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn success_result_has_zero_exit_code() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn failure_result_keeps_exit_code() {
        let result = CommandResult::failure(3);
        assert!(!result.success);
        assert_eq!(result.exit_code, 3);
    }

    #[test]
    fn dispatcher_exposes_config() {
        let dispatcher = CommandDispatcher::new(MenuConfig::default(), false);
        assert!(!dispatcher.config().locations.is_empty());
    }

    #[test]
    fn locations_command_dispatches() {
        let dispatcher = CommandDispatcher::new(MenuConfig::default(), true);
        let cli = Cli::parse_from(["mealfinder", "locations"]);
        let result = dispatcher.dispatch(&cli).unwrap();
        assert!(result.success);
    }

    #[test]
    fn unknown_location_surfaces_through_dispatch() {
        let dispatcher = CommandDispatcher::new(MenuConfig::default(), true);
        let cli = Cli::parse_from(["mealfinder", "show", "--location", "Nowhere"]);
        assert!(dispatcher.dispatch(&cli).is_err());
    }
}
