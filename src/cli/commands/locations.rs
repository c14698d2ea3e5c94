//! The `locations` command: list configured dining locations.

use crate::cli::args::LocationsArgs;
use crate::config::MenuConfig;
use crate::error::Result;
use crate::ui::MenuTheme;

use super::dispatcher::{Command, CommandResult};

/// The locations command implementation.
pub struct LocationsCommand<'a> {
    config: &'a MenuConfig,
    args: LocationsArgs,
}

impl<'a> LocationsCommand<'a> {
    /// Create a new locations command.
    pub fn new(config: &'a MenuConfig, args: LocationsArgs) -> Self {
        Self { config, args }
    }

    fn listing(&self, theme: &MenuTheme) -> String {
        let mut out = String::new();
        for (name, ids) in &self.config.locations {
            if self.args.ids {
                out.push_str(&format!(
                    "{}  {}\n",
                    theme.highlight.apply_to(name),
                    theme.dim.apply_to(format!(
                        "location_id={} site_id={}",
                        ids.location_id, ids.site_id
                    ))
                ));
            } else {
                out.push_str(&format!("{}\n", name));
            }
        }
        out
    }
}

impl Command for LocationsCommand<'_> {
    fn execute(&self) -> Result<CommandResult> {
        print!("{}", self.listing(&MenuTheme::auto()));
        Ok(CommandResult::success())
    }
}
