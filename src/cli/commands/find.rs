//! The `find` command: which dates in a range serve a specific item.

use chrono::NaiveDate;

use crate::api::Menu;
use crate::cli::args::FindArgs;
use crate::config::MenuConfig;
use crate::error::Result;
use crate::fetch::{BatchFetcher, MenuLoader};
use crate::render::render_item_detail;
use crate::ui::{BatchProgress, MenuTheme};

use super::dispatcher::{Command, CommandResult};
use super::resolve_range;

/// The find command implementation.
pub struct FindCommand<'a> {
    config: &'a MenuConfig,
    args: FindArgs,
    quiet: bool,
}

impl<'a> FindCommand<'a> {
    /// Create a new find command.
    pub fn new(config: &'a MenuConfig, args: FindArgs, quiet: bool) -> Self {
        Self {
            config,
            args,
            quiet,
        }
    }
}

impl Command for FindCommand<'_> {
    fn execute(&self) -> Result<CommandResult> {
        self.config.location(&self.args.location)?;
        let range = resolve_range(self.config, self.args.from, self.args.to)?;

        let theme = if self.quiet {
            MenuTheme::plain()
        } else {
            MenuTheme::auto()
        };

        let loader = MenuLoader::new(self.config);
        let dates = range.dates();
        let progress = if self.quiet {
            BatchProgress::hidden(dates.len())
        } else {
            BatchProgress::new(dates.len())
        };

        let reports = BatchFetcher::new(&loader).fetch_range(
            &self.args.location,
            &dates,
            |remaining| progress.update(remaining),
        )?;
        progress.finish_and_clear();

        let entries: Vec<(NaiveDate, Option<&Menu>)> =
            reports.iter().map(|r| (r.date, r.menu())).collect();
        let rendered = render_item_detail(&self.args.item, &self.args.location, &entries, &theme);
        print!("{}", rendered.body);

        Ok(CommandResult::success())
    }
}
