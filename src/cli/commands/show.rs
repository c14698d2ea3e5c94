//! The `show` command: fetch and display menus for a date range.

use crate::cli::args::ShowArgs;
use crate::config::MenuConfig;
use crate::error::Result;
use crate::fetch::{BatchFetcher, MenuLoader};
use crate::render::{render_report_listing, ItemFilter};
use crate::ui::{BatchProgress, MenuTheme};

use super::dispatcher::{Command, CommandResult};
use super::resolve_range;

/// The show command implementation.
pub struct ShowCommand<'a> {
    config: &'a MenuConfig,
    args: ShowArgs,
    quiet: bool,
}

impl<'a> ShowCommand<'a> {
    /// Create a new show command.
    pub fn new(config: &'a MenuConfig, args: ShowArgs, quiet: bool) -> Self {
        Self {
            config,
            args,
            quiet,
        }
    }
}

impl Command for ShowCommand<'_> {
    fn execute(&self) -> Result<CommandResult> {
        // Fail on bad input before anything is dispatched.
        self.config.location(&self.args.location)?;
        let range = resolve_range(self.config, self.args.from, self.args.to)?;
        let filter = self
            .args
            .query
            .as_deref()
            .map(ItemFilter::new)
            .transpose()?;

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

        let (listing, _) = render_report_listing(&reports, filter.as_ref(), &theme);
        print!("{}", listing);

        Ok(CommandResult::success())
    }
}
