//! The `browse` command: interactive menu browsing.
//!
//! The prompt-loop analog of the original stepper GUI: cycle locations, nudge
//! the date range endpoints (clamped to the configured maximum span), set a
//! search query, and drill into where an item appears. Menus fetched while
//! browsing stay cached for the whole session.

use std::collections::HashSet;

use chrono::NaiveDate;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use crate::api::Menu;
use crate::cli::args::BrowseArgs;
use crate::config::MenuConfig;
use crate::dates::{format_date, DateRange, DateStyle};
use crate::error::{MealfinderError, Result};
use crate::fetch::{BatchFetcher, MenuLoader, MenuReport};
use crate::render::{render_item_detail, render_report_listing, ItemFilter};
use crate::ui::{BatchProgress, MenuTheme};

use super::dispatcher::{Command, CommandResult};

const ACTIONS: [&str; 7] = [
    "Show menus",
    "Set search",
    "Next location",
    "Previous location",
    "Adjust dates",
    "Look up an item",
    "Quit",
];

const DATE_ACTIONS: [&str; 5] = [
    "Start -1 day",
    "Start +1 day",
    "End -1 day",
    "End +1 day",
    "Done",
];

/// Convert dialoguer errors to MealfinderError.
fn map_dialoguer_err(e: dialoguer::Error) -> MealfinderError {
    MealfinderError::Io(e.into())
}

/// Item names across a batch, first-seen order, no duplicates.
fn unique_item_names(reports: &[MenuReport]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for menu in reports.iter().filter_map(MenuReport::menu) {
        for period in &menu.periods {
            for category in &period.categories {
                for item in &category.items {
                    if seen.insert(item.name.clone()) {
                        names.push(item.name.clone());
                    }
                }
            }
        }
    }
    names
}

/// The browse command implementation.
pub struct BrowseCommand<'a> {
    config: &'a MenuConfig,
    args: BrowseArgs,
    quiet: bool,
}

impl<'a> BrowseCommand<'a> {
    /// Create a new browse command.
    pub fn new(config: &'a MenuConfig, args: BrowseArgs, quiet: bool) -> Self {
        Self {
            config,
            args,
            quiet,
        }
    }

    fn fetch(
        &self,
        loader: &MenuLoader,
        location: &str,
        range: DateRange,
    ) -> Result<Vec<MenuReport>> {
        let dates = range.dates();
        let progress = if self.quiet {
            BatchProgress::hidden(dates.len())
        } else {
            BatchProgress::new(dates.len())
        };
        let reports = BatchFetcher::new(loader)
            .fetch_range(location, &dates, |remaining| progress.update(remaining))?;
        progress.finish_and_clear();
        Ok(reports)
    }

    fn adjust_dates(&self, range: &mut DateRange) -> Result<()> {
        loop {
            let choice = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(format!(
                    "{} to {}",
                    format_date(range.start, DateStyle::Human),
                    format_date(range.end, DateStyle::Human)
                ))
                .items(&DATE_ACTIONS)
                .default(4)
                .interact()
                .map_err(map_dialoguer_err)?;

            match choice {
                0 => range.start_back(self.config.max_date_range),
                1 => range.start_forward(),
                2 => range.end_back(),
                3 => range.end_forward(self.config.max_date_range),
                _ => return Ok(()),
            }
        }
    }

    fn item_detail(
        &self,
        theme: &MenuTheme,
        location: &str,
        reports: &[MenuReport],
    ) -> Result<()> {
        let items = unique_item_names(reports);
        if items.is_empty() {
            println!("{}", theme.dim.apply_to("Nothing available :("));
            return Ok(());
        }

        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Which item?")
            .items(&items)
            .default(0)
            .max_length(15)
            .interact()
            .map_err(map_dialoguer_err)?;

        let entries: Vec<(NaiveDate, Option<&Menu>)> =
            reports.iter().map(|r| (r.date, r.menu())).collect();
        let rendered = render_item_detail(&items[choice], location, &entries, theme);
        print!("{}", rendered.body);
        Ok(())
    }

    fn prompt_query(&self, theme: &MenuTheme, current: Option<&str>) -> Result<Option<String>> {
        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Search for (empty clears)")
            .with_initial_text(current.unwrap_or_default())
            .allow_empty(true)
            .interact_text()
            .map_err(map_dialoguer_err)?;

        if input.is_empty() {
            return Ok(None);
        }
        match ItemFilter::new(&input) {
            Ok(_) => Ok(Some(input)),
            Err(e) => {
                println!("{}", theme.format_error(&e.to_string()));
                Ok(current.map(str::to_string))
            }
        }
    }
}

impl Command for BrowseCommand<'_> {
    fn execute(&self) -> Result<CommandResult> {
        let names = self.config.location_names();
        let mut location_index = match &self.args.location {
            Some(name) => {
                names
                    .iter()
                    .position(|n| n == name)
                    .ok_or_else(|| MealfinderError::UnknownLocation {
                        name: name.clone(),
                        known: names.join(", "),
                    })?
            }
            None => 0,
        };

        let theme = MenuTheme::auto();
        let loader = MenuLoader::new(self.config);
        let mut range = DateRange::from_today(self.config.default_span);
        let mut query: Option<String> = None;
        let mut reports: Vec<MenuReport> = Vec::new();

        loop {
            let location = names[location_index].clone();
            println!();
            let mut status = format!(
                "{}  {} to {}",
                theme.highlight.apply_to(&location),
                format_date(range.start, DateStyle::Human),
                format_date(range.end, DateStyle::Human)
            );
            if let Some(query) = &query {
                status.push_str(&format!("  {}", theme.dim.apply_to(format!("\"{query}\""))));
            }
            println!("{status}");

            let choice = Select::with_theme(&ColorfulTheme::default())
                .items(&ACTIONS)
                .default(0)
                .interact()
                .map_err(map_dialoguer_err)?;

            match choice {
                0 => {
                    reports = self.fetch(&loader, &location, range)?;
                    let filter = query.as_deref().map(ItemFilter::new).transpose()?;
                    let (listing, _) = render_report_listing(&reports, filter.as_ref(), &theme);
                    print!("{listing}");
                }
                1 => query = self.prompt_query(&theme, query.as_deref())?,
                2 => {
                    location_index = (location_index + 1) % names.len();
                    reports.clear();
                }
                3 => {
                    location_index = (location_index + names.len() - 1) % names.len();
                    reports.clear();
                }
                4 => {
                    self.adjust_dates(&mut range)?;
                    reports.clear();
                }
                5 => {
                    if reports.is_empty() {
                        reports = self.fetch(&loader, &location, range)?;
                    }
                    self.item_detail(&theme, &location, &reports)?;
                }
                _ => break,
            }
        }

        Ok(CommandResult::success())
    }
}
