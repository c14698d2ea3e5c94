//! Item-occurrence detail view.
//!
//! Answers "which dates in this range serve X, and where": one section per
//! date, one `category - period` row per sighting, in menu order.

use chrono::NaiveDate;

use crate::api::Menu;
use crate::dates::{format_date, DateStyle};
use crate::ui::MenuTheme;

/// A rendered detail view.
#[derive(Debug)]
pub struct RenderedDetail {
    pub body: String,
    /// Total sightings across all dates.
    pub occurrences: usize,
}

/// Render where `item_name` appears across `entries` (a date with `None`
/// has no menu and cannot contain the item).
pub fn render_item_detail(
    item_name: &str,
    location: &str,
    entries: &[(NaiveDate, Option<&Menu>)],
    theme: &MenuTheme,
) -> RenderedDetail {
    let mut body = format!(
        "{}\n{}\n",
        theme
            .header
            .apply_to(format!("{} in {}", item_name, location)),
        theme.dim.apply_to("This item appears on:")
    );

    let mut occurrences = 0;
    for (date, menu) in entries {
        let Some(menu) = menu else { continue };

        let sightings = menu.occurrences_of(item_name);
        if sightings.is_empty() {
            continue;
        }

        body.push_str(&format!(
            "  {}\n",
            theme
                .period
                .apply_to(format_date(*date, DateStyle::Human))
        ));
        for sighting in &sightings {
            body.push_str(&format!("    {} - {}\n", sighting.category, sighting.period));
        }
        occurrences += sightings.len();
    }

    if occurrences == 0 {
        body.push_str(&format!(
            "  {}\n",
            theme.dim.apply_to("Something went wrong :(")
        ));
    }

    RenderedDetail { body, occurrences }
}
