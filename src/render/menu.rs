//! Menu fragment rendering.
//!
//! The terminal analog of the original nested display: a headline, then an
//! indented section per period, per category, per item. The match count
//! lets callers drop fragments that found nothing for a query.

use crate::api::Menu;
use crate::ui::MenuTheme;

use super::filter::ItemFilter;

/// A rendered per-date fragment.
#[derive(Debug)]
pub struct RenderedMenu {
    /// Display text, newline-terminated lines.
    pub body: String,
    /// Number of items included (after filtering).
    pub matches: usize,
}

/// Render one menu (or its absence) under a headline.
///
/// Filtering keeps matching items only and omits empty periods and
/// categories; without a filter everything shows, and an empty category
/// renders an explicit placeholder row. Zero results replace the body with
/// a notice. A `None` menu renders just the headline, which already carries
/// the reason.
pub fn render_menu(
    menu: Option<&Menu>,
    headline: &str,
    filter: Option<&ItemFilter>,
    theme: &MenuTheme,
) -> RenderedMenu {
    let Some(menu) = menu else {
        return RenderedMenu {
            body: format!("{}\n", theme.dim.apply_to(headline)),
            matches: 0,
        };
    };

    let mut body = format!("{}\n", theme.header.apply_to(headline));

    if filter.is_none() && menu.item_count() == 0 {
        body.push_str(&format!("  {}\n", theme.dim.apply_to("Nothing available :(")));
        return RenderedMenu { body, matches: 0 };
    }

    let mut sections = String::new();
    let mut matches = 0;

    for period in &menu.periods {
        let mut period_block = String::new();
        let mut period_matches = 0;

        for category in &period.categories {
            let mut rows = String::new();
            let mut category_matches = 0;

            for item in &category.items {
                let included = filter.map_or(true, |f| f.matches(&item.name));
                if included {
                    rows.push_str(&format!("      {}\n", item.name));
                    category_matches += 1;
                }
            }

            if category_matches > 0 {
                period_block.push_str(&format!("    {}\n", theme.category.apply_to(&category.name)));
                period_block.push_str(&rows);
            } else if filter.is_none() {
                // Empty stations still show up when not searching.
                period_block.push_str(&format!("    {}\n", theme.category.apply_to(&category.name)));
                period_block.push_str(&format!("      {}\n", theme.dim.apply_to("Nothing :)")));
            }
            period_matches += category_matches;
        }

        if period_matches > 0 || filter.is_none() {
            sections.push_str(&format!("  {}\n", theme.period.apply_to(&period.name)));
            sections.push_str(&period_block);
        }
        matches += period_matches;
    }

    if matches == 0 {
        // Only reachable while filtering; the zero-item case returned above.
        let query = filter.map(ItemFilter::query).unwrap_or_default();
        body.push_str(&format!(
            "  {}\n",
            theme.dim.apply_to(format!("No results for \"{}\" :(", query))
        ));
        return RenderedMenu { body, matches: 0 };
    }

    if let Some(filter) = filter {
        body.push_str(&format!(
            "  {}\n",
            theme
                .dim
                .apply_to(format!("Showing results for \"{}\"", filter.query()))
        ));
    }
    body.push_str(&sections);

    RenderedMenu { body, matches }
}
