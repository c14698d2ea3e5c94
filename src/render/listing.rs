//! Multi-date report listing.

use crate::fetch::MenuReport;
use crate::ui::MenuTheme;

use super::filter::ItemFilter;
use super::menu::render_menu;

/// Render a chronological batch of reports as one listing.
///
/// Without a filter every fragment prints. With one, available menus that
/// matched nothing are dropped, and a single overall notice is appended when
/// no date matched at all. Returns the listing and the total match count.
pub fn render_report_listing(
    reports: &[MenuReport],
    filter: Option<&ItemFilter>,
    theme: &MenuTheme,
) -> (String, usize) {
    let mut listing = String::new();
    let mut total_matches = 0;

    for report in reports {
        let rendered = render_menu(report.menu(), &report.headline(), filter, theme);
        if filter.is_some() && rendered.matches == 0 && report.menu().is_some() {
            continue;
        }
        listing.push_str(&rendered.body);
        listing.push('\n');
        total_matches += rendered.matches;
    }

    if filter.is_some() && total_matches == 0 {
        let query = filter.map(ItemFilter::query).unwrap_or_default();
        listing.push_str(&format!(
            "{}\n",
            theme
                .dim
                .apply_to(format!("No results for \"{}\" :(", query))
        ));
    }

    (listing, total_matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Category, Item, Menu, Period};
    use crate::fetch::LoadOutcome;
    use chrono::NaiveDate;

    fn report(day: u32, outcome: LoadOutcome) -> MenuReport {
        MenuReport {
            location: "Stwest".to_string(),
            date: NaiveDate::from_ymd_opt(2017, 2, day).unwrap(),
            outcome,
        }
    }

    fn menu_of(items: &[&str]) -> Menu {
        Menu {
            periods: vec![Period {
                name: "Lunch".to_string(),
                categories: vec![Category {
                    name: "Grill".to_string(),
                    items: items
                        .iter()
                        .map(|n| Item {
                            name: n.to_string(),
                        })
                        .collect(),
                }],
            }],
        }
    }

    #[test]
    fn unfiltered_listing_includes_every_fragment() {
        let reports = vec![
            report(9, LoadOutcome::Available(menu_of(&["Pizza"]))),
            report(10, LoadOutcome::Unavailable),
            report(11, LoadOutcome::TimedOut),
        ];
        let (listing, matches) = render_report_listing(&reports, None, &MenuTheme::plain());

        assert_eq!(matches, 1);
        assert!(listing.contains("Menu for Stwest on 9 February 2017"));
        assert!(listing.contains("No menu available for Stwest on 10 February 2017"));
        assert!(listing.contains("timed out"));
    }

    #[test]
    fn filtered_listing_drops_dates_without_matches() {
        let filter = ItemFilter::new("pizza").unwrap();
        let reports = vec![
            report(9, LoadOutcome::Available(menu_of(&["Salad"]))),
            report(10, LoadOutcome::Available(menu_of(&["Pizza"]))),
        ];
        let (listing, matches) =
            render_report_listing(&reports, Some(&filter), &MenuTheme::plain());

        assert_eq!(matches, 1);
        assert!(!listing.contains("9 February 2017"));
        assert!(listing.contains("10 February 2017"));
    }

    #[test]
    fn filtered_listing_keeps_failure_headlines() {
        let filter = ItemFilter::new("pizza").unwrap();
        let reports = vec![
            report(9, LoadOutcome::TimedOut),
            report(10, LoadOutcome::Available(menu_of(&["Pizza"]))),
        ];
        let (listing, _) = render_report_listing(&reports, Some(&filter), &MenuTheme::plain());

        assert!(listing.contains("timed out"));
    }

    #[test]
    fn zero_matches_overall_appends_one_notice() {
        let filter = ItemFilter::new("pizza").unwrap();
        let reports = vec![
            report(9, LoadOutcome::Available(menu_of(&["Salad"]))),
            report(10, LoadOutcome::Available(menu_of(&["Soup"]))),
        ];
        let (listing, matches) =
            render_report_listing(&reports, Some(&filter), &MenuTheme::plain());

        assert_eq!(matches, 0);
        assert_eq!(listing.matches("No results for \"pizza\" :(").count(), 1);
    }
}
