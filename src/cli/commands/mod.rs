//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`mealfinder show`, `mealfinder find`)
//! - Shared configuration loading
//! - Consistent global flag handling

pub mod browse;
pub mod completions;
pub mod dispatcher;
pub mod find;
pub mod locations;
pub mod show;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

use chrono::{Duration, Local, NaiveDate};

use crate::config::MenuConfig;
use crate::dates::{format_date, DateRange, DateStyle};
use crate::error::{MealfinderError, Result};

/// Resolve `--from`/`--to` into a validated range.
///
/// Missing endpoints default to today and today plus the configured span.
/// Explicit ranges must run forward and fit within `max_date_range` days;
/// the interactive steppers clamp instead, but a one-shot command gets told.
pub(crate) fn resolve_range(
    config: &MenuConfig,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<DateRange> {
    let start = from.unwrap_or_else(|| Local::now().date_naive());
    let end = to.unwrap_or(start + Duration::days(config.default_span));

    let range = DateRange::new(start, end).ok_or_else(|| MealfinderError::InvalidDateRange {
        message: format!(
            "{} is before {}",
            format_date(end, DateStyle::Human),
            format_date(start, DateStyle::Human)
        ),
    })?;

    if range.span() > config.max_date_range {
        return Err(MealfinderError::InvalidDateRange {
            message: format!(
                "range spans {} days; the maximum is {}",
                range.span(),
                config.max_date_range
            ),
        });
    }

    Ok(range)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2017, 2, day).unwrap()
    }

    #[test]
    fn explicit_range_is_kept() {
        let range = resolve_range(&MenuConfig::default(), Some(d(9)), Some(d(11))).unwrap();
        assert_eq!(range.start, d(9));
        assert_eq!(range.end, d(11));
    }

    #[test]
    fn missing_end_uses_configured_span() {
        let range = resolve_range(&MenuConfig::default(), Some(d(9)), None).unwrap();
        assert_eq!(range.start, d(9));
        assert_eq!(range.end, d(12));
    }

    #[test]
    fn missing_start_defaults_to_today() {
        let today = Local::now().date_naive();
        let range = resolve_range(&MenuConfig::default(), None, None).unwrap();
        assert_eq!(range.start, today);
    }

    #[test]
    fn reversed_range_is_rejected() {
        let err = resolve_range(&MenuConfig::default(), Some(d(11)), Some(d(9))).unwrap_err();
        assert!(matches!(err, MealfinderError::InvalidDateRange { .. }));
    }

    #[test]
    fn oversized_range_is_rejected() {
        let err = resolve_range(&MenuConfig::default(), Some(d(1)), Some(d(20))).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("maximum"));
    }

    #[test]
    fn range_at_exactly_the_maximum_is_allowed() {
        let range = resolve_range(&MenuConfig::default(), Some(d(1)), Some(d(8))).unwrap();
        assert_eq!(range.span(), 7);
    }
}
