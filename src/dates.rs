//! Date formatting and range helpers.
//!
//! Menus are keyed by calendar day. The wire format and cache labels use the
//! machine style (`yyyy-mm-dd`); everything the user reads uses the human
//! style (`9 February 2017`).

use chrono::{Datelike, Duration, Local, NaiveDate};

/// How a date should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `yyyy-mm-dd`, zero-padded. Used in request URLs and cache keys.
    Machine,
    /// `D MonthName YYYY`, unpadded day. Used in headlines and prompts.
    Human,
}

/// Format a date in the given style.
pub fn format_date(date: NaiveDate, style: DateStyle) -> String {
    match style {
        DateStyle::Machine => date.format("%Y-%m-%d").to_string(),
        DateStyle::Human => format!("{} {} {}", date.day(), date.format("%B"), date.year()),
    }
}

/// Signed whole-day difference from `from` to `to`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Every date from `start` through `end` inclusive, at a daily step.
///
/// `start == end` yields a single date. A reversed range yields nothing;
/// ranges are validated before they get here.
pub fn interpolate_dates(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut day = start;
    while day <= end {
        dates.push(day);
        day += Duration::days(1);
    }
    dates
}

/// An inclusive date range with stepper operations.
///
/// Moving one endpoint past the other drags the other endpoint along, and
/// widening past `max_span` days drags the far endpoint to keep the span at
/// the maximum. These are the rules the interactive browser exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range. Returns `None` if `end` precedes `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Today through today plus `span` days.
    pub fn from_today(span: i64) -> Self {
        let start = Local::now().date_naive();
        Self {
            start,
            end: start + Duration::days(span.max(0)),
        }
    }

    /// Number of days covered, inclusive.
    pub fn len(&self) -> usize {
        (days_between(self.start, self.end) + 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// All dates in the range, chronological.
    pub fn dates(&self) -> Vec<NaiveDate> {
        interpolate_dates(self.start, self.end)
    }

    /// Current span in days (0 for a single-day range).
    pub fn span(&self) -> i64 {
        days_between(self.start, self.end)
    }

    /// Move the start one day earlier, dragging the end if the span would
    /// exceed `max_span`.
    pub fn start_back(&mut self, max_span: i64) {
        self.start -= Duration::days(1);
        if self.span() > max_span {
            self.end = self.start + Duration::days(max_span);
        }
    }

    /// Move the start one day later, dragging the end if it would be passed.
    pub fn start_forward(&mut self) {
        self.start += Duration::days(1);
        if self.span() < 0 {
            self.end = self.start;
        }
    }

    /// Move the end one day earlier, dragging the start if it would be passed.
    pub fn end_back(&mut self) {
        self.end -= Duration::days(1);
        if self.span() < 0 {
            self.start = self.end;
        }
    }

    /// Move the end one day later, dragging the start if the span would
    /// exceed `max_span`.
    pub fn end_forward(&mut self, max_span: i64) {
        self.end += Duration::days(1);
        if self.span() > max_span {
            self.start = self.end - Duration::days(max_span);
        }
    }
}
