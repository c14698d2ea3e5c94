//! Batch fetching over a date range.
//!
//! One scoped worker thread per date; results stream back over a channel so
//! the caller sees a remaining-count progress event as each load settles.
//! Arrival order depends on network latency; the final report list is sorted
//! chronologically, with input position breaking ties, before it is returned.

use chrono::NaiveDate;
use std::sync::mpsc;
use std::thread;

use crate::error::Result;

use super::loader::{MenuLoader, MenuReport};

/// Coordinates one multi-date fetch against a shared loader.
pub struct BatchFetcher<'a> {
    loader: &'a MenuLoader,
}

impl<'a> BatchFetcher<'a> {
    pub fn new(loader: &'a MenuLoader) -> Self {
        Self { loader }
    }

    /// Fetch every date in `dates` for `location`.
    ///
    /// `progress` receives the number of still-unsettled requests after each
    /// arrival (total-1 down to 0). Per-date fetch failures are reports, not
    /// errors; only loader-level faults (unknown location, cache conflict)
    /// abort the batch.
    pub fn fetch_range(
        &self,
        location: &str,
        dates: &[NaiveDate],
        mut progress: impl FnMut(usize),
    ) -> Result<Vec<MenuReport>> {
        let total = dates.len();
        let (tx, rx) = mpsc::channel();

        let mut collected = thread::scope(|scope| -> Result<Vec<(usize, MenuReport)>> {
            for (position, &date) in dates.iter().enumerate() {
                let tx = tx.clone();
                scope.spawn(move || {
                    let report = self.loader.load(location, date);
                    // The receiver is gone if an earlier load aborted the batch.
                    let _ = tx.send((position, report));
                });
            }
            drop(tx);

            let mut collected = Vec::with_capacity(total);
            for (position, report) in rx {
                collected.push((position, report?));
                progress(total - collected.len());
            }
            Ok(collected)
        })?;

        collected.sort_by_key(|(position, report)| (report.date, *position));
        Ok(collected.into_iter().map(|(_, report)| report).collect())
    }
}
