//! Menu cache storage.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::api::Menu;
use crate::error::{MealfinderError, Result};

/// A definitively resolved outcome for one (location, date) key.
///
/// An absent key has either never been requested or only ever failed
/// (timeout, transport); those failures are deliberately not recorded so a
/// later request retries.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedMenu {
    /// The endpoint returned a menu.
    Available(Menu),
    /// The endpoint definitively has no menu for that date.
    Unavailable,
}

/// Two-level map: location name → date → resolved outcome.
///
/// Entries are written exactly once; no eviction, no TTL.
#[derive(Debug, Default)]
pub struct MenuCache {
    entries: HashMap<String, HashMap<NaiveDate, CachedMenu>>,
}

impl MenuCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The resolved outcome for a key, if any.
    pub fn get(&self, location: &str, date: NaiveDate) -> Option<&CachedMenu> {
        self.entries.get(location)?.get(&date)
    }

    /// Record a resolved outcome. Writing an occupied key is a logic error:
    /// the loader resolves each key at most once.
    pub fn insert(&mut self, location: &str, date: NaiveDate, result: CachedMenu) -> Result<()> {
        let per_location = self.entries.entry(location.to_string()).or_default();
        if per_location.contains_key(&date) {
            return Err(MealfinderError::CacheConflict {
                location: location.to_string(),
                date,
            });
        }
        per_location.insert(date, result);
        Ok(())
    }

    /// Number of resolved keys across all locations.
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
