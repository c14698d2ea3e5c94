//! Item name filtering.

use regex::{Regex, RegexBuilder};

use crate::error::{MealfinderError, Result};

/// A case-insensitive pattern matched against item names.
#[derive(Debug, Clone)]
pub struct ItemFilter {
    query: String,
    pattern: Regex,
}

impl ItemFilter {
    /// Compile a query. The query is a regular expression, so plain words
    /// behave as substring searches.
    pub fn new(query: &str) -> Result<Self> {
        let pattern = RegexBuilder::new(query)
            .case_insensitive(true)
            .build()
            .map_err(|e| MealfinderError::InvalidQuery {
                message: e.to_string(),
            })?;
        Ok(Self {
            query: query.to_string(),
            pattern,
        })
    }

    /// Whether an item name matches.
    pub fn matches(&self, name: &str) -> bool {
        self.pattern.is_match(name)
    }

    /// The query as the user typed it.
    pub fn query(&self) -> &str {
        &self.query
    }
}
