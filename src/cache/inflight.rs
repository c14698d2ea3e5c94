//! In-flight request registry.

use chrono::NaiveDate;
use std::collections::HashSet;

/// Identity of one dispatched menu request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestKey {
    pub location: String,
    pub date: NaiveDate,
}

impl RequestKey {
    pub fn new(location: &str, date: NaiveDate) -> Self {
        Self {
            location: location.to_string(),
            date,
        }
    }
}

/// Tracks requests that have been dispatched but not yet resolved.
///
/// `register` claims a key; `complete` releases it and reports whether this
/// call was the one that released it. Whichever of {response, timeout}
/// completes a key first wins; the loser observes `false` and must not act.
#[derive(Debug, Default)]
pub struct InFlightRegistry {
    pending: HashSet<RequestKey>,
}

impl InFlightRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a key. Returns `false` if it is already in flight.
    pub fn register(&mut self, key: RequestKey) -> bool {
        self.pending.insert(key)
    }

    /// Whether a key is currently in flight.
    pub fn contains(&self, key: &RequestKey) -> bool {
        self.pending.contains(key)
    }

    /// Release a key. Returns `true` only for the first release; later
    /// calls for the same key are no-ops.
    pub fn complete(&mut self, key: &RequestKey) -> bool {
        self.pending.remove(key)
    }

    /// Number of requests still in flight.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
