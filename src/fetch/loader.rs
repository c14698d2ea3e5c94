//! Single-menu loading.
//!
//! One loader owns the cache and the in-flight registry behind a single
//! mutex. A load serves from cache, coalesces onto an already-dispatched
//! request for the same key, or claims the key and fetches. Only definitive
//! outcomes (available, unavailable) are cached; a timed-out or failed key
//! stays absent so the next request for it retries.

use chrono::NaiveDate;
use std::sync::{Condvar, Mutex};
use std::time::Duration;

use crate::api::{FetchError, Menu, MenuClient, UrlBuilder};
use crate::cache::{CachedMenu, InFlightRegistry, MenuCache, RequestKey};
use crate::config::MenuConfig;
use crate::dates::{format_date, DateStyle};
use crate::error::Result;

/// How long a coalesced load sleeps between re-checks while waiting for the
/// owning request to resolve. The condition variable normally wakes it much
/// sooner; this bounds a missed wakeup.
const COALESCE_POLL: Duration = Duration::from_secs(1);

/// Outcome of one load.
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    /// A menu exists and was either fetched or served from cache.
    Available(Menu),
    /// The endpoint definitively has no menu for this date (cached).
    Unavailable,
    /// No response in time. Not cached; a later load retries.
    TimedOut,
    /// Transport, HTTP, or payload failure. Not cached; a later load retries.
    Failed(FetchError),
}

impl LoadOutcome {
    /// The menu, when one is available.
    pub fn menu(&self) -> Option<&Menu> {
        match self {
            Self::Available(menu) => Some(menu),
            _ => None,
        }
    }
}

/// Resolved result for one (location, date) pair.
#[derive(Debug, Clone)]
pub struct MenuReport {
    pub location: String,
    pub date: NaiveDate,
    pub outcome: LoadOutcome,
}

impl MenuReport {
    /// One-line description of the outcome, suitable as a fragment header.
    pub fn headline(&self) -> String {
        let when = format_date(self.date, DateStyle::Human);
        match &self.outcome {
            LoadOutcome::Available(_) => format!("Menu for {} on {}", self.location, when),
            LoadOutcome::Unavailable => {
                format!("No menu available for {} on {}", self.location, when)
            }
            LoadOutcome::TimedOut => {
                format!("Menu request for {} on {} timed out", self.location, when)
            }
            LoadOutcome::Failed(error) => {
                format!("Menu request for {} on {} failed: {}", self.location, when, error)
            }
        }
    }

    /// The menu, when one is available.
    pub fn menu(&self) -> Option<&Menu> {
        self.outcome.menu()
    }
}

struct LoaderState {
    cache: MenuCache,
    in_flight: InFlightRegistry,
}

/// Fetches menus for (location, date) keys, caching definitive outcomes.
pub struct MenuLoader {
    client: MenuClient,
    urls: UrlBuilder,
    state: Mutex<LoaderState>,
    resolved: Condvar,
}

impl MenuLoader {
    /// Create a loader with a client configured from `config`.
    pub fn new(config: &MenuConfig) -> Self {
        Self::with_client(config, MenuClient::new(config.request_timeout()))
    }

    /// Create a loader with an explicit client (tests tune its timeout).
    pub fn with_client(config: &MenuConfig, client: MenuClient) -> Self {
        Self {
            client,
            urls: UrlBuilder::from_config(config),
            state: Mutex::new(LoaderState {
                cache: MenuCache::new(),
                in_flight: InFlightRegistry::new(),
            }),
            resolved: Condvar::new(),
        }
    }

    /// Load the menu for one location and date.
    ///
    /// Exactly one report per call. At most one request is ever in flight
    /// per uncached key, across all threads using this loader.
    pub fn load(&self, location: &str, date: NaiveDate) -> Result<MenuReport> {
        let url = self.urls.menu_url(location, date)?;
        let key = RequestKey::new(location, date);

        {
            let mut state = self.state.lock().unwrap();
            loop {
                if let Some(cached) = state.cache.get(location, date) {
                    let outcome = match cached {
                        CachedMenu::Available(menu) => {
                            tracing::debug!("loaded {location} menu for {date} from cache");
                            LoadOutcome::Available(menu.clone())
                        }
                        CachedMenu::Unavailable => {
                            tracing::debug!(
                                "cache shows no {location} menu exists for {date}"
                            );
                            LoadOutcome::Unavailable
                        }
                    };
                    return Ok(self.report(location, date, outcome));
                }
                if state.in_flight.register(key.clone()) {
                    break;
                }
                // Another load owns this key; wait for it to resolve, then
                // re-check. If it timed out, the key is still absent and
                // this load claims the fetch itself.
                let (guard, _) = self.resolved.wait_timeout(state, COALESCE_POLL).unwrap();
                state = guard;
            }
        }

        tracing::debug!("retrieving {url}");
        let outcome = match self.client.fetch_menu(&url) {
            Ok(Some(menu)) => LoadOutcome::Available(menu),
            Ok(None) => LoadOutcome::Unavailable,
            Err(FetchError::TimedOut) => LoadOutcome::TimedOut,
            Err(error) => LoadOutcome::Failed(error),
        };

        {
            let mut state = self.state.lock().unwrap();
            let first = state.in_flight.complete(&key);
            debug_assert!(first, "request resolved twice for {key:?}");
            match &outcome {
                LoadOutcome::Available(menu) => {
                    state
                        .cache
                        .insert(location, date, CachedMenu::Available(menu.clone()))?;
                    tracing::debug!("cached {location} menu for {date}");
                }
                LoadOutcome::Unavailable => {
                    state.cache.insert(location, date, CachedMenu::Unavailable)?;
                    tracing::debug!("no {location} menu exists for {date}");
                }
                LoadOutcome::TimedOut => {
                    tracing::debug!("request for {location} menu for {date} timed out");
                }
                LoadOutcome::Failed(error) => {
                    tracing::debug!("request for {location} menu for {date} failed: {error}");
                }
            }
        }
        self.resolved.notify_all();

        Ok(self.report(location, date, outcome))
    }

    /// Read a resolved cache entry without dispatching anything.
    pub fn cached(&self, location: &str, date: NaiveDate) -> Option<CachedMenu> {
        self.state
            .lock()
            .unwrap()
            .cache
            .get(location, date)
            .cloned()
    }

    fn report(&self, location: &str, date: NaiveDate, outcome: LoadOutcome) -> MenuReport {
        MenuReport {
            location: location.to_string(),
            date,
            outcome,
        }
    }
}
