//! HTTP client for the menu endpoint.
//!
//! Each fetch is one GET with a per-request timeout. A small random jitter
//! is added to the timeout so that a batch of simultaneous requests does not
//! give up in lockstep.

use rand::Rng;
use std::time::Duration;
use thiserror::Error;

use super::model::{Menu, MenuResponse};

/// Upper bound on the random addition to the request timeout.
const TIMEOUT_JITTER: Duration = Duration::from_millis(1000);

/// Why a fetch produced no definitive menu outcome.
///
/// None of these are cached; the same key may be requested again later.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// No response within the timeout (plus jitter).
    #[error("request timed out")]
    TimedOut,

    /// The endpoint answered with a non-success status.
    #[error("HTTP {status} from menu endpoint")]
    Status { status: reqwest::StatusCode },

    /// Connection-level failure.
    #[error("network error: {0}")]
    Transport(String),

    /// The body was not a well-formed menu response. Distinct from a
    /// well-formed response without a `menu` field, which is a definitive
    /// "unavailable".
    #[error("malformed menu payload: {0}")]
    Malformed(String),
}

/// Fetches menu JSON over HTTP/HTTPS.
pub struct MenuClient {
    client: reqwest::blocking::Client,
    timeout: Duration,
    jitter: Duration,
}

impl MenuClient {
    /// Create a client with the given base timeout and the default jitter.
    pub fn new(timeout: Duration) -> Self {
        Self::with_jitter(timeout, TIMEOUT_JITTER)
    }

    /// Create a client with an explicit jitter bound (zero disables it).
    pub fn with_jitter(timeout: Duration, jitter: Duration) -> Self {
        Self {
            client: reqwest::blocking::Client::builder()
                .user_agent("mealfinder")
                .build()
                .expect("Failed to build HTTP client"),
            timeout,
            jitter,
        }
    }

    /// The configured base timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch one menu URL.
    ///
    /// `Ok(Some(menu))` when the payload carries a menu, `Ok(None)` when the
    /// endpoint definitively has none for that date.
    pub fn fetch_menu(&self, url: &str) -> std::result::Result<Option<Menu>, FetchError> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout + self.jitter_amount())
            .send()
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status });
        }

        let body = response.text().map_err(classify)?;
        let parsed: MenuResponse =
            serde_json::from_str(&body).map_err(|e| FetchError::Malformed(e.to_string()))?;

        Ok(parsed.menu)
    }

    fn jitter_amount(&self) -> Duration {
        let max_ms = self.jitter.as_millis() as u64;
        if max_ms == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(rand::rng().random_range(0..=max_ms))
    }
}

fn classify(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::TimedOut
    } else {
        FetchError::Transport(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client() -> MenuClient {
        MenuClient::with_jitter(Duration::from_secs(2), Duration::ZERO)
    }

    #[test]
    fn default_client_keeps_timeout() {
        let client = MenuClient::new(Duration::from_secs(15));
        assert_eq!(client.timeout(), Duration::from_secs(15));
    }

    #[test]
    fn jitter_stays_within_bound() {
        let client = MenuClient::with_jitter(Duration::from_secs(1), Duration::from_millis(50));
        for _ in 0..20 {
            assert!(client.jitter_amount() <= Duration::from_millis(50));
        }
    }

    #[test]
    fn zero_jitter_is_exact() {
        assert_eq!(client().jitter_amount(), Duration::ZERO);
    }

    #[test]
    fn menu_payload_parses() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/menu.json");
            then.status(200)
                .body(r#"{"menu": {"periods": [{"name": "Lunch", "categories": []}]}}"#);
        });

        let menu = client().fetch_menu(&server.url("/menu.json")).unwrap();
        assert_eq!(menu.unwrap().periods[0].name, "Lunch");
    }

    #[test]
    fn missing_menu_field_is_none() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/menu.json");
            then.status(200).body(r#"{"closed": true}"#);
        });

        let menu = client().fetch_menu(&server.url("/menu.json")).unwrap();
        assert!(menu.is_none());
    }

    #[test]
    fn non_success_status_is_reported() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/menu.json");
            then.status(503);
        });

        let err = client().fetch_menu(&server.url("/menu.json")).unwrap_err();
        assert!(matches!(err, FetchError::Status { status } if status.as_u16() == 503));
    }

    #[test]
    fn unparseable_body_is_malformed() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/menu.json");
            then.status(200).body(r#"{"menu": "not an object"}"#);
        });

        let err = client().fetch_menu(&server.url("/menu.json")).unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
    }

    #[test]
    fn slow_response_times_out() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/menu.json");
            then.status(200)
                .delay(Duration::from_millis(700))
                .body(r#"{"menu": null}"#);
        });

        let fast = MenuClient::with_jitter(Duration::from_millis(100), Duration::ZERO);
        let err = fast.fetch_menu(&server.url("/menu.json")).unwrap_err();
        assert!(matches!(err, FetchError::TimedOut));
    }

    #[test]
    fn connection_refused_is_transport() {
        // Port 9 (discard) is almost never listening locally.
        let err = client().fetch_menu("http://127.0.0.1:9/menu.json").unwrap_err();
        assert!(matches!(
            err,
            FetchError::Transport(_) | FetchError::TimedOut
        ));
    }
}
