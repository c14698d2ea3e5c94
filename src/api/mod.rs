//! Dining API surface: endpoint URLs, payload model, HTTP client.

pub mod client;
pub mod model;
pub mod url;

pub use client::{FetchError, MenuClient};
pub use model::{Category, Item, Menu, MenuResponse, Occurrence, Period};
pub use url::UrlBuilder;
