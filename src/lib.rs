//! mealfinder - Campus dining menus in the terminal.
//!
//! mealfinder fetches per-location, per-date menu JSON from a campus dining
//! API, caches every definitive answer for the process lifetime, and renders
//! the results as nested, filterable text.
//!
//! # Modules
//!
//! - [`api`] - Endpoint URLs, payload model, and HTTP client
//! - [`cache`] - In-memory menu cache and the in-flight request registry
//! - [`cli`] - Command-line interface and command implementations
//! - [`config`] - Location table and fetch tuning
//! - [`dates`] - Date formatting and range helpers
//! - [`error`] - Error types and result aliases
//! - [`fetch`] - Single-menu loader and the batch coordinator
//! - [`render`] - Menu and item-detail rendering
//! - [`ui`] - Theme and progress display
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use mealfinder::dates::interpolate_dates;
//!
//! let from = NaiveDate::from_ymd_opt(2017, 2, 9).unwrap();
//! let to = NaiveDate::from_ymd_opt(2017, 2, 11).unwrap();
//! assert_eq!(interpolate_dates(from, to).len(), 3);
//! ```

pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod dates;
pub mod error;
pub mod fetch;
pub mod render;
pub mod ui;

pub use error::{MealfinderError, Result};
