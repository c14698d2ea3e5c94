//! Error types for mealfinder operations.
//!
//! This module defines [`MealfinderError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `MealfinderError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `MealfinderError::Other`) for unexpected errors
//! - Per-date fetch failures are not errors: they are reported inline and the
//!   CLI stays usable (see `fetch::LoadOutcome`)

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for mealfinder operations.
#[derive(Debug, Error)]
pub enum MealfinderError {
    /// Referenced dining location is not in the configuration.
    #[error("Unknown location: {name} (known locations: {known})")]
    UnknownLocation { name: String, known: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Search query is not a valid pattern.
    #[error("Invalid search query: {message}")]
    InvalidQuery { message: String },

    /// Requested date range cannot be fetched.
    #[error("Invalid date range: {message}")]
    InvalidDateRange { message: String },

    /// A menu was cached twice for the same location and date.
    ///
    /// The loader guarantees one definitive resolution per key, so this
    /// indicates a logic error rather than a user mistake.
    #[error("Menu for {location} on {date} was already cached")]
    CacheConflict { location: String, date: NaiveDate },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for mealfinder operations.
pub type Result<T> = std::result::Result<T, MealfinderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_location_displays_name_and_known() {
        let err = MealfinderError::UnknownLocation {
            name: "Cafeteria".into(),
            known: "IV, Steast, Stwest".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Cafeteria"));
        assert!(msg.contains("Steast"));
    }

    #[test]
    fn config_not_found_displays_path() {
        let err = MealfinderError::ConfigNotFound {
            path: PathBuf::from("/foo/config.yml"),
        };
        assert!(err.to_string().contains("/foo/config.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = MealfinderError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn invalid_query_displays_message() {
        let err = MealfinderError::InvalidQuery {
            message: "unclosed group".into(),
        };
        assert!(err.to_string().contains("unclosed group"));
    }

    #[test]
    fn cache_conflict_displays_key() {
        let err = MealfinderError::CacheConflict {
            location: "Stwest".into(),
            date: NaiveDate::from_ymd_opt(2017, 2, 9).unwrap(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Stwest"));
        assert!(msg.contains("2017-02-09"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: MealfinderError = io_err.into();
        assert!(matches!(err, MealfinderError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(MealfinderError::InvalidDateRange {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
