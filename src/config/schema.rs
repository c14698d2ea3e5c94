//! Configuration schema definitions.
//!
//! This module contains the struct definitions that map to the YAML
//! configuration file format, plus the built-in defaults.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

use crate::error::{MealfinderError, Result};

/// Root configuration structure for config.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Base endpoint for menu JSON requests.
    pub base_url: String,

    /// Upstream `platform` query parameter.
    pub platform: String,

    /// Per-request timeout in seconds (a random jitter up to one second is
    /// added on dispatch).
    pub request_timeout_secs: u64,

    /// Largest span in days a date range may cover.
    pub max_date_range: i64,

    /// Days past today covered by the default range.
    pub default_span: i64,

    /// Dining locations by name. Sorted iteration keeps stepper order
    /// deterministic.
    pub locations: BTreeMap<String, LocationIds>,
}

/// Upstream identifiers for one dining location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationIds {
    pub location_id: String,
    pub site_id: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            platform: "0".to_string(),
            request_timeout_secs: 15,
            max_date_range: 7,
            default_span: 3,
            locations: default_locations(),
        }
    }
}

fn default_base_url() -> String {
    "https://new.dineoncampus.com/v1/location/menu.json".to_string()
}

fn default_locations() -> BTreeMap<String, LocationIds> {
    let mut locations = BTreeMap::new();
    locations.insert(
        "Stwest".to_string(),
        LocationIds {
            location_id: "586d05e4ee596f6e6c04b528".to_string(),
            site_id: "5751fd2b90975b60e048929a".to_string(),
        },
    );
    locations.insert(
        "Steast".to_string(),
        LocationIds {
            location_id: "586d05e4ee596f6e6c04b527".to_string(),
            site_id: "5751fd2b90975b60e048929a".to_string(),
        },
    );
    locations.insert(
        "IV".to_string(),
        LocationIds {
            location_id: "586d17503191a27120e60dec".to_string(),
            site_id: "5751fd2b90975b60e048929a".to_string(),
        },
    );
    locations
}

impl MenuConfig {
    /// Look up a location by name.
    pub fn location(&self, name: &str) -> Result<&LocationIds> {
        self.locations
            .get(name)
            .ok_or_else(|| MealfinderError::UnknownLocation {
                name: name.to_string(),
                known: self.location_names().join(", "),
            })
    }

    /// Location names in deterministic (sorted) order.
    pub fn location_names(&self) -> Vec<String> {
        self.locations.keys().cloned().collect()
    }

    /// Per-request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Check structural constraints.
    pub fn validate(&self) -> Result<()> {
        if self.locations.is_empty() {
            return Err(MealfinderError::ConfigValidationError {
                message: "at least one location must be configured".to_string(),
            });
        }
        if self.request_timeout_secs == 0 {
            return Err(MealfinderError::ConfigValidationError {
                message: "request_timeout_secs must be non-zero".to_string(),
            });
        }
        if self.max_date_range < 0 || self.default_span < 0 {
            return Err(MealfinderError::ConfigValidationError {
                message: "date range settings must be non-negative".to_string(),
            });
        }
        if self.default_span > self.max_date_range {
            return Err(MealfinderError::ConfigValidationError {
                message: format!(
                    "default_span ({}) exceeds max_date_range ({})",
                    self.default_span, self.max_date_range
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = MenuConfig::default();
        config.validate().unwrap();
        assert_eq!(config.request_timeout_secs, 15);
        assert_eq!(config.max_date_range, 7);
        assert_eq!(config.locations.len(), 3);
    }

    #[test]
    fn location_names_are_sorted() {
        let config = MenuConfig::default();
        assert_eq!(config.location_names(), vec!["IV", "Steast", "Stwest"]);
    }

    #[test]
    fn known_location_resolves() {
        let config = MenuConfig::default();
        let ids = config.location("Stwest").unwrap();
        assert_eq!(ids.location_id, "586d05e4ee596f6e6c04b528");
    }

    #[test]
    fn unknown_location_lists_known_names() {
        let config = MenuConfig::default();
        let err = config.location("Cafeteria").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Cafeteria"));
        assert!(msg.contains("Stwest"));
    }

    #[test]
    fn empty_locations_fail_validation() {
        let config = MenuConfig {
            locations: BTreeMap::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_timeout_fails_validation() {
        let config = MenuConfig {
            request_timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn default_span_beyond_max_fails_validation() {
        let config = MenuConfig {
            default_span: 10,
            max_date_range: 7,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let config: MenuConfig = serde_yaml::from_str("request_timeout_secs: 5\n").unwrap();
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.max_date_range, 7);
        assert!(!config.locations.is_empty());
    }

    #[test]
    fn yaml_locations_replace_defaults() {
        let yaml = r#"
locations:
  Commons:
    location_id: abc123
    site_id: def456
"#;
        let config: MenuConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.location_names(), vec!["Commons"]);
        assert_eq!(config.location("Commons").unwrap().site_id, "def456");
    }
}
