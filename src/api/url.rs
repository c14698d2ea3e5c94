//! Menu endpoint URL construction.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::config::{LocationIds, MenuConfig};
use crate::dates::{format_date, DateStyle};
use crate::error::{MealfinderError, Result};

/// Builds request URLs for the menu endpoint.
///
/// A request addresses one location on one day:
/// `{base}?platform={p}&date={yyyy-mm-dd}&location_id={l}&site_id={s}`.
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    base_url: String,
    platform: String,
    locations: BTreeMap<String, LocationIds>,
}

impl UrlBuilder {
    /// Create a builder from the configured endpoint and location table.
    pub fn from_config(config: &MenuConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            platform: config.platform.clone(),
            locations: config.locations.clone(),
        }
    }

    /// The URL for one location's menu on one date.
    ///
    /// A location missing from the table is an explicit error; no request
    /// is ever dispatched with partial parameters.
    pub fn menu_url(&self, location: &str, date: NaiveDate) -> Result<String> {
        let ids = self
            .locations
            .get(location)
            .ok_or_else(|| MealfinderError::UnknownLocation {
                name: location.to_string(),
                known: self
                    .locations
                    .keys()
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", "),
            })?;

        Ok(format!(
            "{}?platform={}&date={}&location_id={}&site_id={}",
            self.base_url,
            self.platform,
            format_date(date, DateStyle::Machine),
            ids.location_id,
            ids.site_id
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> UrlBuilder {
        UrlBuilder::from_config(&MenuConfig::default())
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2017, 2, 9).unwrap()
    }

    #[test]
    fn url_includes_all_query_parameters() {
        let url = builder().menu_url("Stwest", date()).unwrap();
        assert_eq!(
            url,
            "https://new.dineoncampus.com/v1/location/menu.json\
             ?platform=0&date=2017-02-09\
             &location_id=586d05e4ee596f6e6c04b528\
             &site_id=5751fd2b90975b60e048929a"
        );
    }

    #[test]
    fn date_is_machine_formatted() {
        let url = builder()
            .menu_url("IV", NaiveDate::from_ymd_opt(2017, 11, 3).unwrap())
            .unwrap();
        assert!(url.contains("date=2017-11-03"));
    }

    #[test]
    fn unknown_location_is_an_error() {
        let err = builder().menu_url("Cafeteria", date()).unwrap_err();
        assert!(matches!(err, MealfinderError::UnknownLocation { .. }));
        assert!(err.to_string().contains("Cafeteria"));
    }
}
