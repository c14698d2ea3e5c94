//! Menu payload model.
//!
//! The upstream JSON nests ordered periods, categories, and items; order is
//! preserved from the wire through rendering. Extra upstream fields are
//! ignored. A response body without a `menu` field means no menu exists for
//! that location and date.

use serde::{Deserialize, Serialize};

/// One day's menu for one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    #[serde(default)]
    pub periods: Vec<Period>,
}

/// A dining period (e.g. Breakfast).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Period {
    pub name: String,
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// A food station within a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// A single served item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
}

/// Response envelope from the menu endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuResponse {
    #[serde(default)]
    pub menu: Option<Menu>,
}

/// Where an item appears within a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub period: String,
    pub category: String,
}

impl Menu {
    /// Total number of items across all periods and categories.
    pub fn item_count(&self) -> usize {
        self.periods
            .iter()
            .flat_map(|p| &p.categories)
            .map(|c| c.items.len())
            .sum()
    }

    /// Every (period, category) pair serving an item with exactly this name,
    /// in menu order.
    pub fn occurrences_of(&self, item_name: &str) -> Vec<Occurrence> {
        let mut occurrences = Vec::new();
        for period in &self.periods {
            for category in &period.categories {
                for item in &category.items {
                    if item.name == item_name {
                        occurrences.push(Occurrence {
                            period: period.name.clone(),
                            category: category.name.clone(),
                        });
                    }
                }
            }
        }
        occurrences
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_menu() -> Menu {
        serde_json::from_value(serde_json::json!({
            "periods": [
                {
                    "name": "Breakfast",
                    "categories": [
                        {"name": "Bakery", "items": [{"name": "Pizza Bagel"}, {"name": "Muffin"}]},
                        {"name": "Grill", "items": []}
                    ]
                },
                {
                    "name": "Dinner",
                    "categories": [
                        {"name": "Pizzeria", "items": [{"name": "Pizza"}, {"name": "Salad"}]}
                    ]
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn parses_nested_payload_in_order() {
        let menu = sample_menu();
        assert_eq!(menu.periods.len(), 2);
        assert_eq!(menu.periods[0].name, "Breakfast");
        assert_eq!(menu.periods[0].categories[0].items[0].name, "Pizza Bagel");
        assert_eq!(menu.periods[1].categories[0].items[1].name, "Salad");
    }

    #[test]
    fn response_with_menu_field_is_available() {
        let response: MenuResponse =
            serde_json::from_str(r#"{"menu": {"periods": []}}"#).unwrap();
        assert!(response.menu.is_some());
    }

    #[test]
    fn response_without_menu_field_is_unavailable() {
        let response: MenuResponse = serde_json::from_str(r#"{"status": "no menu"}"#).unwrap();
        assert!(response.menu.is_none());
    }

    #[test]
    fn extra_upstream_fields_are_ignored() {
        let menu: Menu = serde_json::from_str(
            r#"{"periods": [{"name": "Lunch", "id": "xyz", "sort": 2, "categories": []}]}"#,
        )
        .unwrap();
        assert_eq!(menu.periods[0].name, "Lunch");
    }

    #[test]
    fn item_count_spans_all_periods() {
        assert_eq!(sample_menu().item_count(), 4);
    }

    #[test]
    fn occurrences_match_exact_name_only() {
        let menu = sample_menu();
        let hits = menu.occurrences_of("Pizza");
        assert_eq!(
            hits,
            vec![Occurrence {
                period: "Dinner".to_string(),
                category: "Pizzeria".to_string(),
            }]
        );
        assert!(menu.occurrences_of("pizza").is_empty());
    }

    #[test]
    fn occurrences_of_absent_item_are_empty() {
        assert!(sample_menu().occurrences_of("Tacos").is_empty());
    }
}
