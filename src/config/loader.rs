//! Configuration loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MealfinderError, Result};

use super::schema::MenuConfig;

/// Default config file location (`~/.config/mealfinder/config.yml`).
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join("mealfinder")
        .join("config.yml")
}

/// Load configuration.
///
/// An explicit path must exist. Without one, the default path is used when
/// present and the built-in defaults otherwise.
pub fn load_config(explicit: Option<&Path>) -> Result<MenuConfig> {
    let config = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(MealfinderError::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            parse_file(path)?
        }
        None => {
            let path = default_config_path();
            if path.exists() {
                parse_file(&path)?
            } else {
                MenuConfig::default()
            }
        }
    };

    config.validate()?;
    Ok(config)
}

fn parse_file(path: &Path) -> Result<MenuConfig> {
    let content = fs::read_to_string(path)?;
    serde_yaml::from_str(&content).map_err(|e| MealfinderError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
