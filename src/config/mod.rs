//! Configuration: the location table and fetch tuning.
//!
//! Configuration comes from a YAML file (`--config` path, else
//! `~/.config/mealfinder/config.yml`) and falls back to built-in defaults
//! matching the observed deployment.

pub mod loader;
pub mod schema;

pub use loader::{default_config_path, load_config};
pub use schema::{LocationIds, MenuConfig};
