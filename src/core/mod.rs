//! Core module - configuration shared by the rest of the crate.

mod config;
mod plugin;

pub use config::{load_map_config, MapConfig, CONFIG_PATH};
pub use plugin::CorePlugin;
