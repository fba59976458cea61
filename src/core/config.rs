//! Map configuration loaded from an external RON file.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;

/// Default location of the configuration file.
pub const CONFIG_PATH: &str = "assets/data/config/map_config.ron";

/// Map configuration loaded from assets/data/config/map_config.ron.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Prism height along the y axis. Must be positive.
    pub extrusion_height: f32,
    /// World manifest listing the countries to build.
    pub manifest_path: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            extrusion_height: 0.2,
            manifest_path: "assets/data/world.ron".to_string(),
        }
    }
}

impl MapConfig {
    /// Parse from RON, replacing an unusable extrusion height with the default.
    pub fn from_ron(contents: &str) -> Result<Self, ron::error::SpannedError> {
        let mut config: Self = ron::from_str(contents)?;
        if !(config.extrusion_height.is_finite() && config.extrusion_height > 0.0) {
            let fallback = Self::default().extrusion_height;
            error!(
                "extrusion_height must be positive, got {}. Using {}.",
                config.extrusion_height, fallback
            );
            config.extrusion_height = fallback;
        }
        Ok(config)
    }

    /// Load map config from RON file.
    pub fn load(path: &str) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match Self::from_ron(&contents) {
                Ok(config) => {
                    info!("Loaded map config from {}", path);
                    config
                }
                Err(e) => {
                    error!("Failed to parse {}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Could not read {}: {}. Using defaults.", path, e);
                Self::default()
            }
        }
    }
}

/// System to load the map config at startup, unless one was inserted already.
pub fn load_map_config(mut commands: Commands, existing: Option<Res<MapConfig>>) {
    if existing.is_some() {
        debug!("MapConfig provided by the app, skipping {}", CONFIG_PATH);
        return;
    }
    commands.insert_resource(MapConfig::load(CONFIG_PATH));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config = MapConfig::from_ron("(extrusion_height: 1.5)").unwrap();
        assert_eq!(config.extrusion_height, 1.5);
        assert_eq!(config.manifest_path, "assets/data/world.ron");
    }

    #[test]
    fn non_positive_height_falls_back() {
        let config = MapConfig::from_ron("(extrusion_height: -3.0)").unwrap();
        assert_eq!(config.extrusion_height, 0.2);
        let config = MapConfig::from_ron("(extrusion_height: 0.0)").unwrap();
        assert_eq!(config.extrusion_height, 0.2);
    }

    #[test]
    fn unreadable_file_uses_defaults() {
        let config = MapConfig::load("does/not/exist.ron");
        assert_eq!(config.extrusion_height, 0.2);
    }

    #[test]
    fn malformed_ron_is_an_error() {
        assert!(MapConfig::from_ron("(extrusion_height: )").is_err());
    }
}
