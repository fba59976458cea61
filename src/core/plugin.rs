//! Core plugin that sets up configuration.

use bevy::prelude::*;

use super::config::load_map_config;

/// Core plugin - must be added first as the map plugin reads its config.
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_map_config);
    }
}
