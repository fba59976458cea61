//! World Map Prisms - extruded country polygons as a Bevy scene hierarchy.
//!
//! Pre-exported country boundary polygons are turned into a tree of named
//! entities, one container per country and one child per polygon part. Each
//! part is handed to a [`map::PrismExtruder`] which attaches the 3D prism.
//!
//! # Architecture
//!
//! - **Core**: configuration (extrusion height, manifest location)
//! - **Map**: country data loading, hex colours, hierarchy construction

pub mod core;
pub mod map;

use bevy::prelude::*;

/// Main plugin that adds all sub-plugins.
pub struct WorldMapPlugin;

impl Plugin for WorldMapPlugin {
    fn build(&self, app: &mut App) {
        app
            // Config (must be first)
            .add_plugins(core::CorePlugin)

            // Country loading and world construction
            .add_plugins(map::MapPlugin);
    }
}
