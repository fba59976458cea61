//! Map plugin - loads country data and builds the prism hierarchy once at startup.

use bevy::prelude::*;

use super::builder::{build_world, WorldMapRoot};
use super::data::{load_country_data, CountryRegistry};
use super::extruder::PendingPrismExtruder;
use crate::core::MapConfig;

/// Map plugin - handles country loading and world construction.
pub struct MapPlugin;

impl Plugin for MapPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (load_country_data, setup_world_map).chain());
    }
}

/// Spawn the world root and build every registered country under it.
pub fn setup_world_map(
    mut commands: Commands,
    registry: Res<CountryRegistry>,
    config: Res<MapConfig>,
) {
    let root = commands
        .spawn((
            WorldMapRoot,
            Name::new("World"),
            Transform::default(),
            Visibility::default(),
        ))
        .id();

    let report = build_world(
        &mut commands,
        root,
        registry.specs(),
        config.extrusion_height,
        &mut PendingPrismExtruder,
    );

    commands.insert_resource(report);
}
