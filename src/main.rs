//! World Map Prisms - Entry Point
//!
//! Builds the country hierarchy from assets/data/world.ron and opens a
//! window looking down on it. Geometry only appears once a meshing plugin
//! consumes the `PrismRequest` components left on each part.

use bevy::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "World Map Prisms".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))

        // Our map plugin
        .add_plugins(worldmap_prisms::WorldMapPlugin)

        .add_systems(Startup, setup_viewer)
        .run();
}

/// Spawn a camera and a sun light above the map.
fn setup_viewer(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(15.0, 40.0, 70.0).looking_at(Vec3::new(15.0, 0.0, 60.0), Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::XYZ,
            -std::f32::consts::FRAC_PI_3,
            std::f32::consts::FRAC_PI_6,
            0.0,
        )),
    ));
}
