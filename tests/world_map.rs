//! Builds the bundled sample world through the full plugin stack.

use bevy::prelude::*;
use worldmap_prisms::core::MapConfig;
use worldmap_prisms::map::{
    Country, CountryColor, CountryPart, CountryRegistry, PrismRequest, WorldBuildReport,
    WorldMapRoot,
};
use worldmap_prisms::WorldMapPlugin;

/// Minimal app with the map plugin; one update runs the startup systems.
fn world_map_app(config: Option<MapConfig>) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    if let Some(config) = config {
        app.insert_resource(config);
    }
    app.add_plugins(WorldMapPlugin);
    app.update();
    app
}

fn part_names(app: &App, country: Entity) -> Vec<String> {
    let world = app.world();
    world
        .get::<Children>(country)
        .map(|children| {
            children
                .iter()
                .map(|child| world.get::<Name>(*child).unwrap().as_str().to_string())
                .collect()
        })
        .unwrap_or_default()
}

#[test]
fn sample_world_builds_every_country() {
    let app = world_map_app(None);

    let registry = app.world().resource::<CountryRegistry>();
    assert_eq!(registry.countries.len(), 3);

    let report = app.world().resource::<WorldBuildReport>();
    assert!(report.is_complete(), "failures: {:?}", report.failed);
    let names: Vec<&str> = report.built.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, ["Sweden", "Denmark", "Iceland"]);

    let sweden = report.country("Sweden").unwrap();
    assert_eq!(part_names(&app, sweden), ["Sweden_1", "Sweden_2"]);
    let iceland = report.country("Iceland").unwrap();
    assert_eq!(part_names(&app, iceland), ["Iceland_1"]);
}

#[test]
fn countries_hang_under_a_single_root() {
    let mut app = world_map_app(None);

    let roots: Vec<Entity> = app
        .world_mut()
        .query_filtered::<Entity, With<WorldMapRoot>>()
        .iter(app.world())
        .collect();
    assert_eq!(roots.len(), 1);

    let mut countries = app.world_mut().query_filtered::<&Parent, With<Country>>();
    let parents: Vec<Entity> = countries.iter(app.world()).map(|p| p.get()).collect();
    assert_eq!(parents.len(), 3);
    assert!(parents.iter().all(|p| *p == roots[0]));
}

#[test]
fn parts_carry_prism_requests() {
    let mut app = world_map_app(None);

    let mut parts = app.world_mut().query::<(&Name, &CountryPart, &PrismRequest)>();
    let requests: Vec<(String, usize, PrismRequest)> = parts
        .iter(app.world())
        .map(|(name, part, request)| (name.as_str().to_string(), part.index, request.clone()))
        .collect();
    assert_eq!(requests.len(), 5);

    for (name, index, request) in &requests {
        assert_eq!(&request.name, name);
        assert!(name.ends_with(&format!("_{}", index)));
        assert_eq!(request.height, 0.2);
        assert!(request.closed);
        assert!(request.outline.len() >= 3);
    }

    let gotland = requests.iter().find(|(name, ..)| name == "Sweden_2").unwrap();
    assert_eq!(gotland.2.color, CountryColor::rgb(255, 255, 179));
    let iceland = requests.iter().find(|(name, ..)| name == "Iceland_1").unwrap();
    assert_eq!(iceland.2.color, CountryColor::WHITE);
}

#[test]
fn inserted_config_overrides_file() {
    let app = world_map_app(Some(MapConfig {
        extrusion_height: 1.5,
        ..default()
    }));

    let world = app.world();
    let report = world.resource::<WorldBuildReport>();
    let denmark = report.country("Denmark").unwrap();
    let first_part = world.get::<Children>(denmark).unwrap()[0];
    assert_eq!(world.get::<PrismRequest>(first_part).unwrap().height, 1.5);
}

#[test]
fn missing_manifest_builds_empty_world() {
    let app = world_map_app(Some(MapConfig {
        manifest_path: "assets/data/missing.ron".to_string(),
        ..default()
    }));

    let report = app.world().resource::<WorldBuildReport>();
    assert!(report.built.is_empty());
    assert!(report.is_complete());
}
