//! Country hierarchy construction.

use bevy::prelude::*;

use super::color::CountryColor;
use super::error::BuildError;
use super::extruder::{PrismExtruder, PrismRequest};
use super::mesh_data::MeshDataSource;

/// Marker for the entity every country is parented under.
#[derive(Component)]
pub struct WorldMapRoot;

/// Marker for a country container entity.
#[derive(Component)]
pub struct Country;

/// A single polygon part of a country.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryPart {
    /// 1-based part index within the country.
    pub index: usize,
}

/// One country handed to [`build_world`].
pub struct CountrySpec<'a> {
    pub name: &'a str,
    pub source: &'a dyn MeshDataSource,
    pub color: CountryColor,
}

/// Outcome of a [`build_world`] pass.
#[derive(Resource, Debug, Default)]
pub struct WorldBuildReport {
    /// Countries that were built, in build order.
    pub built: Vec<(String, Entity)>,
    /// Countries that were skipped, with the reason.
    pub failed: Vec<(String, BuildError)>,
}

impl WorldBuildReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn country(&self, name: &str) -> Option<Entity> {
        self.built
            .iter()
            .find(|(built, _)| built == name)
            .map(|(_, entity)| *entity)
    }
}

/// Build one country under `root`: a container named `name` with one child per part.
///
/// Parts are spawned as `name_1..name_n` in increasing index order and each is
/// passed to `extruder` as a closed polygon. Every part is fetched before
/// anything is spawned, so an error leaves the scene untouched.
pub fn build_country(
    commands: &mut Commands,
    root: Entity,
    name: &str,
    source: &dyn MeshDataSource,
    height: f32,
    color: CountryColor,
    extruder: &mut dyn PrismExtruder,
) -> Result<Entity, BuildError> {
    if !(height.is_finite() && height > 0.0) {
        return Err(BuildError::InvalidHeight(height));
    }

    let parts = (1..=source.parts_count())
        .map(|index| source.part_for_index(index))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| BuildError::MeshData {
            country: name.to_string(),
            source,
        })?;

    let country = commands
        .spawn((
            Country,
            Name::new(name.to_string()),
            Transform::default(),
            Visibility::default(),
        ))
        .set_parent(root)
        .id();

    for (offset, outline) in parts.into_iter().enumerate() {
        let index = offset + 1;
        let part_name = format!("{}_{}", name, index);

        let mut part = commands.spawn((
            CountryPart { index },
            Name::new(part_name.clone()),
            Transform::default(),
            Visibility::default(),
        ));
        part.set_parent(country);

        debug!("Extruding {} ({} points)", part_name, outline.len());
        extruder.create_prism(
            &mut part,
            PrismRequest {
                name: part_name,
                height,
                outline: outline.to_vec(),
                color,
                closed: true,
            },
        );
    }

    info!("Built country '{}' with {} part(s)", name, source.parts_count());
    Ok(country)
}

/// Build every country in order, isolating failures per country.
pub fn build_world<'a>(
    commands: &mut Commands,
    root: Entity,
    countries: impl IntoIterator<Item = CountrySpec<'a>>,
    height: f32,
    extruder: &mut dyn PrismExtruder,
) -> WorldBuildReport {
    let mut report = WorldBuildReport::default();

    for spec in countries {
        match build_country(commands, root, spec.name, spec.source, height, spec.color, extruder) {
            Ok(entity) => report.built.push((spec.name.to_string(), entity)),
            Err(e) => {
                error!("Skipping country '{}': {}", spec.name, e);
                report.failed.push((spec.name.to_string(), e));
            }
        }
    }

    info!(
        "World map built: {} countries, {} failed",
        report.built.len(),
        report.failed.len()
    );
    report
}
