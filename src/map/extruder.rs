//! The extrusion seam: turning a part entity into a prism.
//!
//! Meshing (triangulation, walls, normals) lives outside this crate. The
//! builder hands every part to a [`PrismExtruder`], which decides how the
//! geometry gets attached.

use bevy::prelude::*;

use super::color::CountryColor;

/// Everything an extruder needs to build one prism.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct PrismRequest {
    /// Name of the part entity, e.g. `Sweden_2`.
    pub name: String,
    /// Extrusion distance along the y axis.
    pub height: f32,
    /// Polygon outline in the xz plane.
    pub outline: Vec<Vec2>,
    pub color: CountryColor,
    /// Whether the outline is a closed polygon.
    pub closed: bool,
}

/// Attaches prism geometry to a part entity.
pub trait PrismExtruder {
    fn create_prism(&mut self, part: &mut EntityCommands<'_>, request: PrismRequest);
}

/// Leaves the request on the part entity for a meshing plugin to pick up.
#[derive(Debug, Default)]
pub struct PendingPrismExtruder;

impl PrismExtruder for PendingPrismExtruder {
    fn create_prism(&mut self, part: &mut EntityCommands<'_>, request: PrismRequest) {
        part.insert(request);
    }
}
