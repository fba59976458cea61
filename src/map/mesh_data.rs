//! Mesh data sources: the polygon parts that make up a country.

use bevy::prelude::*;
use serde::Deserialize;

use super::error::MeshDataError;

/// Read-only access to a country's polygon parts.
///
/// Parts are addressed with 1-based indices in `1..=parts_count()`.
pub trait MeshDataSource {
    /// Number of individual polygons describing the country.
    fn parts_count(&self) -> usize;

    /// Outline of the part at `index`.
    fn part_for_index(&self, index: usize) -> Result<&[Vec2], MeshDataError>;
}

/// Bounds-checked 1-based lookup shared by slice-backed sources.
fn part_at(parts: &[Vec<Vec2>], index: usize) -> Result<&[Vec2], MeshDataError> {
    index
        .checked_sub(1)
        .and_then(|i| parts.get(i))
        .map(Vec::as_slice)
        .ok_or(MeshDataError::IndexOutOfRange {
            index,
            parts_count: parts.len(),
        })
}

impl MeshDataSource for Vec<Vec<Vec2>> {
    fn parts_count(&self) -> usize {
        self.len()
    }

    fn part_for_index(&self, index: usize) -> Result<&[Vec2], MeshDataError> {
        part_at(self, index)
    }
}

/// Country mesh data as written by the export step.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryMeshDataRaw {
    pub parts: Vec<Vec<(f32, f32)>>,
}

/// Country mesh data loaded from a pre-exported RON file.
#[derive(Debug, Clone, Default)]
pub struct CountryMeshData {
    parts: Vec<Vec<Vec2>>,
}

impl CountryMeshData {
    pub fn new(parts: Vec<Vec<Vec2>>) -> Self {
        Self { parts }
    }

    /// Convert the raw tuples into vectors. Degenerate parts are kept but reported.
    pub fn from_raw(raw: CountryMeshDataRaw, label: &str) -> Self {
        let parts: Vec<Vec<Vec2>> = raw
            .parts
            .into_iter()
            .map(|part| part.into_iter().map(|(x, y)| Vec2::new(x, y)).collect())
            .collect();

        for (i, part) in parts.iter().enumerate() {
            if part.len() < 3 {
                warn!(
                    "Part {} of '{}' has only {} point(s) and will extrude to a degenerate prism",
                    i + 1,
                    label,
                    part.len()
                );
            }
        }

        Self { parts }
    }

    /// Total number of vertices across all parts.
    pub fn vertex_count(&self) -> usize {
        self.parts.iter().map(Vec::len).sum()
    }
}

impl MeshDataSource for CountryMeshData {
    fn parts_count(&self) -> usize {
        self.parts.len()
    }

    fn part_for_index(&self, index: usize) -> Result<&[Vec2], MeshDataError> {
        part_at(&self.parts, index)
    }
}
