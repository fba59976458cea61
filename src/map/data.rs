//! World manifest and country data loading from RON.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::builder::CountrySpec;
use super::color::{parse_hex_color, CountryColor};
use super::error::DataLoadError;
use super::mesh_data::{CountryMeshData, CountryMeshDataRaw, MeshDataSource};
use crate::core::MapConfig;

fn default_color() -> String {
    "ffffff".to_string()
}

/// One country declared in the manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryEntry {
    pub name: String,
    /// Path of the country's mesh data, relative to the manifest.
    pub data: String,
    /// Hex colour overriding the manifest default.
    #[serde(default)]
    pub color: Option<String>,
}

/// The list of countries to build, as exported alongside the mesh data.
#[derive(Debug, Clone, Deserialize)]
pub struct WorldManifest {
    #[serde(default = "default_color")]
    pub default_color: String,
    pub countries: Vec<CountryEntry>,
}

/// A country ready to be built.
#[derive(Debug, Clone)]
pub struct CountryDefinition {
    pub name: String,
    pub color: CountryColor,
    pub mesh_data: CountryMeshData,
}

/// Resource storing every successfully loaded country, in manifest order.
#[derive(Resource, Debug, Default)]
pub struct CountryRegistry {
    pub countries: Vec<CountryDefinition>,
}

impl CountryRegistry {
    /// Get a country by name.
    pub fn get(&self, name: &str) -> Option<&CountryDefinition> {
        self.countries.iter().find(|c| c.name == name)
    }

    /// Borrow every country as a build specification.
    pub fn specs(&self) -> impl Iterator<Item = CountrySpec<'_>> {
        self.countries.iter().map(|c| CountrySpec {
            name: &c.name,
            source: &c.mesh_data,
            color: c.color,
        })
    }
}

fn read_file(path: &Path) -> Result<String, DataLoadError> {
    if !path.exists() {
        return Err(DataLoadError::FileNotFound(path.display().to_string()));
    }
    fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
        path: path.display().to_string(),
        details: e.to_string(),
    })
}

fn parse_ron<T: for<'de> Deserialize<'de>>(contents: &str, label: &str) -> Result<T, DataLoadError> {
    ron::from_str(contents).map_err(|e| DataLoadError::ParseError {
        path: label.to_string(),
        details: e.to_string(),
    })
}

impl WorldManifest {
    pub fn from_ron(contents: &str, label: &str) -> Result<Self, DataLoadError> {
        parse_ron(contents, label)
    }

    pub fn load(path: &Path) -> Result<Self, DataLoadError> {
        Self::from_ron(&read_file(path)?, &path.display().to_string())
    }

    /// Colour for `entry`, falling back to the manifest default.
    pub fn color_for(&self, entry: &CountryEntry) -> Result<CountryColor, DataLoadError> {
        let hex = entry.color.as_deref().unwrap_or(&self.default_color);
        parse_hex_color(hex).map_err(|source| DataLoadError::InvalidColor {
            country: entry.name.clone(),
            source,
        })
    }
}

impl CountryMeshData {
    pub fn from_ron(contents: &str, label: &str) -> Result<Self, DataLoadError> {
        let raw: CountryMeshDataRaw = parse_ron(contents, label)?;
        Ok(Self::from_raw(raw, label))
    }

    pub fn load(path: &Path) -> Result<Self, DataLoadError> {
        let label = path.display().to_string();
        Self::from_ron(&read_file(path)?, &label)
    }
}

/// Resolve every manifest entry, reading mesh data relative to `base_dir`.
///
/// Entries that fail are logged and left out of the registry.
pub fn resolve_countries(manifest: &WorldManifest, base_dir: &Path) -> CountryRegistry {
    let mut registry = CountryRegistry::default();
    let mut seen = HashSet::new();

    for entry in &manifest.countries {
        match resolve_country(manifest, entry, base_dir, &seen) {
            Ok(definition) => {
                info!(
                    "Loaded country: {} ({} parts, {} points)",
                    definition.name,
                    definition.mesh_data.parts_count(),
                    definition.mesh_data.vertex_count()
                );
                seen.insert(definition.name.clone());
                registry.countries.push(definition);
            }
            Err(e) => error!("Failed to load country '{}': {}", entry.name, e),
        }
    }

    registry
}

fn resolve_country(
    manifest: &WorldManifest,
    entry: &CountryEntry,
    base_dir: &Path,
    seen: &HashSet<String>,
) -> Result<CountryDefinition, DataLoadError> {
    if seen.contains(&entry.name) {
        return Err(DataLoadError::DuplicateCountry(entry.name.clone()));
    }
    let color = manifest.color_for(entry)?;
    let mesh_data = CountryMeshData::load(&base_dir.join(&entry.data))?;

    Ok(CountryDefinition {
        name: entry.name.clone(),
        color,
        mesh_data,
    })
}

/// Load the manifest named in [`MapConfig`] and every country it declares.
pub fn load_country_data(mut commands: Commands, config: Res<MapConfig>) {
    let manifest_path = PathBuf::from(&config.manifest_path);

    let registry = match WorldManifest::load(&manifest_path) {
        Ok(manifest) => {
            info!(
                "Loaded world manifest {:?} with {} countries",
                manifest_path,
                manifest.countries.len()
            );
            let base_dir = manifest_path.parent().unwrap_or(Path::new("."));
            resolve_countries(&manifest, base_dir)
        }
        Err(e) => {
            error!("Failed to load world manifest: {}", e);
            CountryRegistry::default()
        }
    };

    info!("Loaded {} country definition(s)", registry.countries.len());
    commands.insert_resource(registry);
}
