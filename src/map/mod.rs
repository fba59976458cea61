//! Map module - country data, hex colours, and the extruded country hierarchy.

mod builder;
mod color;
mod data;
mod error;
mod extruder;
mod mesh_data;
mod plugin;

pub use builder::{
    build_country, build_world, Country, CountryPart, CountrySpec, WorldBuildReport, WorldMapRoot,
};
pub use color::{parse_hex_color, CountryColor};
pub use data::{
    load_country_data, resolve_countries, CountryDefinition, CountryEntry, CountryRegistry,
    WorldManifest,
};
pub use error::{BuildError, ColorParseError, DataLoadError, MeshDataError};
pub use extruder::{PendingPrismExtruder, PrismExtruder, PrismRequest};
pub use mesh_data::{CountryMeshData, CountryMeshDataRaw, MeshDataSource};
pub use plugin::{setup_world_map, MapPlugin};
