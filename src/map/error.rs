//! Error types for colour parsing, mesh data access, and country building.

use thiserror::Error;

/// Errors produced when parsing a 6-digit hex colour.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// Input is not exactly six characters long.
    #[error("Hex colour '{hex}' must be exactly 6 characters, got {len}")]
    InvalidLength { hex: String, len: usize },

    /// A channel contains something other than base-16 digits.
    #[error("Hex colour '{hex}' has an invalid {channel} channel '{digits}'")]
    InvalidFormat {
        hex: String,
        channel: &'static str,
        digits: String,
    },
}

/// Errors produced by a [`MeshDataSource`](super::MeshDataSource).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshDataError {
    /// Requested part is outside `1..=parts_count`.
    #[error("Part index {index} out of range 1..={parts_count}")]
    IndexOutOfRange { index: usize, parts_count: usize },
}

/// Errors that abort the construction of a single country.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    /// Extrusion height would produce a degenerate prism.
    #[error("Extrusion height must be positive and finite, got {0}")]
    InvalidHeight(f32),

    /// The country's mesh data could not provide one of its parts.
    #[error("Mesh data for country '{country}' is inconsistent: {source}")]
    MeshData {
        country: String,
        source: MeshDataError,
    },
}

/// Errors that can occur when loading the manifest or country data files.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// Country colour in the manifest is not a valid hex colour.
    #[error("Invalid colour for country '{country}': {source}")]
    InvalidColor {
        country: String,
        source: ColorParseError,
    },

    /// Two manifest entries share a name, which would make part names ambiguous.
    #[error("Country '{0}' is declared more than once")]
    DuplicateCountry(String),
}
