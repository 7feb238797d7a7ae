//! Error types used by the crate.

use geopaint_types::GeopaintTypesError;
use thiserror::Error;

use crate::attributes::AttributeError;

/// Geopaint error type.
#[derive(Debug, Error)]
pub enum GeopaintError {
    /// Error reading/writing data to the FS.
    #[error("failed to access file")]
    FsIo(#[from] std::io::Error),
    /// Input features could not be decoded.
    #[error("failed to decode features: {0}")]
    Decoding(String),
    /// Invalid geometry in the input.
    #[error("invalid geometry: {0}")]
    Geometry(#[from] GeopaintTypesError),
    /// Style configuration file is present but cannot be parsed.
    #[error("failed to parse style configuration: {0}")]
    Style(String),
    /// A feature attribute has a value of unexpected type and the render is configured to abort on it.
    #[error("feature #{feature}: {source}")]
    MalformedAttribute {
        /// Index of the feature in the input collection.
        feature: usize,
        /// Parsing error.
        source: AttributeError,
    },
    /// A feature could not be drawn.
    #[error("failed to render feature #{feature}")]
    Feature {
        /// Index of the feature in the input collection.
        feature: usize,
        /// Cause of the failure.
        #[source]
        source: Box<GeopaintError>,
    },
    /// Raster canvas cannot have the requested size.
    #[error("unsupported canvas size {width}x{height}, both sides must be between 1 and 65535 pixels")]
    CanvasSize {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// Image encoding error.
    #[error("failed to encode image: {0}")]
    Encoding(#[from] image::ImageError),
}

impl From<geojson::Error> for GeopaintError {
    fn from(value: geojson::Error) -> Self {
        Self::Decoding(value.to_string())
    }
}

impl From<serde_yaml_ng::Error> for GeopaintError {
    fn from(value: serde_yaml_ng::Error) -> Self {
        Self::Style(value.to_string())
    }
}
