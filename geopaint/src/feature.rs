//! Input features and their decoding from GeoJSON.

use std::path::Path;

use geojson::GeoJson;
use geopaint_types::Geom;

use crate::attributes::{AttributeValue, Attributes};
use crate::error::GeopaintError;

/// A geographic object to be rendered: a geometry with a set of attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    /// Geometry in geographic coordinates.
    pub geometry: Geom,
    /// Attributes used to select the paint of the feature.
    pub attributes: Attributes,
}

impl Feature {
    /// Creates a new feature.
    pub fn new(geometry: impl Into<Geom>, attributes: Attributes) -> Self {
        Self {
            geometry: geometry.into(),
            attributes,
        }
    }
}

impl TryFrom<&geojson::Feature> for Feature {
    type Error = GeopaintError;

    fn try_from(feature: &geojson::Feature) -> Result<Self, Self::Error> {
        let geometry = match &feature.geometry {
            Some(geometry) => Geom::try_from(geometry)?,
            None => {
                return Err(GeopaintError::Decoding(
                    "feature has no geometry".to_string(),
                ))
            }
        };

        let attributes = feature
            .properties
            .iter()
            .flatten()
            .map(|(key, value)| (key.clone(), AttributeValue::from(value)))
            .collect();

        Ok(Self {
            geometry,
            attributes,
        })
    }
}

/// Decodes a GeoJSON document into a list of features.
///
/// The document may be a `FeatureCollection`, a single `Feature` or a bare geometry. Features without geometry are
/// skipped with a warning.
pub fn parse_features(json: &str) -> Result<Vec<Feature>, GeopaintError> {
    let input = match json.parse::<GeoJson>()? {
        GeoJson::FeatureCollection(collection) => collection.features,
        GeoJson::Feature(feature) => vec![feature],
        GeoJson::Geometry(geometry) => vec![geojson::Feature::from(geometry)],
    };

    let mut features = Vec::with_capacity(input.len());
    for (index, feature) in input.iter().enumerate() {
        if feature.geometry.is_none() {
            log::warn!("Feature #{index} has no geometry and is skipped");
            continue;
        }

        let feature = Feature::try_from(feature).map_err(|err| {
            GeopaintError::Decoding(format!("feature #{index}: {err}"))
        })?;
        features.push(feature);
    }

    Ok(features)
}

/// Reads and decodes a GeoJSON file.
pub fn load_features(path: impl AsRef<Path>) -> Result<Vec<Feature>, GeopaintError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let features = parse_features(&json)?;
    log::info!("Loaded {} features from {}", features.len(), path.display());
    Ok(features)
}
