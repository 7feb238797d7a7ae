//! See [`RenderOptions`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GeopaintError;
use crate::Color;

/// Default fill color of areas and points: `#757575AA`.
pub const DEFAULT_FILL_COLOR: Color = Color::from_hex("#757575AA");
/// Default color of outlines and non-road lines: `#0F0F0FFF`.
pub const DEFAULT_BORDER_COLOR: Color = Color::from_hex("#0F0F0FFF");
/// Default width of outlines and lines.
pub const DEFAULT_LINE_WIDTH: f64 = 0.5;

/// Constants of a render pass: canvas size, fallback paint, projection parameters and error policies.
///
/// All fields have defaults, so the options can be deserialized from a partial document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Width of the output image in pixels.
    pub width: u32,
    /// Height of the output image in pixels.
    pub height: u32,
    /// Color the canvas is cleared with before rendering.
    pub background: Color,
    /// Radius of the dot drawn for point features.
    pub point_radius: f64,
    /// Fill color used when no style rule applies.
    pub default_fill_color: Color,
    /// Outline color used when no style rule applies.
    pub default_border_color: Color,
    /// Line width used when no style rule applies.
    pub default_line_width: f64,
    /// Size of a tile of the pixel pyramid at zoom 0.
    pub tile_size: f64,
    /// Multiplier of the affine step applied after projection.
    pub scale: f64,
    /// Offset of the affine step applied after projection.
    pub offset: f64,
    /// Zoom factor for points, lines and polygons.
    pub area_zoom: u8,
    /// Zoom factor for multi-polygons.
    pub multi_polygon_zoom: u8,
    /// When polygons are painted.
    pub polygon_paint: PolygonPaint,
    /// What to do with attributes of unexpected type.
    pub on_malformed_attribute: MalformedAttributePolicy,
}

/// Defines when the rings of a polygon are painted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolygonPaint {
    /// All rings of a polygon are added to one path which is painted once. Inner rings become holes because of the
    /// even-odd fill rule.
    #[default]
    PerPolygon,
    /// Every ring of a `Polygon` is filled and outlined on its own, so holes are painted over instead of cut out.
    /// Rings of each multi-polygon part are joined into one path where only the last ring is explicitly closed, and
    /// the path is painted once per part.
    Legacy,
}

/// Defines what happens when a style attribute of a feature cannot be parsed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedAttributePolicy {
    /// Log a warning and paint the feature with the default paint.
    #[default]
    Fallback,
    /// Stop rendering and return an error.
    Abort,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 1366,
            height: 1024,
            background: Color::TRANSPARENT,
            point_radius: 1.0,
            default_fill_color: DEFAULT_FILL_COLOR,
            default_border_color: DEFAULT_BORDER_COLOR,
            default_line_width: DEFAULT_LINE_WIDTH,
            tile_size: 256.0,
            scale: 1.0,
            offset: 10.0,
            area_zoom: 1,
            multi_polygon_zoom: 3,
            polygon_paint: PolygonPaint::default(),
            on_malformed_attribute: MalformedAttributePolicy::default(),
        }
    }
}

impl RenderOptions {
    /// Parses options from a YAML document. Omitted fields keep their default values.
    pub fn from_yaml(text: &str) -> Result<Self, GeopaintError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_yaml_ng::from_str(text)?)
    }

    /// Reads options from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GeopaintError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Returns a copy of the options with the given canvas size.
    pub fn with_size(&self, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_document_keeps_defaults() {
        let options = RenderOptions::from_yaml("width: 200\npolygon_paint: legacy\n").unwrap();
        assert_eq!(options.width, 200);
        assert_eq!(options.height, 1024);
        assert_eq!(options.polygon_paint, PolygonPaint::Legacy);
        assert_eq!(options.default_fill_color, DEFAULT_FILL_COLOR);
        assert_eq!(options.multi_polygon_zoom, 3);
    }

    #[test]
    fn invalid_document() {
        assert!(matches!(
            RenderOptions::from_yaml("on_malformed_attribute: explode"),
            Err(GeopaintError::Style(_))
        ));
        assert_eq!(RenderOptions::from_yaml("").unwrap(), RenderOptions::default());
    }

    #[test]
    fn colors_are_hex_strings() {
        let options = RenderOptions::from_yaml("background: '#FFFFFF'").unwrap();
        assert_eq!(options.background, Color::WHITE);
    }

    #[test]
    fn default_colors() {
        assert_eq!(DEFAULT_FILL_COLOR.to_hex(), "#757575AA");
        assert_eq!(DEFAULT_BORDER_COLOR.to_hex(), "#0F0F0FFF");
    }
}
