//! Geopaint renders geographic features into a styled raster image.
//!
//! Features are read from GeoJSON, projected with Web Mercator into image space and drawn one after another on a
//! [`Canvas`](canvas::Canvas). The paint of every feature is selected by its attributes using a [`StyleTable`]
//! loaded from a YAML document:
//!
//! ```yaml
//! admin_level:
//!   - rank: 2
//!     fillColor: "#FF0000FF"
//!     lineWidth: 2
//! lines:
//!   road: "#FFFFFFFF"
//!   roadWidth: 1.5
//! ```
//!
//! # Example
//!
//! ```
//! use geopaint::{feature::parse_features, RenderOptions, Renderer, StyleTable};
//!
//! let features = parse_features(r#"{
//!     "type": "Feature",
//!     "geometry": {"type": "Polygon", "coordinates": [[[0, 0], [10, 0], [10, 10], [0, 0]]]},
//!     "properties": {"admin_level": "2"}
//! }"#).unwrap();
//!
//! let style = StyleTable::from_yaml("admin_level:\n  - rank: 2\n    fillColor: '#FF0000FF'\n").unwrap();
//! let options = RenderOptions::default().with_size(400, 300);
//! let mut canvas = Renderer::new(&style, &options).render_image(&features).unwrap();
//! assert_eq!(canvas.render().width(), 400);
//! ```

pub mod attributes;
pub mod canvas;
mod color;
pub mod error;
pub mod feature;
pub mod options;
pub mod projector;
pub mod render;
pub mod resolver;
pub mod style;

pub use attributes::{AttributeValue, Attributes};
pub use color::Color;
pub use error::GeopaintError;
pub use feature::Feature;
pub use options::RenderOptions;
pub use render::{RenderSummary, Renderer};
pub use style::StyleTable;

// Reexport geopaint_types
pub use geopaint_types;
