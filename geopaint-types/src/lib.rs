//! Geometry types used by `geopaint`.
//!
//! Geographic features arrive as [`Geom`] values with [`GeoPoint2d`] vertices. The renderer projects them into
//! image space with a [`WebMercator`](geo::WebMercator) based projection, producing [`Point2d`] values.

pub mod error;
pub mod geo;
pub mod geometry;
pub mod impls;

#[cfg(feature = "geojson")]
pub mod geojson;

pub use error::GeopaintTypesError;
pub use geo::GeoPoint2d;
pub use geometry::Geom;
pub use impls::{ClosedContour, Contour, MultiPolygon, Polygon};

/// 2d cartesian point in image space.
pub type Point2d = nalgebra::Point2<f64>;
