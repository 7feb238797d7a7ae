//! See [`Geom`].

use crate::geo::GeoPoint2d;
use crate::impls::{Contour, MultiPolygon, Polygon};

/// Geometry of a feature.
///
/// Only the geometry types that the renderer knows how to draw have their own variants. Everything else is kept as
/// [`Geom::Unsupported`] with the name of the original type, so that the caller can decide what to do with it.
/// Geometries that have no coordinates at all become [`Geom::Empty`].
#[derive(Debug, Clone, PartialEq)]
pub enum Geom<P = GeoPoint2d> {
    /// Single point.
    Point(P),
    /// Open polyline.
    LineString(Contour<P>),
    /// Polygon with optional holes.
    Polygon(Polygon<P>),
    /// Set of polygons.
    MultiPolygon(MultiPolygon<P>),
    /// A geometry of a type that cannot be rendered. Contains the name of the type.
    Unsupported(String),
    /// A geometry without coordinates. Contains the name of the type.
    Empty(String),
}

impl<P> Geom<P> {
    /// Name of the geometry type.
    pub fn kind(&self) -> &str {
        match self {
            Geom::Point(_) => "Point",
            Geom::LineString(_) => "LineString",
            Geom::Polygon(_) => "Polygon",
            Geom::MultiPolygon(_) => "MultiPolygon",
            Geom::Unsupported(kind) | Geom::Empty(kind) => kind,
        }
    }
}

impl<P> From<Polygon<P>> for Geom<P> {
    fn from(value: Polygon<P>) -> Self {
        Self::Polygon(value)
    }
}

impl<P> From<MultiPolygon<P>> for Geom<P> {
    fn from(value: MultiPolygon<P>) -> Self {
        Self::MultiPolygon(value)
    }
}

impl<P> From<Contour<P>> for Geom<P> {
    fn from(value: Contour<P>) -> Self {
        Self::LineString(value)
    }
}

impl From<GeoPoint2d> for Geom<GeoPoint2d> {
    fn from(value: GeoPoint2d) -> Self {
        Self::Point(value)
    }
}
