//! Conversion of GeoJSON geometries into [`Geom`].
//!
//! GeoJSON positions are stored as `[lon, lat, ...]`, so the ordinates are swapped on conversion.

use geojson::{PolygonType, Position, Value};

use crate::error::GeopaintTypesError;
use crate::geo::GeoPoint2d;
use crate::geometry::Geom;
use crate::impls::{Contour, MultiPolygon, Polygon};

impl TryFrom<&geojson::Geometry> for Geom {
    type Error = GeopaintTypesError;

    fn try_from(geometry: &geojson::Geometry) -> Result<Self, Self::Error> {
        Geom::try_from(&geometry.value)
    }
}

impl TryFrom<&Value> for Geom {
    type Error = GeopaintTypesError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Ok(match value {
            Value::Point(p) => Geom::Point(convert_point(p)?),
            Value::LineString(points) => Geom::LineString(Contour::open(convert_points(points)?)),
            Value::Polygon(polygon) => match convert_polygon(polygon)? {
                Some(polygon) => Geom::Polygon(polygon),
                None => Geom::Empty("Polygon".into()),
            },
            Value::MultiPolygon(mp) => {
                let mut parts = Vec::with_capacity(mp.len());
                for polygon in mp {
                    parts.extend(convert_polygon(polygon)?);
                }

                if parts.is_empty() {
                    Geom::Empty("MultiPolygon".into())
                } else {
                    Geom::MultiPolygon(MultiPolygon::from(parts))
                }
            }
            Value::MultiPoint(_) => Geom::Unsupported("MultiPoint".into()),
            Value::MultiLineString(_) => Geom::Unsupported("MultiLineString".into()),
            Value::GeometryCollection(_) => Geom::Unsupported("GeometryCollection".into()),
        })
    }
}

fn convert_point(position: &Position) -> Result<GeoPoint2d, GeopaintTypesError> {
    match position.as_slice() {
        [lon, lat, ..] => Ok(GeoPoint2d::latlon(*lat, *lon)),
        _ => Err(GeopaintTypesError::Conversion(format!(
            "position must have at least 2 ordinates, got {}",
            position.len()
        ))),
    }
}

fn convert_points(points: &[Position]) -> Result<Vec<GeoPoint2d>, GeopaintTypesError> {
    points.iter().map(convert_point).collect()
}

/// Returns `None` for a polygon without rings.
fn convert_polygon(
    polygon: &PolygonType,
) -> Result<Option<Polygon<GeoPoint2d>>, GeopaintTypesError> {
    let rings = polygon
        .iter()
        .map(|ring| convert_points(ring))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Polygon::from_rings(rings))
}
