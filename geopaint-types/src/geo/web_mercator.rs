use crate::geo::point::GeoPoint2d;
use crate::geo::projection::Projection;
use crate::Point2d;

/// Spherical (Web) Mercator projection on the WGS84 semi-major axis. Output coordinates are in meters, `y` grows to
/// the north.
#[derive(Debug, Copy, Clone, Default)]
pub struct WebMercator;

impl WebMercator {
    /// Radius of the sphere in meters.
    pub const SEMIMAJOR: f64 = 6_378_137.0;

    /// Half of the length of the equator, i.e. the largest absolute value of projected `x`.
    pub fn origin_shift(&self) -> f64 {
        std::f64::consts::PI * Self::SEMIMAJOR
    }
}

impl Projection for WebMercator {
    type InPoint = GeoPoint2d;
    type OutPoint = Point2d;

    fn project(&self, input: &GeoPoint2d) -> Option<Point2d> {
        let x = Self::SEMIMAJOR * input.lon_rad();
        let y = Self::SEMIMAJOR
            * (std::f64::consts::FRAC_PI_4 + input.lat_rad() / 2.0)
                .tan()
                .ln();

        if x.is_finite() && y.is_finite() {
            Some(Point2d::new(x, y))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latlon;
    use approx::assert_relative_eq;

    #[test]
    fn projects_origin_to_zero() {
        let projected = WebMercator.project(&latlon!(0.0, 0.0)).unwrap();
        assert_relative_eq!(projected.x, 0.0);
        assert_relative_eq!(projected.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn antimeridian_is_origin_shift() {
        let projection = WebMercator;
        let projected = projection.project(&latlon!(0.0, 180.0)).unwrap();
        assert_relative_eq!(projected.x, projection.origin_shift());
    }

    #[test]
    fn known_point() {
        let projected = WebMercator
            .project(&latlon!(55.7558, 37.6173))
            .unwrap();
        assert_relative_eq!(projected.x, 4_187_538.68, epsilon = 0.01);
        assert_relative_eq!(projected.y, 7_509_955.14, epsilon = 0.01);
    }

    #[test]
    fn south_pole_is_not_projected() {
        assert!(WebMercator
            .project(&latlon!(-90.0, 0.0))
            .is_none());
    }
}
