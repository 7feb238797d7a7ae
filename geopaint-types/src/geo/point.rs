/// 2d point on the surface of the Earth.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct GeoPoint2d {
    lat: f64,
    lon: f64,
}

impl GeoPoint2d {
    /// Creates a new point from latitude and longitude in degrees.
    pub const fn latlon(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Latitude in radians.
    pub fn lat_rad(&self) -> f64 {
        self.lat.to_radians()
    }

    /// Longitude in radians.
    pub fn lon_rad(&self) -> f64 {
        self.lon.to_radians()
    }
}

/// Creates a new GeoPoint2d from latitude and longitude values (in degrees).
///
/// ```
/// use geopaint_types::latlon;
///
/// let point = latlon!(38.0, 52.0);
/// assert_eq!(point.lat(), 38.0);
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        $crate::geo::GeoPoint2d::latlon($lat, $lon)
    };
}
