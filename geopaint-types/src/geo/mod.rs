//! Geographic points and projections.

mod point;
mod projection;
mod web_mercator;

pub use point::GeoPoint2d;
pub use projection::Projection;
pub use web_mercator::WebMercator;
