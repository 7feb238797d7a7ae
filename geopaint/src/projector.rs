//! See [`Projector`].

use geopaint_types::geo::{Projection, WebMercator};
use geopaint_types::{GeoPoint2d, Point2d};

use crate::options::RenderOptions;

/// Projects geographic coordinates into image space.
///
/// The point is first projected with [`WebMercator`] and converted into the pixel pyramid of square tiles of
/// `tile_size` pixels, where zoom `z` covers the whole world with `2^z × 2^z` tiles. The origin of the pyramid is the
/// south-west corner of the world and `y` grows to the north. Then the fixed affine step `v * scale + offset` is
/// applied to both coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    mercator: WebMercator,
    tile_size: f64,
    scale: f64,
    offset: f64,
}

impl Projector {
    /// Creates a new projector.
    pub fn new(tile_size: f64, scale: f64, offset: f64) -> Self {
        Self {
            mercator: WebMercator,
            tile_size,
            scale,
            offset,
        }
    }

    /// Creates a projector with the parameters from the render options.
    pub fn from_options(options: &RenderOptions) -> Self {
        Self::new(options.tile_size, options.scale, options.offset)
    }

    /// Size of a pixel in projected meters at the given zoom.
    pub fn resolution(&self, zoom: u8) -> f64 {
        2.0 * self.mercator.origin_shift() / (self.tile_size * 2f64.powi(zoom as i32))
    }

    /// Projects the point with the given zoom factor.
    ///
    /// Returns `None` only if the point has no finite Mercator projection (latitude of -90°).
    pub fn project(&self, point: &GeoPoint2d, zoom: u8) -> Option<Point2d> {
        let meters = self.mercator.project(point)?;
        let resolution = self.resolution(zoom);
        let origin_shift = self.mercator.origin_shift();

        let x = (meters.x + origin_shift) / resolution;
        let y = (meters.y + origin_shift) / resolution;

        Some(Point2d::new(
            x * self.scale + self.offset,
            y * self.scale + self.offset,
        ))
    }
}

impl Default for Projector {
    fn default() -> Self {
        Self::from_options(&RenderOptions::default())
    }
}
