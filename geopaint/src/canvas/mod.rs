//! Drawing surfaces.
//!
//! A [`Canvas`] accumulates a current path and paints it with the current paint. The renderer only talks to this
//! trait, so the same rendering code can draw into a pixel buffer ([`RasterCanvas`]) or be inspected step by step
//! ([`RecordingCanvas`]).

use geopaint_types::Point2d;

use crate::error::GeopaintError;
use crate::Color;

mod path;
mod raster;
mod recording;

pub use path::{CanvasPath, PathCommand};
pub use raster::RasterCanvas;
pub use recording::{CanvasOp, RecordingCanvas};

/// Drawing surface with an implicit current path and current paint.
///
/// Path commands only change the current path. Nothing is drawn until [`Canvas::fill_preserve`] or [`Canvas::stroke`]
/// is called. Later paint operations are composited over the earlier ones.
pub trait Canvas {
    /// Width of the canvas in pixels.
    fn width(&self) -> u32;
    /// Height of the canvas in pixels.
    fn height(&self) -> u32;

    /// Ends the current subpath without closing it. The next `line_to` starts a new subpath.
    fn new_sub_path(&mut self);
    /// Starts a new subpath at the given point.
    fn move_to(&mut self, point: Point2d);
    /// Adds a line segment from the current point. If there is no current point, acts as [`Canvas::move_to`].
    fn line_to(&mut self, point: Point2d);
    /// Closes the current subpath by connecting its last point to its first one.
    fn close_path(&mut self);
    /// Discards the current path without painting it.
    fn clear_path(&mut self);
    /// Adds a closed circle subpath.
    fn draw_point(&mut self, center: Point2d, radius: f64);

    /// Sets the color used by [`Canvas::fill_preserve`].
    fn set_fill_color(&mut self, color: Color);
    /// Sets the color used by [`Canvas::stroke`].
    fn set_stroke_color(&mut self, color: Color);
    /// Sets the width used by [`Canvas::stroke`].
    fn set_line_width(&mut self, width: f64);

    /// Fills the inside of the current path and keeps the path.
    fn fill_preserve(&mut self) -> Result<(), GeopaintError>;
    /// Outlines the current path and clears it.
    fn stroke(&mut self) -> Result<(), GeopaintError>;

    /// Serializes the canvas.
    fn export(&mut self) -> Result<Vec<u8>, GeopaintError>;
}
