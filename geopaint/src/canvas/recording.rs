//! Canvas that records calls instead of drawing.

use geopaint_types::Point2d;

use crate::canvas::Canvas;
use crate::error::GeopaintError;
use crate::Color;

/// Single call made to a [`RecordingCanvas`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasOp {
    /// [`Canvas::new_sub_path`]
    NewSubPath,
    /// [`Canvas::move_to`]
    MoveTo(Point2d),
    /// [`Canvas::line_to`]
    LineTo(Point2d),
    /// [`Canvas::close_path`]
    ClosePath,
    /// [`Canvas::clear_path`]
    ClearPath,
    /// [`Canvas::draw_point`]
    DrawPoint {
        /// Center of the point.
        center: Point2d,
        /// Radius of the point.
        radius: f64,
    },
    /// [`Canvas::set_fill_color`]
    SetFillColor(Color),
    /// [`Canvas::set_stroke_color`]
    SetStrokeColor(Color),
    /// [`Canvas::set_line_width`]
    SetLineWidth(f64),
    /// [`Canvas::fill_preserve`] with the fill color that was current at the moment of the call.
    FillPreserve {
        /// Current fill color.
        color: Color,
    },
    /// [`Canvas::stroke`] with the stroke paint that was current at the moment of the call.
    Stroke {
        /// Current stroke color.
        color: Color,
        /// Current line width.
        width: f64,
    },
}

impl CanvasOp {
    /// Returns true for operations that change the current path.
    pub fn is_path_op(&self) -> bool {
        matches!(
            self,
            CanvasOp::NewSubPath
                | CanvasOp::MoveTo(_)
                | CanvasOp::LineTo(_)
                | CanvasOp::ClosePath
                | CanvasOp::ClearPath
                | CanvasOp::DrawPoint { .. }
        )
    }

    /// Returns true for operations that put paint on the canvas.
    pub fn is_paint_op(&self) -> bool {
        matches!(self, CanvasOp::FillPreserve { .. } | CanvasOp::Stroke { .. })
    }
}

/// Canvas that does not draw anything, but remembers every call made to it.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    width: u32,
    height: u32,
    fill_color: Color,
    stroke_color: Color,
    line_width: f64,
    ops: Vec<CanvasOp>,
}

impl RecordingCanvas {
    /// Creates a new empty recording.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            fill_color: Color::BLACK,
            stroke_color: Color::BLACK,
            line_width: 1.0,
            ops: vec![],
        }
    }

    /// All recorded operations in call order.
    pub fn ops(&self) -> &[CanvasOp] {
        &self.ops
    }

    /// Recorded operations that change the current path.
    pub fn path_ops(&self) -> impl Iterator<Item = &CanvasOp> {
        self.ops.iter().filter(|op| op.is_path_op())
    }

    /// Recorded fill and stroke operations.
    pub fn paint_ops(&self) -> impl Iterator<Item = &CanvasOp> {
        self.ops.iter().filter(|op| op.is_paint_op())
    }
}

impl Canvas for RecordingCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn new_sub_path(&mut self) {
        self.ops.push(CanvasOp::NewSubPath);
    }

    fn move_to(&mut self, point: Point2d) {
        self.ops.push(CanvasOp::MoveTo(point));
    }

    fn line_to(&mut self, point: Point2d) {
        self.ops.push(CanvasOp::LineTo(point));
    }

    fn close_path(&mut self) {
        self.ops.push(CanvasOp::ClosePath);
    }

    fn clear_path(&mut self) {
        self.ops.push(CanvasOp::ClearPath);
    }

    fn draw_point(&mut self, center: Point2d, radius: f64) {
        self.ops.push(CanvasOp::DrawPoint { center, radius });
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
        self.ops.push(CanvasOp::SetFillColor(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
        self.ops.push(CanvasOp::SetStrokeColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
        self.ops.push(CanvasOp::SetLineWidth(width));
    }

    fn fill_preserve(&mut self) -> Result<(), GeopaintError> {
        self.ops.push(CanvasOp::FillPreserve {
            color: self.fill_color,
        });
        Ok(())
    }

    fn stroke(&mut self) -> Result<(), GeopaintError> {
        self.ops.push(CanvasOp::Stroke {
            color: self.stroke_color,
            width: self.line_width,
        });
        Ok(())
    }

    /// Lists the recorded operations, one per line.
    fn export(&mut self) -> Result<Vec<u8>, GeopaintError> {
        let mut listing = String::new();
        for op in &self.ops {
            listing.push_str(&format!("{op:?}\n"));
        }
        Ok(listing.into_bytes())
    }
}
