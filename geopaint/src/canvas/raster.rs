//! Anti-aliased canvas backed by `vello_cpu`.

use geopaint_types::Point2d;
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, Rgba, RgbaImage};
use vello_cpu::color::{AlphaColor, Srgb};
use vello_cpu::kurbo::{Affine, Cap, Join, Rect, Stroke};
use vello_cpu::peniko::Fill;
use vello_cpu::{Pixmap, RenderContext};

use crate::canvas::path::{CanvasPath, PathCommand};
use crate::canvas::Canvas;
use crate::error::GeopaintError;
use crate::Color;

/// Canvas that draws into an RGBA pixel buffer.
///
/// Paint operations are recorded into a `vello_cpu` render context, which computes exact area coverage of every
/// pixel, so even hairline strokes leave a (partially transparent) trace. The pixels are produced by
/// [`RasterCanvas::render`].
///
/// The fill rule and the orientation of the `y` axis are fixed when the canvas is created: the fill rule is even-odd
/// and `y` grows upwards from the bottom edge of the image.
#[derive(Debug)]
pub struct RasterCanvas {
    context: RenderContext,
    width: u16,
    height: u16,
    path: CanvasPath,
    fill_color: Color,
    stroke_color: Color,
    line_width: f64,
}

impl RasterCanvas {
    /// Creates a new transparent canvas.
    ///
    /// Both sides must be between 1 and `u16::MAX` pixels.
    pub fn new(width: u32, height: u32) -> Result<Self, GeopaintError> {
        let size_error = || GeopaintError::CanvasSize { width, height };
        let w = u16::try_from(width).map_err(|_| size_error())?;
        let h = u16::try_from(height).map_err(|_| size_error())?;
        if w == 0 || h == 0 {
            return Err(size_error());
        }

        let mut context = RenderContext::new(w, h);
        context.set_fill_rule(Fill::EvenOdd);
        context.set_transform(Affine::new([1.0, 0.0, 0.0, -1.0, 0.0, f64::from(h)]));

        Ok(Self {
            context,
            width: w,
            height: h,
            path: CanvasPath::new(),
            fill_color: Color::BLACK,
            stroke_color: Color::BLACK,
            line_width: 1.0,
        })
    }

    /// Creates a new canvas filled with the given color.
    pub fn with_background(
        width: u32,
        height: u32,
        background: Color,
    ) -> Result<Self, GeopaintError> {
        let mut canvas = Self::new(width, height)?;
        if !background.is_transparent() {
            canvas.context.set_paint(to_vello_color(background));
            canvas.context.fill_rect(&Rect::new(
                0.0,
                0.0,
                f64::from(canvas.width),
                f64::from(canvas.height),
            ));
        }

        Ok(canvas)
    }

    /// Rasterizes everything painted so far. Pixel `(0, 0)` is the top left corner of the image.
    pub fn render(&mut self) -> RgbaImage {
        self.context.flush();
        let mut pixmap = Pixmap::new(self.width, self.height);
        self.context.render_to_pixmap(&mut pixmap);

        let width = u32::from(self.width);
        let pixels = pixmap.take_unpremultiplied();
        RgbaImage::from_fn(width, u32::from(self.height), |x, y| {
            let pixel = pixels[(y * width + x) as usize];
            Rgba([pixel.r, pixel.g, pixel.b, pixel.a])
        })
    }

    fn push_point(&mut self, point: Point2d, command: fn(Point2d) -> PathCommand) {
        if !point.x.is_finite() || !point.y.is_finite() {
            log::debug!("Ignoring non-finite path point {point:?}");
            return;
        }

        self.path.push(command(point));
    }
}

fn to_vello_color(color: Color) -> AlphaColor<Srgb> {
    let [r, g, b, a] = color.to_u8_array();
    AlphaColor::from_rgba8(r, g, b, a)
}

impl Canvas for RasterCanvas {
    fn width(&self) -> u32 {
        u32::from(self.width)
    }

    fn height(&self) -> u32 {
        u32::from(self.height)
    }

    fn new_sub_path(&mut self) {
        self.path.push(PathCommand::NewSubPath);
    }

    fn move_to(&mut self, point: Point2d) {
        self.push_point(point, PathCommand::MoveTo);
    }

    fn line_to(&mut self, point: Point2d) {
        self.push_point(point, PathCommand::LineTo);
    }

    fn close_path(&mut self) {
        self.path.push(PathCommand::Close);
    }

    fn clear_path(&mut self) {
        self.path.clear();
    }

    fn draw_point(&mut self, center: Point2d, radius: f64) {
        if !center.x.is_finite() || !center.y.is_finite() || radius <= 0.0 {
            return;
        }

        self.path.push(PathCommand::Circle { center, radius });
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn fill_preserve(&mut self) -> Result<(), GeopaintError> {
        if self.path.is_empty() || self.fill_color.is_transparent() {
            return Ok(());
        }

        self.context.set_paint(to_vello_color(self.fill_color));
        self.context.fill_path(&self.path.to_bez_path());
        Ok(())
    }

    fn stroke(&mut self) -> Result<(), GeopaintError> {
        let path = self.path.to_bez_path();
        self.path.clear();

        if !(self.line_width > 0.0 && self.line_width.is_finite())
            || self.stroke_color.is_transparent()
        {
            return Ok(());
        }

        self.context.set_stroke(
            Stroke::new(self.line_width)
                .with_caps(Cap::Round)
                .with_join(Join::Round),
        );
        self.context.set_paint(to_vello_color(self.stroke_color));
        self.context.stroke_path(&path);
        Ok(())
    }

    fn export(&mut self) -> Result<Vec<u8>, GeopaintError> {
        let image = self.render();
        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes).write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ColorType::Rgba8,
        )?;
        Ok(bytes)
    }
}
