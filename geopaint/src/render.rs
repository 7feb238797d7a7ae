//! Converting features into canvas paths and painting them.
//!
//! Features are drawn one after another in input order, each later feature is painted over the earlier ones. For
//! every feature the renderer projects its vertices, builds a path on the canvas and then paints it:
//!
//! | Geometry       | Path                                                   | Paint                            |
//! |----------------|--------------------------------------------------------|----------------------------------|
//! | `Point`        | circle of `point_radius` around the projected point     | area paint                       |
//! | `LineString`   | segments between consecutive vertices                  | line paint, nothing without road |
//! | `Polygon`      | closed rings                                           | area paint                       |
//! | `MultiPolygon` | closed rings of each part, projected with another zoom | area paint once per part         |
//!
//! Area paint fills the path keeping it, and then strokes its outline.

use geopaint_types::{ClosedContour, GeoPoint2d, Geom, MultiPolygon, Point2d, Polygon};

use crate::attributes::{AttributeError, Attributes};
use crate::canvas::{Canvas, RasterCanvas};
use crate::error::GeopaintError;
use crate::feature::Feature;
use crate::options::{MalformedAttributePolicy, PolygonPaint, RenderOptions};
use crate::projector::Projector;
use crate::resolver::{AreaPaint, LinePaint, StyleResolver};
use crate::style::StyleTable;

/// Counts of features processed by [`Renderer::render`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderSummary {
    /// Features that were drawn.
    pub rendered: usize,
    /// Features that were skipped because their geometry cannot be drawn.
    pub skipped: usize,
}

/// Draws features on a [`Canvas`].
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    options: &'a RenderOptions,
    resolver: StyleResolver<'a>,
    projector: Projector,
}

impl<'a> Renderer<'a> {
    /// Creates a new renderer.
    pub fn new(style: &'a StyleTable, options: &'a RenderOptions) -> Self {
        Self {
            options,
            resolver: StyleResolver::new(style, options),
            projector: Projector::from_options(options),
        }
    }

    /// Creates a raster canvas of the configured size and draws all the features on it.
    pub fn render_image(&self, features: &[Feature]) -> Result<RasterCanvas, GeopaintError> {
        let mut canvas = RasterCanvas::with_background(
            self.options.width,
            self.options.height,
            self.options.background,
        )?;
        let summary = self.render(&mut canvas, features)?;
        log::info!(
            "Rendered {} features ({} skipped) to {}x{} image",
            summary.rendered,
            summary.skipped,
            self.options.width,
            self.options.height
        );

        Ok(canvas)
    }

    /// Draws all the features in order.
    ///
    /// The first error stops rendering. The error identifies the index of the feature that caused it.
    pub fn render<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        features: &[Feature],
    ) -> Result<RenderSummary, GeopaintError> {
        let mut summary = RenderSummary::default();
        for (index, feature) in features.iter().enumerate() {
            let rendered = self
                .render_feature(canvas, index, feature)
                .map_err(|err| match err {
                    err @ GeopaintError::MalformedAttribute { .. } => err,
                    err => GeopaintError::Feature {
                        feature: index,
                        source: Box::new(err),
                    },
                })?;

            if rendered {
                summary.rendered += 1;
            } else {
                summary.skipped += 1;
            }
        }

        Ok(summary)
    }

    /// Draws a single feature. `index` is used to identify the feature in logs and errors.
    ///
    /// Returns `false` if the feature was skipped.
    pub fn render_feature<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        index: usize,
        feature: &Feature,
    ) -> Result<bool, GeopaintError> {
        let attributes = &feature.attributes;
        match &feature.geometry {
            Geom::Point(point) => self.render_point(canvas, index, point, attributes),
            Geom::LineString(line) => {
                self.render_line(canvas, index, line.iter_points(), attributes)?;
                Ok(true)
            }
            Geom::Polygon(polygon) => {
                self.render_polygon(canvas, index, polygon, attributes)?;
                Ok(true)
            }
            Geom::MultiPolygon(multi_polygon) => {
                self.render_multi_polygon(canvas, index, multi_polygon, attributes)?;
                Ok(true)
            }
            Geom::Unsupported(kind) => {
                log::debug!("Feature #{index} has unsupported geometry type {kind}, skipping");
                Ok(false)
            }
            Geom::Empty(kind) => {
                log::debug!("Feature #{index} has empty {kind} geometry, skipping");
                Ok(false)
            }
        }
    }

    fn render_point<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        index: usize,
        point: &GeoPoint2d,
        attributes: &Attributes,
    ) -> Result<bool, GeopaintError> {
        let Some(projected) = self.projector.project(point, self.options.area_zoom) else {
            log::debug!("Feature #{index}: point {point:?} cannot be projected, skipping");
            return Ok(false);
        };

        canvas.draw_point(projected, self.options.point_radius);
        self.paint_area(canvas, index, attributes)?;
        Ok(true)
    }

    fn render_line<'p, C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        index: usize,
        points: impl Iterator<Item = &'p GeoPoint2d>,
        attributes: &Attributes,
    ) -> Result<(), GeopaintError> {
        canvas.new_sub_path();
        for point in self.project_points(index, points, self.options.area_zoom) {
            // Every segment is a separate subpath, so consecutive segments are never joined.
            canvas.line_to(point);
            canvas.move_to(point);
        }

        match self.line_paint(index, attributes)? {
            Some(paint) => apply_line_paint(canvas, &paint),
            None => {
                canvas.clear_path();
                Ok(())
            }
        }
    }

    fn render_polygon<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        index: usize,
        polygon: &Polygon<GeoPoint2d>,
        attributes: &Attributes,
    ) -> Result<(), GeopaintError> {
        let zoom = self.options.area_zoom;
        canvas.new_sub_path();

        match self.options.polygon_paint {
            PolygonPaint::PerPolygon => {
                for ring in polygon.iter_contours() {
                    self.add_ring(canvas, index, ring, zoom);
                    canvas.close_path();
                }
                self.paint_area(canvas, index, attributes)
            }
            PolygonPaint::Legacy => {
                for ring in polygon.iter_contours() {
                    for point in self.project_points(index, ring.iter_points(), zoom) {
                        canvas.line_to(point);
                    }
                    canvas.close_path();
                    self.paint_area(canvas, index, attributes)?;
                }
                Ok(())
            }
        }
    }

    fn render_multi_polygon<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        index: usize,
        multi_polygon: &MultiPolygon<GeoPoint2d>,
        attributes: &Attributes,
    ) -> Result<(), GeopaintError> {
        let zoom = self.options.multi_polygon_zoom;
        let close_every_ring = self.options.polygon_paint == PolygonPaint::PerPolygon;

        for polygon in multi_polygon.polygons() {
            for ring in polygon.iter_contours() {
                self.add_ring(canvas, index, ring, zoom);
                if close_every_ring {
                    canvas.close_path();
                }
            }

            if !close_every_ring {
                canvas.close_path();
            }
            self.paint_area(canvas, index, attributes)?;
        }

        Ok(())
    }

    /// Starts a new subpath at the first vertex of the ring and adds the rest of the vertices to it.
    fn add_ring<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        index: usize,
        ring: &ClosedContour<GeoPoint2d>,
        zoom: u8,
    ) {
        let mut points = self
            .project_points(index, ring.iter_points(), zoom)
            .into_iter();
        if let Some(first) = points.next() {
            canvas.move_to(first);
        }
        for point in points {
            canvas.line_to(point);
        }
    }

    fn project_points<'p>(
        &self,
        index: usize,
        points: impl Iterator<Item = &'p GeoPoint2d>,
        zoom: u8,
    ) -> Vec<Point2d> {
        points
            .filter_map(|point| {
                let projected = self.projector.project(point, zoom);
                if projected.is_none() {
                    log::debug!("Feature #{index}: vertex {point:?} cannot be projected, skipping");
                }
                projected
            })
            .collect()
    }

    fn paint_area<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        index: usize,
        attributes: &Attributes,
    ) -> Result<(), GeopaintError> {
        let paint = match self.resolver.resolve_area_style(attributes) {
            Ok(paint) => paint,
            Err(err) => {
                self.handle_malformed(index, err)?;
                self.resolver.default_area_paint()
            }
        };

        apply_area_paint(canvas, &paint)
    }

    fn line_paint(
        &self,
        index: usize,
        attributes: &Attributes,
    ) -> Result<Option<LinePaint>, GeopaintError> {
        match self.resolver.resolve_line_style(attributes) {
            Ok(paint) => Ok(paint),
            Err(err) => {
                self.handle_malformed(index, err)?;
                Ok(Some(self.resolver.default_line_paint()))
            }
        }
    }

    fn handle_malformed(&self, index: usize, err: AttributeError) -> Result<(), GeopaintError> {
        match self.options.on_malformed_attribute {
            MalformedAttributePolicy::Fallback => {
                log::warn!("Feature #{index}: {err}, default paint is used");
                Ok(())
            }
            MalformedAttributePolicy::Abort => Err(GeopaintError::MalformedAttribute {
                feature: index,
                source: err,
            }),
        }
    }
}

fn apply_area_paint<C: Canvas + ?Sized>(
    canvas: &mut C,
    paint: &AreaPaint,
) -> Result<(), GeopaintError> {
    canvas.set_fill_color(paint.fill_color);
    canvas.fill_preserve()?;
    canvas.set_stroke_color(paint.border_color);
    canvas.set_line_width(paint.line_width);
    canvas.stroke()
}

fn apply_line_paint<C: Canvas + ?Sized>(
    canvas: &mut C,
    paint: &LinePaint,
) -> Result<(), GeopaintError> {
    canvas.set_stroke_color(paint.color);
    canvas.set_line_width(paint.width);
    canvas.stroke()
}
