//! Path commands recorded by a canvas.

use geopaint_types::Point2d;
use vello_cpu::kurbo::{BezPath, Circle, Point, Shape};

const CIRCLE_TOLERANCE: f64 = 0.1;

/// Command of a [`CanvasPath`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// End the current subpath and forget the current point.
    NewSubPath,
    /// Start a new subpath.
    MoveTo(Point2d),
    /// Add a segment.
    LineTo(Point2d),
    /// Close the current subpath.
    Close,
    /// Add a closed circle.
    Circle {
        /// Center of the circle.
        center: Point2d,
        /// Radius of the circle.
        radius: f64,
    },
}

/// Sequence of path commands with cairo-like semantics.
///
/// * `LineTo` without a current point starts a new subpath at that point.
/// * After `Close` the current point is the first point of the closed subpath, so a following `LineTo` starts a new
///   subpath from there.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CanvasPath {
    commands: Vec<PathCommand>,
}

impl CanvasPath {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a command.
    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    /// Removes all commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Returns true if there are no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Commands of the path.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Converts the commands into a `kurbo` path.
    pub fn to_bez_path(&self) -> BezPath {
        let to_point = |p: &Point2d| Point::new(p.x, p.y);

        let mut path = BezPath::new();
        let mut is_open = false;
        let mut start: Option<Point2d> = None;

        for command in &self.commands {
            match command {
                PathCommand::NewSubPath => {
                    is_open = false;
                    start = None;
                }
                PathCommand::MoveTo(p) => {
                    path.move_to(to_point(p));
                    is_open = true;
                    start = Some(*p);
                }
                PathCommand::LineTo(p) => {
                    if is_open {
                        path.line_to(to_point(p));
                        continue;
                    }

                    match start {
                        Some(s) => {
                            path.move_to(to_point(&s));
                            path.line_to(to_point(p));
                        }
                        None => {
                            path.move_to(to_point(p));
                            start = Some(*p);
                        }
                    }
                    is_open = true;
                }
                PathCommand::Close => {
                    if is_open {
                        path.close_path();
                        is_open = false;
                    }
                }
                PathCommand::Circle { center, radius } => {
                    path.extend(
                        Circle::new(to_point(center), *radius).path_elements(CIRCLE_TOLERANCE),
                    );
                    is_open = false;
                    start = None;
                }
            }
        }

        path
    }
}
