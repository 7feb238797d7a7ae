/// Ordered sequence of points, rendered as a polyline.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Contour<Point> {
    points: Vec<Point>,
}

impl<Point> Contour<Point> {
    /// Creates a new open contour.
    pub fn open(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Iterates over the points of the contour.
    pub fn iter_points(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }
}

/// A ring: a contour that always connects its last point back to the first one.
///
/// The ring may or may not repeat its first point at the end, both forms are drawn the same way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClosedContour<Point> {
    /// Points of the contour.
    pub points: Vec<Point>,
}

impl<Point> ClosedContour<Point> {
    /// Creates a new closed contour.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Iterates over the points of the contour.
    pub fn iter_points(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }
}
