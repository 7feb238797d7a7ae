/// Converts points from one coordinate space into another.
pub trait Projection {
    /// Type of the input point.
    type InPoint;
    /// Type of the output point.
    type OutPoint;

    /// Projects the point. Returns `None` if the point cannot be represented in the output space.
    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint>;
}
