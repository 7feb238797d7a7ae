use crate::impls::polygon::Polygon;

/// A set of polygons.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiPolygon<P> {
    /// Inner polygons.
    pub parts: Vec<Polygon<P>>,
}

impl<P> From<Vec<Polygon<P>>> for MultiPolygon<P> {
    fn from(parts: Vec<Polygon<P>>) -> Self {
        Self { parts }
    }
}

impl<P> MultiPolygon<P> {
    /// Iterates over the inner polygons.
    pub fn polygons(&self) -> impl Iterator<Item = &Polygon<P>> {
        self.parts.iter()
    }
}
