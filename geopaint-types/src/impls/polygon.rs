use crate::impls::contour::ClosedContour;

/// Polygon with an outer boundary and optional holes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon<P> {
    /// Outer contour.
    pub outer_contour: ClosedContour<P>,
    /// Inner contours (holes).
    pub inner_contours: Vec<ClosedContour<P>>,
}

impl<P> Polygon<P> {
    /// Creates a polygon from a list of rings. The first ring is the outer boundary, the rest are holes.
    ///
    /// Returns `None` if the list is empty.
    pub fn from_rings(rings: Vec<Vec<P>>) -> Option<Self> {
        let mut iter = rings.into_iter();
        let outer_contour = ClosedContour::new(iter.next()?);
        Some(Self {
            outer_contour,
            inner_contours: iter.map(ClosedContour::new).collect(),
        })
    }

    /// Iterates over all the rings of the polygon, starting with the outer one.
    pub fn iter_contours(&self) -> impl Iterator<Item = &ClosedContour<P>> {
        std::iter::once(&self.outer_contour).chain(self.inner_contours.iter())
    }
}

impl<P> From<Vec<P>> for Polygon<P> {
    fn from(value: Vec<P>) -> Self {
        Self {
            outer_contour: ClosedContour::new(value),
            inner_contours: vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contours_start_with_outer_ring() {
        let polygon = Polygon::from_rings(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap();
        let firsts: Vec<_> = polygon.iter_contours().map(|c| c.points[0]).collect();
        assert_eq!(firsts, vec![1, 4, 7]);
    }

    #[test]
    fn no_rings_no_polygon() {
        assert!(Polygon::<i32>::from_rings(vec![]).is_none());
    }
}
