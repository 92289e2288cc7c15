use crate::error::Result;
use crate::math::polygon_2d::{
    is_convex_polygon_with, polygon_convexity_with, signed_area_2d, Convexity,
};
use crate::math::{Point2, Tolerance};

/// An ordered, implicitly closed sequence of vertices.
///
/// Vertex order defines the winding; the last vertex connects back to the first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2>,
}

impl Polygon {
    /// Creates a polygon from its vertices in order.
    #[must_use]
    pub fn new(vertices: Vec<Point2>) -> Self {
        Self { vertices }
    }

    /// Returns the vertices in order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Whether the polygon has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the polygon with the opposite winding.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }

    /// Signed area, positive for counter-clockwise winding.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.vertices)
    }

    /// Whether every turn goes the same way.
    #[must_use]
    pub fn is_convex(&self, tol: Tolerance) -> bool {
        is_convex_polygon_with(&self.vertices, tol)
    }

    /// Classifies convexity and winding.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewVertices` or `GeometryError::Collinear`
    /// for inputs that do not form a polygon.
    pub fn convexity(&self, tol: Tolerance) -> Result<Convexity> {
        polygon_convexity_with(&self.vertices, tol)
    }
}

impl FromIterator<Point2> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point2>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::polygon_2d::Winding;

    fn hexagon() -> Polygon {
        (0..6_u32)
            .map(|k| {
                let angle = f64::from(k) * std::f64::consts::PI / 3.0;
                Point2::new(angle.cos(), angle.sin())
            })
            .collect()
    }

    #[test]
    fn regular_hexagon_either_winding() {
        let tol = Tolerance::default();
        let hex = hexagon();
        assert!(hex.is_convex(tol));
        assert!(hex.reversed().is_convex(tol));
        assert_eq!(
            hex.reversed().convexity(tol).unwrap(),
            Convexity::Convex(Winding::Clockwise)
        );
    }

    #[test]
    fn hexagon_area() {
        let expected = 3.0 * 3.0_f64.sqrt() / 2.0;
        assert!((hexagon().signed_area() - expected).abs() < 1e-12);
        assert!((hexagon().reversed().signed_area() + expected).abs() < 1e-12);
    }

    #[test]
    fn empty_polygon() {
        let poly = Polygon::default();
        assert!(poly.is_empty());
        assert!(!poly.is_convex(Tolerance::default()));
        assert!(poly.convexity(Tolerance::default()).is_err());
    }
}
