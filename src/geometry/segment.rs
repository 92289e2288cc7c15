use crate::error::Result;
use crate::math::intersect_2d::{lines_intersect_with, segment_intersection_point};
use crate::math::line_2d::point_on_line_with;
use crate::math::{Point2, Tolerance, Vector2};

/// A finite segment between two points.
///
/// Degenerate segments (coincident endpoints) are accepted; the predicates
/// define how they behave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point2,
    end: Point2,
}

impl Segment {
    /// Creates a new segment.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    /// Vector from start to end.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }

    /// Whether the endpoints coincide within `tol`.
    #[must_use]
    pub fn is_degenerate(&self, tol: Tolerance) -> bool {
        tol.is_zero(self.direction().norm())
    }

    /// Returns the segment with its endpoints swapped.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Whether `p` lies on the infinite line through this segment.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateLine` for a degenerate segment.
    pub fn line_contains(&self, p: &Point2, tol: Tolerance) -> Result<bool> {
        point_on_line_with(p, &self.start, &self.end, tol)
    }

    /// Whether this segment properly crosses `other`.
    #[must_use]
    pub fn intersects(&self, other: &Segment, tol: Tolerance) -> bool {
        lines_intersect_with(&self.start, &self.end, &other.start, &other.end, tol)
    }

    /// Crossing point with `other`, if the segments properly cross.
    #[must_use]
    pub fn intersection_point(&self, other: &Segment, tol: Tolerance) -> Option<Point2> {
        segment_intersection_point(&self.start, &self.end, &other.start, &other.end, tol)
    }
}
