use crate::error::{GeometryError, Result};
use crate::math::intersect_2d::{circle_circle_points_2d, circle_relation, CircleRelation};
use crate::math::{Point2, Tolerance};

/// A circle in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidRadius` if the radius is negative or not finite.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(GeometryError::InvalidRadius { radius }.into());
        }
        Ok(Self { center, radius })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// How this circle relates to `other`.
    #[must_use]
    pub fn relation(&self, other: &Circle, tol: Tolerance) -> CircleRelation {
        circle_relation(&self.center, self.radius, &other.center, other.radius, tol)
    }

    /// Number of intersection points with `other` (0, 1 or 2).
    #[must_use]
    pub fn intersection_count(&self, other: &Circle, tol: Tolerance) -> usize {
        self.relation(other, tol).intersection_count()
    }

    /// The intersection points with `other`.
    #[must_use]
    pub fn intersection_points(&self, other: &Circle, tol: Tolerance) -> Vec<Point2> {
        circle_circle_points_2d(&self.center, self.radius, &other.center, other.radius, tol)
    }
}
