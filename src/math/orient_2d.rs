use super::{Point2, Tolerance, Vector2};

/// Turning direction of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    Collinear,
}

/// Perp-dot product `u.x * v.y - u.y * v.x`.
#[must_use]
pub fn perp_dot(u: &Vector2, v: &Vector2) -> f64 {
    u.x * v.y - u.y * v.x
}

/// 2D cross product `(a - o) x (b - o)`.
///
/// Positive when `o -> a -> b` turns left.
#[must_use]
pub fn cross_2d(o: &Point2, a: &Point2, b: &Point2) -> f64 {
    perp_dot(&(a - o), &(b - o))
}

/// Classifies the turn `a -> b -> c`.
///
/// `CounterClockwise` exactly when `(c.y - a.y)(b.x - a.x)` exceeds
/// `(b.y - a.y)(c.x - a.x)` by more than the tolerance.
#[must_use]
pub fn orientation(a: &Point2, b: &Point2, c: &Point2, tol: Tolerance) -> Orientation {
    let cross = cross_2d(a, b, c);
    if tol.is_zero(cross) {
        Orientation::Collinear
    } else if cross > 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Clockwise
    }
}
