use tracing::debug;

use super::orient_2d::cross_2d;
use super::{Point2, Tolerance};
use crate::error::{GeometryError, Result};

/// Direction in which a polygon's vertices turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
}

/// Convexity of a polygon with at least one turning vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convexity {
    /// Every non-collinear turn goes the same way.
    Convex(Winding),
    /// Turns in both directions were found.
    Concave,
}

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Classifies the convexity of a cyclic vertex sequence.
///
/// Each consecutive triple `(p[i], p[i+1], p[i+2])`, wrapping around, is one
/// turn. Collinear triples are skipped.
///
/// # Errors
///
/// Returns `GeometryError::TooFewVertices` for fewer than 3 points and
/// `GeometryError::Collinear` if no triple turns.
pub fn polygon_convexity(points: &[Point2]) -> Result<Convexity> {
    polygon_convexity_with(points, Tolerance::default())
}

/// [`polygon_convexity`] with an explicit tolerance.
///
/// # Errors
///
/// Returns `GeometryError::TooFewVertices` for fewer than 3 points and
/// `GeometryError::Collinear` if no triple turns.
pub fn polygon_convexity_with(points: &[Point2], tol: Tolerance) -> Result<Convexity> {
    let n = points.len();
    if n < 3 {
        return Err(GeometryError::TooFewVertices { count: n }.into());
    }

    let mut first: Option<bool> = None;
    for i in 0..n {
        let o = &points[i];
        let a = &points[(i + 1) % n];
        let b = &points[(i + 2) % n];
        let cp = cross_2d(o, a, b);
        if tol.is_zero(cp) {
            continue;
        }
        let left = cp > 0.0;
        match first {
            None => first = Some(left),
            Some(sign) if sign != left => return Ok(Convexity::Concave),
            Some(_) => {}
        }
    }

    match first {
        Some(true) => Ok(Convexity::Convex(Winding::CounterClockwise)),
        Some(false) => Ok(Convexity::Convex(Winding::Clockwise)),
        None => {
            debug!(vertices = n, "polygon_convexity: all vertices collinear");
            Err(GeometryError::Collinear.into())
        }
    }
}

/// Whether the polygon is convex.
///
/// Fewer than 3 points or all-collinear vertices give `false`.
#[must_use]
pub fn is_convex_polygon(points: &[Point2]) -> bool {
    is_convex_polygon_with(points, Tolerance::default())
}

/// [`is_convex_polygon`] with an explicit tolerance.
#[must_use]
pub fn is_convex_polygon_with(points: &[Point2], tol: Tolerance) -> bool {
    matches!(
        polygon_convexity_with(points, tol),
        Ok(Convexity::Convex(_))
    )
}
