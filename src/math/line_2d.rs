use tracing::debug;

use super::orient_2d::perp_dot;
use super::{Point2, Tolerance};
use crate::error::{GeometryError, Result};

/// Whether `p` lies on the infinite line through `line_start` and `line_end`.
///
/// # Errors
///
/// Returns `GeometryError::DegenerateLine` if the two defining points coincide.
pub fn point_on_line(p: &Point2, line_start: &Point2, line_end: &Point2) -> Result<bool> {
    point_on_line_with(p, line_start, line_end, Tolerance::default())
}

/// [`point_on_line`] with an explicit tolerance.
///
/// # Errors
///
/// Returns `GeometryError::DegenerateLine` if the two defining points coincide.
pub fn point_on_line_with(
    p: &Point2,
    line_start: &Point2,
    line_end: &Point2,
    tol: Tolerance,
) -> Result<bool> {
    let v1 = p - line_start;
    let v2 = line_end - line_start;
    if tol.is_zero(v2.norm()) {
        debug!(?line_start, ?line_end, "point_on_line: degenerate line");
        return Err(GeometryError::DegenerateLine.into());
    }
    Ok(tol.is_zero(perp_dot(&v1, &v2)))
}
