use tracing::debug;

use super::orient_2d::{orientation, perp_dot, Orientation};
use super::{Point2, Tolerance, Vector2};

/// Whether segments `line1_start..line1_end` and `line2_start..line2_end`
/// properly cross.
///
/// Both endpoints of each segment must lie strictly on opposite sides of the
/// other segment's line. Collinear overlaps, shared endpoints and T-junctions
/// are not proper crossings.
#[must_use]
pub fn lines_intersect(
    line1_start: &Point2,
    line1_end: &Point2,
    line2_start: &Point2,
    line2_end: &Point2,
) -> bool {
    lines_intersect_with(line1_start, line1_end, line2_start, line2_end, Tolerance::default())
}

/// [`lines_intersect`] with an explicit tolerance.
#[must_use]
pub fn lines_intersect_with(
    line1_start: &Point2,
    line1_end: &Point2,
    line2_start: &Point2,
    line2_end: &Point2,
    tol: Tolerance,
) -> bool {
    let (a, b) = (line1_start, line1_end);
    let (c, d) = (line2_start, line2_end);
    opposite(orientation(a, c, d, tol), orientation(b, c, d, tol))
        && opposite(orientation(a, b, c, tol), orientation(a, b, d, tol))
}

fn opposite(o1: Orientation, o2: Orientation) -> bool {
    matches!(
        (o1, o2),
        (Orientation::CounterClockwise, Orientation::Clockwise)
            | (Orientation::Clockwise, Orientation::CounterClockwise)
    )
}

/// Crossing point of two properly intersecting segments.
///
/// Returns `None` whenever [`lines_intersect_with`] is false.
#[must_use]
pub fn segment_intersection_point(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
    tol: Tolerance,
) -> Option<Point2> {
    if !lines_intersect_with(a0, a1, b0, b1, tol) {
        return None;
    }
    let da = a1 - a0;
    let db = b1 - b0;
    let cross = perp_dot(&da, &db);
    if tol.is_zero(cross) {
        return None;
    }
    let t = perp_dot(&(b0 - a0), &db) / cross;
    Some(a0 + da * t.clamp(0.0, 1.0))
}

/// How two circles relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircleRelation {
    /// Too far apart to touch.
    Separate,
    /// One strictly inside the other.
    Contained,
    /// Same center and radius. Counted as zero intersections.
    Coincident,
    /// Touching from outside.
    ExternallyTangent,
    /// Touching from inside.
    InternallyTangent,
    /// Crossing at two points.
    Crossing,
}

impl CircleRelation {
    /// Number of intersection points: 0, 1 or 2.
    #[must_use]
    pub fn intersection_count(self) -> usize {
        match self {
            Self::Separate | Self::Contained | Self::Coincident => 0,
            Self::ExternallyTangent | Self::InternallyTangent => 1,
            Self::Crossing => 2,
        }
    }
}

/// Classifies two circles by center distance against the sum and
/// difference of the radii.
///
/// Each bound is compared once through a signed gap, so every distance falls
/// in exactly one band: `gap >= eps` is clear of the bound, `|gap| < eps`
/// touches it. Centers closer than eps with different radii are `Contained`.
#[must_use]
pub fn circle_relation(
    c1_center: &Point2,
    c1_radius: f64,
    c2_center: &Point2,
    c2_radius: f64,
    tol: Tolerance,
) -> CircleRelation {
    let d = (c2_center - c1_center).norm();
    let outer_gap = d - (c1_radius + c2_radius);
    let inner_gap = (c1_radius - c2_radius).abs() - d;

    if tol.is_zero(d) {
        if tol.is_zero(c1_radius - c2_radius) {
            debug!(?c1_center, c1_radius, "circle_relation: coincident circles");
            return CircleRelation::Coincident;
        }
        return CircleRelation::Contained;
    }

    if outer_gap >= tol.eps() {
        CircleRelation::Separate
    } else if tol.is_zero(outer_gap) {
        CircleRelation::ExternallyTangent
    } else if inner_gap >= tol.eps() {
        CircleRelation::Contained
    } else if tol.is_zero(inner_gap) {
        CircleRelation::InternallyTangent
    } else {
        CircleRelation::Crossing
    }
}

/// Counts the intersection points of two circles (0, 1 or 2).
///
/// Coincident circles count as 0. Radii are not validated.
#[must_use]
pub fn circles_intersection(
    c1_center: &Point2,
    c1_radius: f64,
    c2_center: &Point2,
    c2_radius: f64,
) -> usize {
    circles_intersection_with(c1_center, c1_radius, c2_center, c2_radius, Tolerance::default())
}

/// [`circles_intersection`] with an explicit tolerance.
#[must_use]
pub fn circles_intersection_with(
    c1_center: &Point2,
    c1_radius: f64,
    c2_center: &Point2,
    c2_radius: f64,
    tol: Tolerance,
) -> usize {
    circle_relation(c1_center, c1_radius, c2_center, c2_radius, tol).intersection_count()
}

/// Intersection points of two circles.
///
/// Returns one point for tangent circles, two for crossing circles and none
/// otherwise, consistent with [`circle_relation`].
#[must_use]
pub fn circle_circle_points_2d(
    c1_center: &Point2,
    r1: f64,
    c2_center: &Point2,
    r2: f64,
    tol: Tolerance,
) -> Vec<Point2> {
    let count = circle_relation(c1_center, r1, c2_center, r2, tol).intersection_count();
    if count == 0 {
        return Vec::new();
    }
    // A non-zero count implies the centers are at least eps apart.
    let delta = c2_center - c1_center;
    let dist = delta.norm();
    let dir = delta / dist;

    // Distance from c1 along c1->c2 to the radical line.
    let a = (r1 * r1 - r2 * r2 + dist * dist) / (2.0 * dist);
    let mid = c1_center + dir * a;
    if count == 1 {
        return vec![mid];
    }

    let h = (r1 * r1 - a * a).max(0.0).sqrt();
    let perp = Vector2::new(-dir.y, dir.x);
    vec![mid + perp * h, mid - perp * h]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::EPS;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn diagonals_cross() {
        assert!(lines_intersect(&p(0.0, 0.0), &p(2.0, 2.0), &p(0.0, 2.0), &p(2.0, 0.0)));
    }

    #[test]
    fn parallel_segments_do_not_cross() {
        assert!(!lines_intersect(&p(0.0, 0.0), &p(1.0, 0.0), &p(0.0, 1.0), &p(1.0, 1.0)));
    }

    #[test]
    fn collinear_overlap_is_not_proper() {
        assert!(!lines_intersect(&p(0.0, 0.0), &p(2.0, 0.0), &p(1.0, 0.0), &p(3.0, 0.0)));
    }

    #[test]
    fn shared_endpoint_is_not_proper() {
        assert!(!lines_intersect(&p(0.0, 0.0), &p(1.0, 1.0), &p(1.0, 1.0), &p(2.0, 0.0)));
    }

    #[test]
    fn t_junction_is_not_proper_either_way() {
        let (a, b) = (p(0.0, 0.0), p(2.0, 0.0));
        assert!(!lines_intersect(&a, &b, &p(1.0, 0.0), &p(1.0, 1.0)));
        assert!(!lines_intersect(&a, &b, &p(1.0, 0.0), &p(1.0, -1.0)));
    }

    #[test]
    fn disjoint_non_parallel() {
        assert!(!lines_intersect(&p(0.0, 0.0), &p(1.0, 1.0), &p(3.0, 0.0), &p(2.0, 5.0)));
    }

    #[test]
    fn crossing_point_of_diagonals() {
        let pt = segment_intersection_point(
            &p(0.0, 0.0),
            &p(2.0, 2.0),
            &p(0.0, 2.0),
            &p(2.0, 0.0),
            Tolerance::default(),
        )
        .unwrap();
        assert_relative_eq!(pt.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(pt.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn crossing_point_none_for_parallel() {
        let pt = segment_intersection_point(
            &p(0.0, 0.0),
            &p(1.0, 0.0),
            &p(0.0, 1.0),
            &p(1.0, 1.0),
            Tolerance::default(),
        );
        assert!(pt.is_none());
    }

    #[test]
    fn circles_two_points() {
        assert_eq!(circles_intersection(&p(0.0, 0.0), 2.0, &p(3.0, 0.0), 2.0), 2);
    }

    #[test]
    fn circles_externally_tangent() {
        assert_eq!(circles_intersection(&p(0.0, 0.0), 2.0, &p(4.0, 0.0), 2.0), 1);
        assert_eq!(
            circle_relation(&p(0.0, 0.0), 2.0, &p(4.0, 0.0), 2.0, Tolerance::default()),
            CircleRelation::ExternallyTangent
        );
    }

    #[test]
    fn circles_internally_tangent() {
        assert_eq!(
            circle_relation(&p(0.0, 0.0), 3.0, &p(1.0, 0.0), 2.0, Tolerance::default()),
            CircleRelation::InternallyTangent
        );
        assert_eq!(circles_intersection(&p(0.0, 0.0), 3.0, &p(1.0, 0.0), 2.0), 1);
    }

    #[test]
    fn circles_too_far() {
        assert_eq!(circles_intersection(&p(0.0, 0.0), 2.0, &p(5.0, 0.0), 2.0), 0);
    }

    #[test]
    fn circle_inside_other() {
        assert_eq!(
            circle_relation(&p(0.0, 0.0), 5.0, &p(1.0, 0.0), 1.0, Tolerance::default()),
            CircleRelation::Contained
        );
    }

    #[test]
    fn identical_circles_count_zero() {
        assert_eq!(circles_intersection(&p(1.0, 1.0), 2.0, &p(1.0, 1.0), 2.0), 0);
        assert_eq!(
            circle_relation(&p(1.0, 1.0), 2.0, &p(1.0, 1.0), 2.0, Tolerance::default()),
            CircleRelation::Coincident
        );
    }

    #[test]
    fn concentric_different_radii() {
        assert_eq!(circles_intersection(&p(0.0, 0.0), 1.0, &p(0.0, 0.0), 2.0), 0);
    }

    #[test]
    fn tangency_survives_rounding() {
        // 0.1 + 0.2 != 0.3 exactly.
        assert_eq!(circles_intersection(&p(0.0, 0.0), 0.1, &p(0.3, 0.0), 0.2), 1);
    }

    #[test]
    fn crossing_points_on_both_circles() {
        let pts = circle_circle_points_2d(&p(0.0, 0.0), 1.0, &p(1.0, 0.0), 1.0, Tolerance::default());
        assert_eq!(pts.len(), 2);
        let sqrt3_2 = 3.0_f64.sqrt() / 2.0;
        for pt in &pts {
            assert_relative_eq!(pt.x, 0.5, epsilon = 1e-12);
            assert_relative_eq!(pt.y.abs(), sqrt3_2, epsilon = 1e-12);
        }
    }

    #[test]
    fn tangent_point() {
        let pts = circle_circle_points_2d(&p(0.0, 0.0), 2.0, &p(4.0, 0.0), 2.0, Tolerance::default());
        assert_eq!(pts.len(), 1);
        assert_relative_eq!(pts[0].x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(pts[0].y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn no_points_for_coincident() {
        let pts = circle_circle_points_2d(&p(0.0, 0.0), 2.0, &p(0.0, 0.0), 2.0, Tolerance::default());
        assert!(pts.is_empty());
    }

    #[test]
    fn just_beyond_touching_distance_never_crosses() {
        let tol = Tolerance::default();
        for step in 0..200_u32 {
            let r = 0.5 + f64::from(step) * 0.01;
            let outside = circle_relation(&p(0.0, 0.0), r, &p(2.0 * r + EPS, 0.0), r, tol);
            assert!(
                matches!(outside, CircleRelation::Separate | CircleRelation::ExternallyTangent),
                "r={r} relation={outside:?}"
            );
            assert_eq!(
                circle_relation(&p(0.0, 0.0), r, &p(2.0 * r + 2.0 * EPS, 0.0), r, tol),
                CircleRelation::Separate
            );
        }
    }

    #[test]
    fn just_inside_touching_distance_never_crosses() {
        let tol = Tolerance::default();
        let inside = circle_relation(&p(0.0, 0.0), 3.0, &p(1.0 - EPS, 0.0), 2.0, tol);
        assert!(
            matches!(inside, CircleRelation::Contained | CircleRelation::InternallyTangent),
            "relation={inside:?}"
        );
        assert_eq!(
            circle_relation(&p(0.0, 0.0), 3.0, &p(1.0 - 2.0 * EPS, 0.0), 2.0, tol),
            CircleRelation::Contained
        );
        assert_eq!(
            circle_relation(&p(0.0, 0.0), 3.0, &p(1.0 + 2.0 * EPS, 0.0), 2.0, tol),
            CircleRelation::Crossing
        );
    }

    #[test]
    fn near_concentric_counts_agree_with_points() {
        let tol = Tolerance::default();
        let (c1, c2) = (p(0.0, 0.0), p(6e-10, 0.0));
        let r2 = 1.0 + 1.5e-9;
        assert_eq!(circle_relation(&c1, 1.0, &c2, r2, tol), CircleRelation::Contained);
        assert_eq!(circles_intersection(&c1, 1.0, &c2, r2), 0);
        assert!(circle_circle_points_2d(&c1, 1.0, &c2, r2, tol).is_empty());
    }

    #[test]
    fn near_collinear_endpoint_is_not_a_crossing() {
        // (1, -1e-12) sits within eps of the x axis, so the vertical segment
        // only touches the horizontal one.
        let (a, b) = (p(0.0, 0.0), p(2.0, 0.0));
        let (c, d) = (p(1.0, -1e-12), p(1.0, 1.0));
        assert!(!lines_intersect(&a, &b, &c, &d));
        assert!(segment_intersection_point(&a, &b, &c, &d, Tolerance::default()).is_none());

        let strict = Tolerance::new(1e-15).unwrap();
        assert!(lines_intersect_with(&a, &b, &c, &d, strict));
    }
}
