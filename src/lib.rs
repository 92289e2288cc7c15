pub mod error;
pub mod geometry;
pub mod math;

pub use error::{PredicateError, Result};
pub use math::intersect_2d::{circles_intersection, lines_intersect};
pub use math::line_2d::point_on_line;
pub use math::polygon_2d::is_convex_polygon;
pub use math::{Point2, Tolerance, EPS};
