//! Runs each predicate on fixed sample inputs and prints one line per result.
//!
//! Usage:
//! ```text
//! cargo run --bin predicates_demo
//! RUST_LOG=planar_predicates=debug cargo run --bin predicates_demo
//! ```

use planar_predicates::{
    circles_intersection, is_convex_polygon, lines_intersect, point_on_line, Point2, Result,
};
use tracing::info;

fn fmt_point(p: &Point2) -> String {
    format!("({}, {})", p.x, p.y)
}

fn fmt_polygon(points: &[Point2]) -> String {
    let inner: Vec<String> = points.iter().map(fmt_point).collect();
    format!("[{}]", inner.join(", "))
}

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for the library.
    // Override with RUST_LOG env var (e.g. RUST_LOG=planar_predicates=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("planar_predicates=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    println!("=== Geometry predicates ===");

    let p = Point2::new(1.0, 1.0);
    let l1 = Point2::new(0.0, 0.0);
    let l2 = Point2::new(2.0, 2.0);
    let on_line = point_on_line(&p, &l1, &l2)?;
    println!(
        "Point {} on line through {} and {}: {on_line}",
        fmt_point(&p),
        fmt_point(&l1),
        fmt_point(&l2)
    );

    let crossing = lines_intersect(
        &Point2::new(0.0, 0.0),
        &Point2::new(2.0, 2.0),
        &Point2::new(0.0, 2.0),
        &Point2::new(2.0, 0.0),
    );
    println!("Segments intersect: {crossing}");

    let square = [
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(1.0, 1.0),
        Point2::new(0.0, 1.0),
    ];
    let zigzag = [
        Point2::new(0.0, 0.0),
        Point2::new(2.0, 0.0),
        Point2::new(1.0, 1.0),
        Point2::new(1.0, 2.0),
    ];
    for polygon in [&square, &zigzag] {
        println!(
            "Polygon {} convex: {}",
            fmt_polygon(polygon),
            is_convex_polygon(polygon)
        );
    }

    let count = circles_intersection(&Point2::new(0.0, 0.0), 2.0, &Point2::new(3.0, 0.0), 2.0);
    println!("Circles intersect at {count} point(s)");

    info!("demo finished");
    Ok(())
}
