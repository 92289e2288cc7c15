mod circle;
mod polygon;
mod segment;

pub use circle::Circle;
pub use polygon::Polygon;
pub use segment::Segment;
