mod line;
pub(crate) mod point;
mod polar_point;
pub mod polygon;

pub use line::Line;
pub use point::Point;
pub use polar_point::PolarPoint;
pub use polygon::Polygon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
