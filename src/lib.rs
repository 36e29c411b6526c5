//! Convex hulls of planar point sets.
//!
//! Three interchangeable algorithms are provided:
//!
//! * [Monotone chain](algorithms::convex_hull::monotone_chain) (Andrew),
//!   $O(n \log n)$, counter-clockwise output.
//! * [Graham scan](algorithms::convex_hull::graham_scan) around the centroid,
//!   $O(n \log n)$, counter-clockwise output.
//! * [Gift wrapping](algorithms::convex_hull::gift_wrapping) (Jarvis march),
//!   $O(nh)$, clockwise output.
//!
//! Hulls can be written to and read back from the plain-text CH format, see
//! [io].
//!
//! ```rust
//! # use planar_hull::algorithms::Algorithm;
//! # use planar_hull::data::Point;
//! let points = vec![
//!   Point::new_xy(0., 0.),
//!   Point::new_xy(4., 0.),
//!   Point::new_xy(4., 4.),
//!   Point::new_xy(0., 4.),
//!   Point::new_xy(2., 2.),
//! ];
//! let hull = Algorithm::MonotoneChain.convex_hull(points).unwrap();
//! assert_eq!(hull.len(), 4);
//! ```
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
use ordered_float::OrderedFloat;
use std::cmp::Ordering;

pub mod algorithms;
pub mod data;
pub mod io;
mod orientation;
mod transformation;

pub use orientation::Orientation;
pub use transformation::{planar_to_polar, planar_to_polar_default, planar_to_polar_from};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
  /// Hull algorithms are undefined for zero points.
  #[error("Empty point set")]
  EmptyPointSet,
  /// A direction line whose start and end coincide in the plane.
  #[error("Direction line has zero length")]
  DegenerateDirection,
  #[error("Index {index} out of range for polygon with {len} vertices")]
  IndexOutOfRange { index: usize, len: usize },
}

/// Lexicographic (x, then y) total order on planar coordinates.
///
/// NaN sorts after every other value, see [`OrderedFloat`].
pub(crate) fn cmp_xy(a: &data::Point, b: &data::Point) -> Ordering {
  (OrderedFloat(a.x), OrderedFloat(a.y)).cmp(&(OrderedFloat(b.x), OrderedFloat(b.y)))
}

#[cfg(test)]
pub mod testing;
