use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::fmt;

use crate::Orientation;

/// A point with three `f64` coordinates.
///
/// Hull computations only look at `x` and `y`; `z` is carried along so that
/// points survive a round trip through the CH format unchanged. Two points
/// are equal when all three coordinates are equal.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
  pub x: f64,
  pub y: f64,
  pub z: f64,
}

// Random sampling.
impl Distribution<Point> for Standard {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
    Point::new_xy(rng.gen(), rng.gen())
  }
}

impl Point {
  pub const fn new(x: f64, y: f64, z: f64) -> Point {
    Point { x, y, z }
  }

  /// Planar point, `z` is zero.
  pub const fn new_xy(x: f64, y: f64) -> Point {
    Point::new(x, y, 0.0)
  }

  /// Point on the x-axis.
  pub const fn new_x(x: f64) -> Point {
    Point::new(x, 0.0, 0.0)
  }

  pub fn x_coord(&self) -> f64 {
    self.x
  }

  pub fn y_coord(&self) -> f64 {
    self.y
  }

  pub fn z_coord(&self) -> f64 {
    self.z
  }

  pub fn set_x(&mut self, x: f64) {
    self.x = x;
  }

  pub fn set_y(&mut self, y: f64) {
    self.y = y;
  }

  pub fn set_z(&mut self, z: f64) {
    self.z = z;
  }

  /// Planar squared distance, `z` is ignored.
  pub fn squared_euclidean_distance(&self, rhs: &Point) -> f64 {
    let dx = self.x - rhs.x;
    let dy = self.y - rhs.y;
    dx * dx + dy * dy
  }

  /// Planar distance, `z` is ignored.
  pub fn euclidean_distance(&self, rhs: &Point) -> f64 {
    self.squared_euclidean_distance(rhs).sqrt()
  }

  /// Compare the planar distances from `self` to `p` and to `q`.
  pub fn cmp_distance_to(&self, p: &Point, q: &Point) -> std::cmp::Ordering {
    self
      .squared_euclidean_distance(p)
      .total_cmp(&self.squared_euclidean_distance(q))
  }

  /// True if the planar coordinates match, `z` may differ.
  pub fn same_xy(&self, other: &Point) -> bool {
    self.x == other.x && self.y == other.y
  }

  /// The turn made when walking from `self` to `q` to `r`.
  pub fn orientation(&self, q: &Point, r: &Point) -> Orientation {
    Orientation::new(self, q, r)
  }

  /// Alias of [`Orientation::new`].
  pub fn orient(p1: &Point, p2: &Point, p3: &Point) -> Orientation {
    Orientation::new(p1, p2, p3)
  }
}

impl From<(f64, f64)> for Point {
  fn from(point: (f64, f64)) -> Point {
    Point::new_xy(point.0, point.1)
  }
}

impl From<(f64, f64, f64)> for Point {
  fn from(point: (f64, f64, f64)) -> Point {
    Point::new(point.0, point.1, point.2)
  }
}

impl From<[f64; 2]> for Point {
  fn from(array: [f64; 2]) -> Point {
    Point::new_xy(array[0], array[1])
  }
}

impl From<[f64; 3]> for Point {
  fn from(array: [f64; 3]) -> Point {
    Point::new(array[0], array[1], array[2])
  }
}

impl fmt::Display for Point {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {}, {})", self.x, self.y, self.z)
  }
}
