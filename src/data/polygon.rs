use std::ops::Index;

use crate::data::{Point, PointLocation};
use crate::{Error, Orientation};

/// Ordered boundary of a polygon, tagged with its winding order.
///
/// Vertices are addressed with 0-based indices. The `clockwise` flag records
/// the order the vertices were produced in; it is not checked against the
/// geometry, see [`Polygon::winding`] for that.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
  points: Vec<Point>,
  clockwise: bool,
}

impl Polygon {
  /// Empty polygon with the given winding flag.
  pub fn new(clockwise: bool) -> Polygon {
    Polygon {
      points: Vec::new(),
      clockwise,
    }
  }

  pub fn from_points(points: Vec<Point>, clockwise: bool) -> Polygon {
    Polygon { points, clockwise }
  }

  pub fn is_clockwise(&self) -> bool {
    self.clockwise
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  /// $O(1)$
  ///
  /// # Errors
  /// [`Error::IndexOutOfRange`] if `index >= self.len()`.
  pub fn get(&self, index: usize) -> Result<&Point, Error> {
    self.points.get(index).ok_or(Error::IndexOutOfRange {
      index,
      len: self.points.len(),
    })
  }

  pub fn last(&self) -> Option<&Point> {
    self.points.last()
  }

  /// $O(n)$ Insert `pt` so that it ends up at position `index`.
  ///
  /// `index == self.len()` appends.
  ///
  /// # Errors
  /// [`Error::IndexOutOfRange`] if `index > self.len()`.
  pub fn insert(&mut self, index: usize, pt: Point) -> Result<(), Error> {
    if index > self.points.len() {
      return Err(Error::IndexOutOfRange {
        index,
        len: self.points.len(),
      });
    }
    self.points.insert(index, pt);
    Ok(())
  }

  /// Amortized $O(1)$
  pub fn push(&mut self, pt: Point) {
    self.points.push(pt);
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Point> {
    self.points.iter()
  }

  pub fn points(&self) -> &[Point] {
    &self.points
  }

  pub fn into_points(self) -> Vec<Point> {
    self.points
  }

  /// Twice the signed area. Positive for counter-clockwise vertex order.
  pub fn signed_area_2x(&self) -> f64 {
    let n = self.points.len();
    (0..n)
      .map(|i| {
        let p = &self.points[i];
        let q = &self.points[(i + 1) % n];
        p.x * q.y - q.x * p.y
      })
      .sum()
  }

  /// Orientation implied by the vertex order. `CoLinear` for polygons with
  /// zero area, including those with fewer than three vertices.
  pub fn winding(&self) -> Orientation {
    let area = self.signed_area_2x();
    if area > 0.0 {
      Orientation::CounterClockWise
    } else if area < 0.0 {
      Orientation::ClockWise
    } else {
      Orientation::CoLinear
    }
  }

  /// $O(n)$ Locate a point relative to a convex polygon.
  ///
  /// The result is only meaningful if the polygon is convex. Polygons with
  /// zero area are treated as segments (or a single point).
  pub fn locate(&self, pt: &Point) -> PointLocation {
    let n = self.points.len();
    match n {
      0 => return PointLocation::Outside,
      1 => {
        return if self.points[0].same_xy(pt) {
          PointLocation::OnBoundary
        } else {
          PointLocation::Outside
        }
      }
      _ => {}
    }
    let winding = self.winding();
    if winding.is_colinear() {
      let on_edge = |(a, b): (&Point, &Point)| {
        Orientation::new(a, b, pt).is_colinear() && on_segment(a, b, pt)
      };
      return if self.iter_edges().any(on_edge) {
        PointLocation::OnBoundary
      } else {
        PointLocation::Outside
      };
    }
    let mut on_boundary = false;
    for (a, b) in self.iter_edges() {
      match Orientation::new(a, b, pt) {
        Orientation::CoLinear => {
          if on_segment(a, b, pt) {
            on_boundary = true;
          } else {
            return PointLocation::Outside;
          }
        }
        turn if turn != winding => return PointLocation::Outside,
        _ => {}
      }
    }
    if on_boundary {
      PointLocation::OnBoundary
    } else {
      PointLocation::Inside
    }
  }

  /// Consecutive vertex pairs, closing back to the first vertex.
  pub fn iter_edges(&self) -> impl Iterator<Item = (&Point, &Point)> + '_ {
    let n = self.points.len();
    (0..n).map(move |i| (&self.points[i], &self.points[(i + 1) % n]))
  }
}

// Assumes a, b, pt are colinear.
fn on_segment(a: &Point, b: &Point, pt: &Point) -> bool {
  a.x.min(b.x) <= pt.x && pt.x <= a.x.max(b.x) && a.y.min(b.y) <= pt.y && pt.y <= a.y.max(b.y)
}

impl Index<usize> for Polygon {
  type Output = Point;
  fn index(&self, index: usize) -> &Point {
    &self.points[index]
  }
}

impl<'a> IntoIterator for &'a Polygon {
  type Item = &'a Point;
  type IntoIter = std::slice::Iter<'a, Point>;
  fn into_iter(self) -> Self::IntoIter {
    self.points.iter()
  }
}
