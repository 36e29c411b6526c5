use log::{debug, trace};
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

use super::{colinear_hull, trivial_hull, Hull};
use crate::data::{Line, Point};
use crate::{cmp_xy, planar_to_polar, Error, Orientation};

// https://en.wikipedia.org/wiki/Graham_scan

// Properties:
//    No panics.
//    The input points are returned in their original order.
//    No points are outside the resulting hull.
/// $O(n \log n)$ Convex hull of a set of points.
///
/// [Graham scan][wiki] around an interior point. Every point is converted to
/// polar coordinates around the centroid of the input, with the direction
/// towards the rightmost point as angle zero. The points are then visited in
/// order of increasing angle while a stack of candidate vertices is kept
/// convex, wrapping around to the first point at the end.
///
/// # Ordering
/// Indices refer to the input order. Vertices are counter-clockwise,
/// starting at the rightmost point (largest x, then largest y).
///
/// # Errors
/// [`Error::EmptyPointSet`] if `pts` is empty.
///
/// # Properties
/// * No points from the input set will be outside the returned hull.
/// * All vertices in the hull are from the input set.
/// * Colinear inputs reduce to their two extreme points.
///
/// # Examples
///
/// ```rust
/// # use planar_hull::algorithms::convex_hull;
/// # use planar_hull::data::Point;
/// # use planar_hull::Error;
/// assert_eq!(convex_hull(vec![]).err(), Some(Error::EmptyPointSet));
///
/// let hull = convex_hull(vec![
///   Point::new_xy(0., 0.),
///   Point::new_xy(2., 0.),
///   Point::new_xy(1., 1.),
///   Point::new_xy(2., 2.),
///   Point::new_xy(0., 2.),
/// ])
/// .unwrap();
/// assert_eq!(hull.indices, vec![3, 4, 0, 1]);
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Graham_scan
pub fn convex_hull(pts: Vec<Point>) -> Result<Hull, Error> {
  if let Some(indices) = trivial_hull(&pts)? {
    return Ok(Hull::new(indices, pts));
  }
  // The centroid of a colinear set lies on the boundary, not inside.
  if let Some(indices) = colinear_hull(&pts) {
    debug!("graham scan: {} colinear points", pts.len());
    return Ok(Hull::new(indices, pts));
  }

  let origin = centroid(&pts);
  let start = rightmost_point_index(&pts);
  let polar = planar_to_polar(&pts, &origin, &Line::new(origin, pts[start]))?;

  // The rightmost point has angle exactly zero. Sorting far before near
  // makes it come first even if other points share its angle.
  let mut order: Vec<usize> = (0..pts.len()).collect();
  order.sort_unstable_by_key(|&i| {
    (
      OrderedFloat(polar[i].theta),
      Reverse(OrderedFloat(polar[i].radius)),
      i,
    )
  });
  trace!("graham scan: angular order {:?}", order);

  let mut stack: Vec<usize> = Vec::with_capacity(pts.len() + 1);
  stack.push(order[0]);
  for &i in order[1..].iter().chain(std::iter::once(&order[0])) {
    stack.push(i);
    // Drop the middle of the last three until they turn left. The bottom of
    // the stack is a hull vertex and is never removed.
    while let &[.., a, b, c] = stack.as_slice() {
      if Orientation::new(&pts[a], &pts[b], &pts[c]).is_ccw() {
        break;
      }
      stack.remove(stack.len() - 2);
    }
  }
  // The scan closes on the first point.
  stack.pop();

  debug!(
    "graham scan: {} points, {} hull vertices",
    pts.len(),
    stack.len()
  );
  Ok(Hull::new(stack, pts))
}

// Arithmetic mean of the planar coordinates. Strictly inside the hull of any
// set that is not colinear.
fn centroid(pts: &[Point]) -> Point {
  let n = pts.len() as f64;
  let (x, y) = pts
    .iter()
    .fold((0.0, 0.0), |(x, y), pt| (x + pt.x, y + pt.y));
  Point::new_xy(x / n, y / n)
}

// Largest x, then largest y. Always a hull vertex.
// O(n)
fn rightmost_point_index(pts: &[Point]) -> usize {
  pts
    .iter()
    .enumerate()
    .max_by(|(_, a), (_, b)| cmp_xy(a, b))
    .map_or(0, |(index, _)| index)
}
