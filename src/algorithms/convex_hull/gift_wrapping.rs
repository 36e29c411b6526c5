use log::{debug, warn};
use std::cmp::Ordering;

use super::{colinear_hull, trivial_hull, Hull};
use crate::data::Point;
use crate::{Error, Orientation};

// https://en.wikipedia.org/wiki/Gift_wrapping_algorithm

// Properties:
//    No panics.
//    Terminates after at most n+1 wrapping steps.
//    No points are outside the resulting hull.
/// Convex hull of a set of points.
///
/// [Gift Wrapping][wiki] algorithm (Jarvis march). Starting from a pivot
/// placed below and to the left of every input point, repeatedly pick the
/// point that every other point lies clockwise of, and move the pivot there.
/// The wrap stops when it arrives back at the first vertex it picked.
///
/// # Ordering
/// Indices refer to the input order. Vertices are **clockwise**.
///
/// # Errors
/// [`Error::EmptyPointSet`] if `pts` is empty.
///
/// # Properties
/// * No points from the input set will be outside the returned hull.
/// * All vertices in the hull are from the input set.
/// * Colinear inputs reduce to their two extreme points.
///
/// # Time complexity
/// $O(nh)$ where h is the number of hull vertices. Quadratic when every point
/// is on the hull.
///
/// # Examples
///
/// ```rust
/// # use planar_hull::algorithms::convex_hull::gift_wrapping::convex_hull;
/// # use planar_hull::data::Point;
/// let hull = convex_hull(vec![
///   Point::new_xy(0., 0.),
///   Point::new_xy(4., 0.),
///   Point::new_xy(4., 4.),
///   Point::new_xy(0., 4.),
///   Point::new_xy(2., 2.),
/// ])
/// .unwrap();
/// assert_eq!(hull.indices, vec![3, 2, 1, 0]);
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Gift_wrapping_algorithm
pub fn convex_hull(pts: Vec<Point>) -> Result<Hull, Error> {
  if let Some(indices) = trivial_hull(&pts)? {
    return Ok(Hull::new(indices, pts));
  }
  if let Some(indices) = colinear_hull(&pts) {
    debug!("gift wrapping: {} colinear points", pts.len());
    return Ok(Hull::new(indices, pts));
  }

  let n = pts.len();
  let mut hull: Vec<usize> = Vec::new();
  let mut visited = vec![false; n];
  let mut pivot = external_pivot(&pts);

  while let Some(next) = most_clockwise(&pts, &pivot) {
    if let Some(&first) = hull.first() {
      if pts[next].same_xy(&pts[first]) {
        break;
      }
    }
    // Only reachable if rounding makes the turn test inconsistent.
    if visited[next] {
      warn!(
        "gift wrapping: vertex {} revisited before closing the hull, stopping at {} vertices",
        next,
        hull.len()
      );
      break;
    }
    visited[next] = true;
    hull.push(next);
    pivot = pts[next];
  }

  debug!("gift wrapping: {} points, {} hull vertices", n, hull.len());
  Ok(Hull::new(hull, pts))
}

// Index of the point that no other point is counter-clockwise of, as seen
// from `pivot`. Among colinear candidates the farthest wins. Points that
// coincide with the pivot are skipped. O(n)
fn most_clockwise(pts: &[Point], pivot: &Point) -> Option<usize> {
  let mut candidate = pts.iter().position(|pt| !pt.same_xy(pivot))?;
  for (i, pt) in pts.iter().enumerate().skip(candidate + 1) {
    if pt.same_xy(pivot) {
      continue;
    }
    match Orientation::new(pivot, &pts[candidate], pt) {
      Orientation::CounterClockWise => candidate = i,
      Orientation::CoLinear if pivot.cmp_distance_to(pt, &pts[candidate]) == Ordering::Greater => {
        candidate = i
      }
      _ => {}
    }
  }
  Some(candidate)
}

// A point strictly below and strictly left of every input point. O(n)
fn external_pivot(pts: &[Point]) -> Point {
  let (min_x, min_y) = pts.iter().fold((f64::INFINITY, f64::INFINITY), |(x, y), pt| {
    (x.min(pt.x), y.min(pt.y))
  });
  Point::new_xy(strictly_below(min_x), strictly_below(min_y))
}

// v - 1, unless v is so large that subtracting 1 is lost to rounding.
fn strictly_below(v: f64) -> f64 {
  let below = v - 1.0;
  if below < v {
    below
  } else {
    v - v.abs()
  }
}
