use log::debug;

use super::{trivial_hull, Hull};
use crate::data::Point;
use crate::{cmp_xy, Error, Orientation};

// https://en.wikibooks.org/wiki/Algorithm_Implementation/Geometry/Convex_hull/Monotone_chain

/// $O(n \log n)$ Convex hull of a set of points.
///
/// [Andrew's monotone chain][wiki] algorithm. The points are sorted by x
/// (then y) and the lower and upper chains are built in one pass each.
///
/// # Ordering
/// The returned [`Hull`] holds the points *sorted* by (x, y), and its indices
/// refer to that sorted order. Vertices are counter-clockwise, starting at
/// the lexicographically smallest point. Inputs of at most three points are
/// returned unsorted, in input order, see [`Algorithm`](super::Algorithm).
///
/// # Errors
/// [`Error::EmptyPointSet`] if `pts` is empty.
///
/// # Properties
/// * No points from the input set will be outside the returned hull.
/// * Points on a hull edge but not at a corner are dropped.
/// * Colinear inputs reduce to their two extreme points.
///
/// # Examples
///
/// ```rust
/// # use planar_hull::algorithms::convex_hull::monotone_chain::convex_hull;
/// # use planar_hull::data::Point;
/// let hull = convex_hull(vec![
///   Point::new_xy(0., 0.),
///   Point::new_xy(1., 0.),
///   Point::new_xy(2., 0.),
///   Point::new_xy(3., 0.),
/// ])
/// .unwrap();
/// assert_eq!(hull.indices, vec![0, 3]);
/// ```
///
/// [wiki]: https://en.wikibooks.org/wiki/Algorithm_Implementation/Geometry/Convex_hull/Monotone_chain
pub fn convex_hull(mut pts: Vec<Point>) -> Result<Hull, Error> {
  if let Some(indices) = trivial_hull(&pts)? {
    return Ok(Hull::new(indices, pts));
  }

  // Must be stable: equal points keep their relative order.
  pts.sort_by(cmp_xy);

  let n = pts.len();
  let mut lower = chain(&pts, 0..n);
  let mut upper = chain(&pts, (0..n).rev());
  // Each chain ends where the other begins.
  lower.pop();
  upper.pop();
  lower.append(&mut upper);
  let mut indices = lower;

  // Only happens when every point is identical.
  if indices.len() == 2 && pts[indices[0]].same_xy(&pts[indices[1]]) {
    indices.truncate(1);
  }

  debug!("monotone chain: {} points, {} hull vertices", n, indices.len());
  Ok(Hull::new(indices, pts))
}

// Walk the points in the given order, keeping only strict left turns.
// Every pop shrinks the chain so the inner loop runs O(n) times in total.
fn chain(pts: &[Point], order: impl Iterator<Item = usize>) -> Vec<usize> {
  let mut chain: Vec<usize> = Vec::with_capacity(pts.len());
  for i in order {
    while let &[.., a, b] = chain.as_slice() {
      if Orientation::new(&pts[a], &pts[b], &pts[i]).is_ccw() {
        break;
      }
      chain.pop();
    }
    chain.push(i);
  }
  chain
}
