use std::fmt;
use std::str::FromStr;

use crate::data::{Point, Polygon};
use crate::{cmp_xy, Error, Orientation};

pub mod gift_wrapping;
pub mod graham_scan;
pub mod monotone_chain;

/// Result of a hull computation.
///
/// `indices` lists the hull vertices as 0-based indices into `points`, in a
/// single rotational order without repeats. `points` is the input set, which
/// some algorithms return reordered (see [`monotone_chain`]).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Hull {
  pub indices: Vec<usize>,
  pub points: Vec<Point>,
}

impl Hull {
  pub fn new(indices: Vec<usize>, points: Vec<Point>) -> Hull {
    Hull { indices, points }
  }

  /// Number of hull vertices.
  pub fn len(&self) -> usize {
    self.indices.len()
  }

  pub fn is_empty(&self) -> bool {
    self.indices.is_empty()
  }

  /// Hull vertices in hull order.
  pub fn vertices(&self) -> impl Iterator<Item = &Point> + '_ {
    self.indices.iter().map(move |&i| &self.points[i])
  }

  pub fn to_polygon(&self, clockwise: bool) -> Polygon {
    Polygon::from_points(self.vertices().copied().collect(), clockwise)
  }
}

/// The available hull algorithms.
///
/// # Examples
///
/// ```rust
/// # use planar_hull::algorithms::Algorithm;
/// # use planar_hull::data::Point;
/// let points = vec![
///   Point::new_xy(0., 0.),
///   Point::new_xy(1., 0.),
///   Point::new_xy(2., 0.),
/// ];
/// for algorithm in Algorithm::ALL {
///   let polygon = algorithm.polygon(points.clone()).unwrap();
///   assert_eq!(polygon.len(), 2);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
  /// Andrew's monotone chain. Counter-clockwise.
  MonotoneChain,
  /// Graham scan around the centroid. Counter-clockwise.
  GrahamScan,
  /// Gift wrapping (Jarvis march). Clockwise.
  GiftWrapping,
}

impl Algorithm {
  pub const ALL: [Algorithm; 3] = [
    Algorithm::MonotoneChain,
    Algorithm::GrahamScan,
    Algorithm::GiftWrapping,
  ];

  /// # Errors
  /// [`Error::EmptyPointSet`] if `pts` is empty.
  pub fn convex_hull(self, pts: Vec<Point>) -> Result<Hull, Error> {
    match self {
      Algorithm::MonotoneChain => monotone_chain::convex_hull(pts),
      Algorithm::GrahamScan => graham_scan::convex_hull(pts),
      Algorithm::GiftWrapping => gift_wrapping::convex_hull(pts),
    }
  }

  /// Vertex order the algorithm produces for non-trivial inputs.
  pub fn is_clockwise(self) -> bool {
    matches!(self, Algorithm::GiftWrapping)
  }

  /// Hull as a polygon. The winding flag follows the actual vertex order,
  /// falling back to [`Algorithm::is_clockwise`] for hulls with zero area.
  pub fn polygon(self, pts: Vec<Point>) -> Result<Polygon, Error> {
    let hull = self.convex_hull(pts)?;
    let polygon = hull.to_polygon(self.is_clockwise());
    let clockwise = match polygon.winding() {
      Orientation::ClockWise => true,
      Orientation::CounterClockWise => false,
      Orientation::CoLinear => self.is_clockwise(),
    };
    Ok(Polygon::from_points(polygon.into_points(), clockwise))
  }

  pub fn name(self) -> &'static str {
    match self {
      Algorithm::MonotoneChain => "monotone-chain",
      Algorithm::GrahamScan => "graham-scan",
      Algorithm::GiftWrapping => "gift-wrapping",
    }
  }
}

impl fmt::Display for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown algorithm {0:?}, expected one of: monotone-chain, graham-scan, gift-wrapping")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for Algorithm {
  type Err = ParseAlgorithmError;
  fn from_str(s: &str) -> Result<Algorithm, ParseAlgorithmError> {
    match s.to_ascii_lowercase().as_str() {
      "monotone-chain" | "monotone" | "andrew" => Ok(Algorithm::MonotoneChain),
      "graham-scan" | "graham" => Ok(Algorithm::GrahamScan),
      "gift-wrapping" | "jarvis" | "jarvis-march" => Ok(Algorithm::GiftWrapping),
      _ => Err(ParseAlgorithmError(s.to_string())),
    }
  }
}

// Hulls of up to three points need no algorithm. Returns None for larger
// inputs.
pub(crate) fn trivial_hull(pts: &[Point]) -> Result<Option<Vec<usize>>, Error> {
  match pts.len() {
    0 => Err(Error::EmptyPointSet),
    n @ (1 | 2) => Ok(Some((0..n).collect())),
    3 if !Orientation::new(&pts[0], &pts[1], &pts[2]).is_colinear() => Ok(Some(vec![0, 1, 2])),
    3 => Ok(Some(extremes(pts))),
    _ => Ok(None),
  }
}

// If every point lies on one line, the hull is the segment between the
// extreme points. O(n)
pub(crate) fn colinear_hull(pts: &[Point]) -> Option<Vec<usize>> {
  let first = pts.first()?;
  let colinear = match pts.iter().find(|pt| !pt.same_xy(first)) {
    None => true,
    Some(second) => pts
      .iter()
      .all(|pt| Orientation::new(first, second, pt).is_colinear()),
  };
  if colinear {
    Some(extremes(pts))
  } else {
    None
  }
}

// Indices of the lexicographically smallest and largest points. Only one
// index if they coincide.
fn extremes(pts: &[Point]) -> Vec<usize> {
  let min = min_index(pts);
  let max = pts
    .iter()
    .enumerate()
    .max_by(|(_, a), (_, b)| cmp_xy(a, b))
    .map_or(0, |(index, _)| index);
  if pts[min].same_xy(&pts[max]) {
    vec![min]
  } else {
    vec![min, max]
  }
}

fn min_index(pts: &[Point]) -> usize {
  pts
    .iter()
    .enumerate()
    .min_by(|(_, a), (_, b)| cmp_xy(a, b))
    .map_or(0, |(index, _)| index)
}
