use crate::data::{Line, PolarPoint, Point};
use crate::Error;

/// $O(n)$ Express `points` in polar form around `origin`.
///
/// `theta` is the angle in degrees from `direction` to the ray from `origin`
/// to the point, counter-clockwise, normalized into `[0, 360)`. Only the
/// orientation of `direction` matters, not where it starts. `radius` is the
/// planar distance to `origin`. A point coinciding with `origin` gets radius
/// zero and an unspecified angle.
///
/// The output has one entry per input point, in input order.
///
/// # Errors
/// [`Error::DegenerateDirection`] if `direction` has no planar extent.
///
/// # Examples
///
/// ```rust
/// # use planar_hull::data::{Line, Point};
/// # use planar_hull::planar_to_polar;
/// let origin = Point::new_xy(1., 1.);
/// let up = Line::from_xy(0., 0., 0., 1.);
/// let polar = planar_to_polar(&[Point::new_xy(0., 1.)], &origin, &up).unwrap();
/// assert_eq!(polar[0].radius, 1.);
/// assert_eq!(polar[0].theta, 90.);
/// ```
pub fn planar_to_polar(
  points: &[Point],
  origin: &Point,
  direction: &Line,
) -> Result<Vec<PolarPoint>, Error> {
  if direction.is_degenerate() {
    return Err(Error::DegenerateDirection);
  }
  let zero = direction.angle();
  Ok(
    points
      .iter()
      .map(|pt| PolarPoint::new_planar(origin.euclidean_distance(pt), angle_from(zero, origin, pt)))
      .collect(),
  )
}

/// [`planar_to_polar`] with the positive x-axis as reference direction.
pub fn planar_to_polar_from(points: &[Point], origin: &Point) -> Vec<PolarPoint> {
  let zero = Line::x_axis().angle();
  points
    .iter()
    .map(|pt| PolarPoint::new_planar(origin.euclidean_distance(pt), angle_from(zero, origin, pt)))
    .collect()
}

/// [`planar_to_polar`] around the planar origin with the positive x-axis as
/// reference direction.
pub fn planar_to_polar_default(points: &[Point]) -> Vec<PolarPoint> {
  planar_to_polar_from(points, &Point::default())
}

// Degrees counter-clockwise from the angle `zero` (radians), in [0, 360).
fn angle_from(zero: f64, origin: &Point, pt: &Point) -> f64 {
  let angle = (pt.y - origin.y).atan2(pt.x - origin.x);
  let mut theta = (angle - zero).to_degrees();
  if theta < 0.0 {
    theta += 360.0;
  }
  // A tiny negative angle rounds up to exactly 360.
  if theta >= 360.0 {
    theta -= 360.0;
  }
  theta
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;
  use crate::testing::*;

  use claims::assert_err_eq;
  use proptest::prelude::*;
  use test_strategy::proptest;

  fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
  }

  #[test]
  fn quadrants() {
    let points = [
      Point::new_xy(1., 0.),
      Point::new_xy(0., 1.),
      Point::new_xy(-1., 0.),
      Point::new_xy(0., -1.),
      Point::new_xy(1., -1.),
    ];
    let polar = planar_to_polar_default(&points);
    let thetas: Vec<f64> = polar.iter().map(|pp| pp.theta).collect();
    assert_eq!(&thetas[..4], &[0., 90., 180., 270.]);
    assert!(close(thetas[4], 315.));
    assert!(polar[..4].iter().all(|pp| pp.radius == 1.));
    assert!(close(polar[4].radius, 2f64.sqrt()));
    assert!(polar.iter().all(|pp| pp.phi == 0.));
  }

  #[test]
  fn direction_is_translated_to_origin() {
    // Direction pointing along +y, placed far away from the origin.
    let direction = Line::from_xy(10., 10., 10., 20.);
    let origin = Point::new_xy(1., 1.);
    let polar = planar_to_polar(
      &[Point::new_xy(1., 5.), Point::new_xy(0., 1.), Point::new_xy(2., 1.)],
      &origin,
      &direction,
    )
    .unwrap();
    assert_eq!(polar[0].theta, 0.);
    assert_eq!(polar[0].radius, 4.);
    assert!(close(polar[1].theta, 90.));
    assert!(close(polar[2].theta, 270.));
  }

  #[test]
  fn degenerate_direction() {
    let direction = Line::from_coords(3., 3., 0., 3., 3., 1.);
    assert_err_eq!(
      planar_to_polar(&[Point::new_xy(1., 1.)], &Point::default(), &direction),
      Error::DegenerateDirection
    );
  }

  #[test]
  fn origin_maps_to_zero_radius() {
    let polar = planar_to_polar_from(&[Point::new_xy(2., 3.)], &Point::new_xy(2., 3.));
    assert_eq!(polar[0].radius, 0.);
    assert!((0.0..360.0).contains(&polar[0].theta));
  }

  #[test]
  fn empty_input() {
    assert!(planar_to_polar_default(&[]).is_empty());
  }

  #[proptest]
  fn theta_in_range(
    #[strategy(vec_points(1..50))] points: Vec<Point>,
    #[strategy(any_point())] origin: Point,
    #[strategy(any_point())] through: Point,
  ) {
    prop_assume!(!origin.same_xy(&through));
    let direction = Line::new(origin, through);
    let polar = planar_to_polar(&points, &origin, &direction).unwrap();
    prop_assert_eq!(polar.len(), points.len());
    for (pp, pt) in polar.iter().zip(points.iter()) {
      prop_assert!((0.0..360.0).contains(&pp.theta));
      prop_assert!(pp.radius >= 0.);
      prop_assert_eq!(pp.radius, origin.euclidean_distance(pt));
    }
  }
}
