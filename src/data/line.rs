use super::Point;

///////////////////////////////////////////////////////////////////////////////
// Line

/// Directed segment from `start` to `end`.
///
/// Used as a reference direction when converting to polar coordinates. A line
/// whose ends coincide in the plane has no direction, see
/// [`Line::is_degenerate`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
  pub start: Point,
  pub end: Point,
}

impl Line {
  pub const fn new(start: Point, end: Point) -> Line {
    Line { start, end }
  }

  pub const fn from_coords(x1: f64, y1: f64, z1: f64, x2: f64, y2: f64, z2: f64) -> Line {
    Line::new(Point::new(x1, y1, z1), Point::new(x2, y2, z2))
  }

  pub const fn from_xy(x1: f64, y1: f64, x2: f64, y2: f64) -> Line {
    Line::new(Point::new_xy(x1, y1), Point::new_xy(x2, y2))
  }

  /// Segment on the x-axis.
  pub const fn from_x(x1: f64, x2: f64) -> Line {
    Line::new(Point::new_x(x1), Point::new_x(x2))
  }

  /// The positive x-axis, starting at the origin.
  pub const fn x_axis() -> Line {
    Line::from_x(0.0, 1.0)
  }

  pub fn start_point(&self) -> Point {
    self.start
  }

  pub fn end_point(&self) -> Point {
    self.end
  }

  pub fn set_start_point(&mut self, p: Point) {
    self.start = p;
  }

  pub fn set_end_point(&mut self, p: Point) {
    self.end = p;
  }

  /// Euclidean length, including the z coordinate.
  pub fn length(&self) -> f64 {
    let dx = self.end.x - self.start.x;
    let dy = self.end.y - self.start.y;
    let dz = self.end.z - self.start.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
  }

  /// Planar direction vector `end - start`.
  pub fn direction(&self) -> (f64, f64) {
    (self.end.x - self.start.x, self.end.y - self.start.y)
  }

  /// True if the line has no planar direction.
  pub fn is_degenerate(&self) -> bool {
    self.start.same_xy(&self.end)
  }

  /// Angle of the planar direction in radians, in `(-pi, pi]`.
  pub fn angle(&self) -> f64 {
    let (dx, dy) = self.direction();
    dy.atan2(dx)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn constructors() {
    assert_eq!(
      Line::from_xy(1., 2., 3., 4.),
      Line::from_coords(1., 2., 0., 3., 4., 0.)
    );
    assert_eq!(Line::from_x(1., 2.).end, Point::new(2., 0., 0.));
    assert_eq!(Line::default().start, Point::default());
    assert!(Line::default().is_degenerate());
  }

  #[test]
  fn length() {
    assert_eq!(Line::from_coords(0., 0., 0., 2., 3., 6.).length(), 7.);
    assert_eq!(Line::from_xy(1., 1., 4., 5.).length(), 5.);
  }

  #[test]
  fn degenerate_ignores_z() {
    let line = Line::from_coords(1., 1., 0., 1., 1., 5.);
    assert!(line.is_degenerate());
    assert_eq!(line.length(), 5.);
    assert!(!Line::x_axis().is_degenerate());
  }

  #[test]
  fn setters() {
    let mut line = Line::default();
    line.set_start_point(Point::new_xy(1., 1.));
    line.set_end_point(Point::new_xy(1., 3.));
    assert_eq!(line.start_point(), Point::new_xy(1., 1.));
    assert_eq!(line.end_point(), Point::new_xy(1., 3.));
    assert_eq!(line.direction(), (0., 2.));
    assert_eq!(line.angle(), std::f64::consts::FRAC_PI_2);
  }
}
