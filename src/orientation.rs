use crate::data::Point;

/// The turn made when walking from `p1` to `p2` to `p3`.
///
/// `CounterClockWise` is a left turn, `ClockWise` a right turn.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone, Hash)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// Computed from the sign of the cross product `(p2 - p1) x (p3 - p1)` in
  /// `f64`. Only the x and y coordinates are used.
  ///
  /// # Precision
  ///
  /// The magnitude of the cross product grows with the square of the input
  /// coordinates and `CoLinear` is reported only for an exact zero. Points
  /// that are collinear on paper may be classified as turning either way once
  /// rounded, and nearly collinear points may round to `CoLinear`.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use planar_hull::data::Point;
  /// # use planar_hull::Orientation;
  /// let p1 = Point::new_xy(0., 0.);
  /// let p2 = Point::new_xy(0., 1.); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new_xy(0., 2.)).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new_xy(-1., 2.)).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new_xy(1., 2.)).is_cw());
  /// ```
  pub fn new(p1: &Point, p2: &Point, p3: &Point) -> Orientation {
    let area = cross(p1, p2, p3);
    if area > 0.0 {
      Orientation::CounterClockWise
    } else if area < 0.0 {
      Orientation::ClockWise
    } else {
      Orientation::CoLinear
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn then(self, other: Orientation) -> Orientation {
    match self {
      Orientation::CoLinear => other,
      _ => self,
    }
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }
}

// Twice the signed area of the triangle p1,p2,p3.
pub(crate) fn cross(p1: &Point, p2: &Point, p3: &Point) -> f64 {
  (p2.x - p1.x) * (p3.y - p1.y) - (p2.y - p1.y) * (p3.x - p1.x)
}
