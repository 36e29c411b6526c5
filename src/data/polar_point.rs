/// A point in polar form relative to some origin and reference direction.
///
/// `theta` is in degrees, counter-clockwise from the reference direction, in
/// `[0, 360)`. `phi` is reserved for a polar angle out of the plane and is
/// zero for everything produced by [`planar_to_polar`](crate::planar_to_polar).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PolarPoint {
  pub radius: f64,
  pub theta: f64,
  pub phi: f64,
}

impl PolarPoint {
  pub const fn new(radius: f64, theta: f64, phi: f64) -> PolarPoint {
    PolarPoint { radius, theta, phi }
  }

  pub const fn new_planar(radius: f64, theta: f64) -> PolarPoint {
    PolarPoint::new(radius, theta, 0.0)
  }

  pub const fn from_radius(radius: f64) -> PolarPoint {
    PolarPoint::new(radius, 0.0, 0.0)
  }

  pub fn radius(&self) -> f64 {
    self.radius
  }

  pub fn theta(&self) -> f64 {
    self.theta
  }

  pub fn phi(&self) -> f64 {
    self.phi
  }

  pub fn set_radius(&mut self, radius: f64) {
    self.radius = radius;
  }

  pub fn set_theta(&mut self, theta: f64) {
    self.theta = theta;
  }

  pub fn set_phi(&mut self, phi: f64) {
    self.phi = phi;
  }
}
