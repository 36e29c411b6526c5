// This module contains strategies for:
//  * points
//  * point sets
//  * point sets in convex position
// Coordinates are small integers stored as f64 so that orientation tests are
// exact and properties can be checked without tolerances.
use crate::data::Point;

use core::ops::Range;
use proptest::collection::vec;
use proptest::prelude::*;
use proptest::strategy::*;
use std::f64::consts::TAU;

pub const COORD_RANGE: std::ops::RangeInclusive<i32> = -1000..=1000;

pub fn any_point() -> impl Strategy<Value = Point> {
  (COORD_RANGE, COORD_RANGE).prop_map(|(x, y)| Point::new_xy(f64::from(x), f64::from(y)))
}

// Points with a z coordinate, for io round trips.
pub fn any_point_3d() -> impl Strategy<Value = Point> {
  (any::<f64>(), any::<f64>(), any::<f64>())
    .prop_filter("finite", |(x, y, z)| x.is_finite() && y.is_finite() && z.is_finite())
    .prop_map(|(x, y, z)| Point::new(x, y, z))
}

pub fn vec_points(len: Range<usize>) -> impl Strategy<Value = Vec<Point>> {
  vec(any_point(), len)
}

// Points drawn from a tiny grid. Lots of duplicates and colinear triples.
pub fn vec_points_dense(len: Range<usize>) -> impl Strategy<Value = Vec<Point>> {
  vec(
    (0..5_i32, 0..5_i32).prop_map(|(x, y)| Point::new_xy(f64::from(x), f64::from(y))),
    len,
  )
}

// Vertices of a regular n-gon with a large radius, shuffled. Every point is
// a hull vertex.
pub fn convex_position(len: Range<usize>) -> impl Strategy<Value = Vec<Point>> {
  len
    .prop_map(|n| {
      (0..n)
        .map(|i| {
          let angle = TAU * (i as f64) / (n as f64);
          Point::new_xy(
            (10_000. * angle.cos()).round(),
            (10_000. * angle.sin()).round(),
          )
        })
        .collect::<Vec<Point>>()
    })
    .prop_shuffle()
}

// Sorted (x, y) keys of the given points, for set comparisons.
pub fn xy_set<'a>(points: impl IntoIterator<Item = &'a Point>) -> Vec<(i64, i64)> {
  let mut set: Vec<(i64, i64)> = points
    .into_iter()
    .map(|pt| (pt.x as i64, pt.y as i64))
    .collect();
  set.sort_unstable();
  set.dedup();
  set
}
