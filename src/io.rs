//! Plain-text input and output.
//!
//! # CH format
//!
//! A point set together with its hull:
//!
//! ```text
//! CH
//! <point count> <hull vertex count>
//! <x> <y> <z>
//! ...
//! <index> <index> ...
//! ```
//!
//! One line per point, followed by a single line of 0-based hull indices.
//! Coordinates are written with the shortest representation that parses back
//! to the same `f64`, so a write followed by a read is lossless.
//!
//! # Point lists
//!
//! [`read_points`] accepts one point per line, given as two or three
//! whitespace separated numbers. Blank lines and anything after a `#` are
//! ignored.
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use crate::algorithms::Hull;
use crate::data::Point;

/// Errors from reading or writing CH files and point lists.
///
/// Line numbers start at 1.
#[derive(Debug, thiserror::Error)]
pub enum ChError {
  #[error(transparent)]
  Io(#[from] std::io::Error),
  #[error("line {line}: expected \"CH\" header, found {found:?}")]
  BadHeader { line: usize, found: String },
  #[error("line {line}: unexpected end of input, expected {expected}")]
  UnexpectedEof { line: usize, expected: &'static str },
  #[error("line {line}: {message}")]
  Malformed { line: usize, message: String },
  #[error("expected {expected} {what}, found {found}")]
  CountMismatch {
    what: &'static str,
    expected: usize,
    found: usize,
  },
  #[error("line {line}: hull index {index} out of range for {len} points")]
  IndexOutOfRange { line: usize, index: usize, len: usize },
}

/// Write `hull` in CH format.
///
/// # Errors
/// Only fails if `writer` does.
pub fn write_ch<W: Write>(mut writer: W, hull: &Hull) -> Result<(), ChError> {
  writeln!(writer, "CH")?;
  writeln!(writer, "{} {}", hull.points.len(), hull.indices.len())?;
  for pt in hull.points.iter() {
    writeln!(writer, "{} {} {}", pt.x, pt.y, pt.z)?;
  }
  let indices: Vec<String> = hull.indices.iter().map(usize::to_string).collect();
  writeln!(writer, "{}", indices.join(" "))?;
  writer.flush()?;
  Ok(())
}

/// Parse a hull in CH format.
///
/// Trailing whitespace is accepted anywhere. The index line may be missing
/// when the hull count is zero. Anything other than whitespace after the
/// index line is rejected.
///
/// # Errors
/// See [`ChError`]. Every hull index must be smaller than the point count.
pub fn read_ch<R: BufRead>(reader: R) -> Result<Hull, ChError> {
  let mut lines = NumberedLines::new(reader);

  let (line, header) = lines.expect("\"CH\" header")?;
  if header.trim() != "CH" {
    return Err(ChError::BadHeader {
      line,
      found: header,
    });
  }

  let (line, counts) = lines.expect("point and hull counts")?;
  let (n, h) = match parse_fields::<usize>(line, &counts)?.as_slice() {
    &[n, h] => (n, h),
    fields => {
      return Err(ChError::Malformed {
        line,
        message: format!("expected 2 counts, found {}", fields.len()),
      })
    }
  };

  let mut points = Vec::with_capacity(n.min(1 << 16));
  for found in 0..n {
    let Some((line, text)) = lines.next_line()? else {
      return Err(ChError::CountMismatch {
        what: "points",
        expected: n,
        found,
      });
    };
    match parse_fields::<f64>(line, &text)?.as_slice() {
      &[x, y, z] => points.push(Point::new(x, y, z)),
      fields => {
        return Err(ChError::Malformed {
          line,
          message: format!("expected 3 coordinates, found {}", fields.len()),
        })
      }
    }
  }

  let indices = match lines.next_line()? {
    Some((line, text)) => {
      let indices = parse_fields::<usize>(line, &text)?;
      if let Some(&index) = indices.iter().find(|&&index| index >= n) {
        return Err(ChError::IndexOutOfRange { line, index, len: n });
      }
      indices
    }
    None => Vec::new(),
  };
  if indices.len() != h {
    return Err(ChError::CountMismatch {
      what: "hull indices",
      expected: h,
      found: indices.len(),
    });
  }

  while let Some((line, text)) = lines.next_line()? {
    if !text.trim().is_empty() {
      return Err(ChError::Malformed {
        line,
        message: "unexpected data after hull indices".to_string(),
      });
    }
  }

  debug!("read CH: {} points, {} hull vertices", n, h);
  Ok(Hull::new(indices, points))
}

/// Write `hull` to a CH file, replacing any existing file.
pub fn save<P: AsRef<Path>>(path: P, hull: &Hull) -> Result<(), ChError> {
  let path = path.as_ref();
  debug!("writing CH file {}", path.display());
  write_ch(BufWriter::new(File::create(path)?), hull)
}

/// Read a hull from a CH file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Hull, ChError> {
  let path = path.as_ref();
  debug!("reading CH file {}", path.display());
  read_ch(BufReader::new(File::open(path)?))
}

/// Parse a point list, see the [module documentation](self).
///
/// Two numbers give a point with `z = 0`.
pub fn read_points<R: BufRead>(reader: R) -> Result<Vec<Point>, ChError> {
  let mut lines = NumberedLines::new(reader);
  let mut points = Vec::new();
  while let Some((line, text)) = lines.next_line()? {
    let text = text.split('#').next().unwrap_or_default();
    if text.trim().is_empty() {
      continue;
    }
    match parse_fields::<f64>(line, text)?.as_slice() {
      &[x, y] => points.push(Point::new_xy(x, y)),
      &[x, y, z] => points.push(Point::new(x, y, z)),
      fields => {
        return Err(ChError::Malformed {
          line,
          message: format!("expected 2 or 3 coordinates, found {}", fields.len()),
        })
      }
    }
  }
  debug!("read {} points", points.len());
  Ok(points)
}

/// Read a point list from a file.
pub fn load_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point>, ChError> {
  read_points(BufReader::new(File::open(path)?))
}

struct NumberedLines<R> {
  lines: std::io::Lines<R>,
  number: usize,
}

impl<R: BufRead> NumberedLines<R> {
  fn new(reader: R) -> Self {
    NumberedLines {
      lines: reader.lines(),
      number: 0,
    }
  }

  fn next_line(&mut self) -> Result<Option<(usize, String)>, ChError> {
    match self.lines.next() {
      None => Ok(None),
      Some(text) => {
        self.number += 1;
        Ok(Some((self.number, text?)))
      }
    }
  }

  fn expect(&mut self, expected: &'static str) -> Result<(usize, String), ChError> {
    let line = self.number + 1;
    self
      .next_line()?
      .ok_or(ChError::UnexpectedEof { line, expected })
  }
}

fn parse_fields<T>(line: usize, text: &str) -> Result<Vec<T>, ChError>
where
  T: FromStr,
  T::Err: std::fmt::Display,
{
  text
    .split_whitespace()
    .map(|field| {
      field.parse().map_err(|err| ChError::Malformed {
        line,
        message: format!("invalid number {:?}: {}", field, err),
      })
    })
    .collect()
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;
  use crate::algorithms::Algorithm;
  use claims::{assert_matches, assert_ok};
  use test_log::test;

  fn square() -> Hull {
    Algorithm::GrahamScan
      .convex_hull(vec![
        Point::new(0., 0., 1.),
        Point::new_xy(4., 0.),
        Point::new_xy(4., 4.),
        Point::new_xy(0., 4.),
        Point::new_xy(2., 2.),
      ])
      .unwrap()
  }

  fn to_string(hull: &Hull) -> String {
    let mut out = Vec::new();
    write_ch(&mut out, hull).unwrap();
    String::from_utf8(out).unwrap()
  }

  #[test]
  fn write_square() {
    assert_eq!(
      to_string(&square()),
      "CH\n5 4\n0 0 1\n4 0 0\n4 4 0\n0 4 0\n2 2 0\n2 3 0 1\n"
    );
  }

  #[test]
  fn read_square() {
    let hull = assert_ok!(read_ch(to_string(&square()).as_bytes()));
    assert_eq!(hull, square());
  }

  #[test]
  fn read_tolerates_trailing_space() {
    let text = "CH \n3 3\n0 0 0\n1 0 0 \n0 1 0\n0 1 2 \n\n";
    let hull = assert_ok!(read_ch(text.as_bytes()));
    assert_eq!(hull.indices, vec![0, 1, 2]);
    assert_eq!(hull.points[1], Point::new_x(1.));
  }

  #[test]
  fn read_empty_hull() {
    let hull = assert_ok!(read_ch("CH\n0 0\n".as_bytes()));
    assert!(hull.is_empty());
    assert!(hull.points.is_empty());
  }

  #[test]
  fn read_precise_floats() {
    let hull = Hull::new(
      vec![0],
      vec![Point::new(0.1 + 0.2, -1e-300, 123456789.123456789)],
    );
    assert_eq!(assert_ok!(read_ch(to_string(&hull).as_bytes())), hull);
  }

  #[test]
  fn bad_header() {
    assert_matches!(
      read_ch("OFF\n1 1\n0 0 0\n0\n".as_bytes()),
      Err(ChError::BadHeader { line: 1, .. })
    );
    assert_matches!(
      read_ch("".as_bytes()),
      Err(ChError::UnexpectedEof { line: 1, .. })
    );
  }

  #[test]
  fn missing_counts() {
    assert_matches!(
      read_ch("CH\n".as_bytes()),
      Err(ChError::UnexpectedEof { line: 2, .. })
    );
    assert_matches!(
      read_ch("CH\n3\n".as_bytes()),
      Err(ChError::Malformed { line: 2, .. })
    );
  }

  #[test]
  fn malformed_coordinate() {
    let err = read_ch("CH\n2 1\n0 0 0\n1 x 0\n0\n".as_bytes()).unwrap_err();
    assert_matches!(err, ChError::Malformed { line: 4, .. });
    assert!(err.to_string().starts_with("line 4: invalid number \"x\""));
    assert_matches!(
      read_ch("CH\n1 1\n0 0\n0\n".as_bytes()),
      Err(ChError::Malformed { line: 3, .. })
    );
  }

  #[test]
  fn too_few_points() {
    assert_matches!(
      read_ch("CH\n3 1\n0 0 0\n1 1 1\n0\n".as_bytes()),
      Err(ChError::Malformed { line: 5, .. })
    );
    assert_matches!(
      read_ch("CH\n3 1\n0 0 0\n".as_bytes()),
      Err(ChError::CountMismatch {
        what: "points",
        expected: 3,
        found: 1
      })
    );
  }

  #[test]
  fn wrong_hull_count() {
    assert_matches!(
      read_ch("CH\n2 2\n0 0 0\n1 1 1\n0\n".as_bytes()),
      Err(ChError::CountMismatch {
        what: "hull indices",
        expected: 2,
        found: 1
      })
    );
    assert_matches!(
      read_ch("CH\n2 1\n0 0 0\n1 1 1\n".as_bytes()),
      Err(ChError::CountMismatch { found: 0, .. })
    );
  }

  #[test]
  fn index_out_of_range() {
    assert_matches!(
      read_ch("CH\n2 2\n0 0 0\n1 1 1\n0 2\n".as_bytes()),
      Err(ChError::IndexOutOfRange {
        line: 5,
        index: 2,
        len: 2
      })
    );
  }

  #[test]
  fn trailing_data() {
    assert_matches!(
      read_ch("CH\n1 1\n0 0 0\n0\n7\n".as_bytes()),
      Err(ChError::Malformed { line: 5, .. })
    );
  }

  #[test]
  fn point_list() {
    let text = "# x y [z]\n1 2\n\n3 4 5 # with z\n  -1.5e1 0\n";
    let points = assert_ok!(read_points(text.as_bytes()));
    assert_eq!(
      points,
      vec![
        Point::new_xy(1., 2.),
        Point::new(3., 4., 5.),
        Point::new_xy(-15., 0.)
      ]
    );
  }

  #[test]
  fn point_list_errors() {
    assert_matches!(
      read_points("1 2\n3\n".as_bytes()),
      Err(ChError::Malformed { line: 2, .. })
    );
    assert_matches!(
      read_points("1 2 3 4\n".as_bytes()),
      Err(ChError::Malformed { line: 1, .. })
    );
    assert!(assert_ok!(read_points("".as_bytes())).is_empty());
  }

  #[test]
  fn save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("square.ch");
    assert_ok!(save(&path, &square()));
    assert_eq!(assert_ok!(load(&path)), square());
    assert_matches!(load(dir.path().join("missing.ch")), Err(ChError::Io(_)));
  }
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod props {
  use super::*;
  use crate::testing::*;

  use proptest::collection::vec;
  use proptest::prelude::*;
  use test_strategy::proptest;

  #[proptest]
  fn ch_round_trip(
    #[strategy(vec(any_point_3d(), 1..40))] points: Vec<Point>,
    #[strategy(vec(any::<prop::sample::Index>(), 0..40))] picks: Vec<prop::sample::Index>,
  ) {
    let indices = picks.iter().map(|pick| pick.index(points.len())).collect();
    let hull = Hull::new(indices, points);
    let mut out = Vec::new();
    write_ch(&mut out, &hull).unwrap();
    let read = read_ch(out.as_slice()).unwrap();
    prop_assert_eq!(read, hull);
  }
}
