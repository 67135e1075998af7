//! Checks on an open, counter-clockwise convex boundary such as the one
//! returned by [`convex_hull`](crate::algorithms::convex_hull).
use super::{Point, PointLocation};
use crate::{Error, HullScalar, Orientation};

/// $O(n)$ Check that `boundary` turns counter-clockwise at every vertex.
///
/// Colinear turns are rejected except at the first and last vertex, where the
/// hull's colinear filter never looks.
///
/// # Errors
/// * [`Error::InsufficientVertices`] if there are fewer than three points.
/// * [`Error::ClockWiseViolation`] if any turn, including the closing ones, is clockwise.
/// * [`Error::CoLinearViolation`] if an interior vertex is colinear with its neighbours.
pub fn validate<T>(boundary: &[Point<T>]) -> Result<(), Error>
where
  T: HullScalar,
{
  let n = boundary.len();
  if n < 3 {
    return Err(Error::InsufficientVertices);
  }
  for i in 0..n {
    let prev = &boundary[(i + n - 1) % n];
    let next = &boundary[(i + 1) % n];
    match prev.orientation(&boundary[i], next) {
      Orientation::CounterClockWise => {}
      Orientation::ClockWise => return Err(Error::ClockWiseViolation),
      Orientation::CoLinear if i == 0 || i == n - 1 => {}
      Orientation::CoLinear => return Err(Error::CoLinearViolation),
    }
  }
  Ok(())
}

/// $O(n)$ Locate `pt` relative to a counter-clockwise convex `boundary`.
///
/// Boundaries with one or two points are treated as a point or a segment:
/// nothing is ever [`PointLocation::Inside`] them.
pub fn locate<T>(boundary: &[Point<T>], pt: &Point<T>) -> PointLocation
where
  T: HullScalar,
{
  match boundary {
    [] => PointLocation::Outside,
    [p] if p == pt => PointLocation::OnBoundary,
    [_] => PointLocation::Outside,
    [p, q] => {
      if on_segment(p, q, pt) {
        PointLocation::OnBoundary
      } else {
        PointLocation::Outside
      }
    }
    _ => {
      let n = boundary.len();
      let mut on_edge = false;
      for i in 0..n {
        let p = &boundary[i];
        let q = &boundary[(i + 1) % n];
        match p.orientation(q, pt) {
          Orientation::ClockWise => return PointLocation::Outside,
          Orientation::CoLinear => on_edge |= on_segment(p, q, pt),
          Orientation::CounterClockWise => {}
        }
      }
      if on_edge {
        PointLocation::OnBoundary
      } else {
        PointLocation::Inside
      }
    }
  }
}

fn on_segment<T>(p: &Point<T>, q: &Point<T>, pt: &Point<T>) -> bool
where
  T: HullScalar,
{
  let within = |a: T, b: T, c: T| a.min(b) <= c && c <= a.max(b);
  p.orientation(q, pt).is_colinear()
    && within(p[0], q[0], pt[0])
    && within(p[1], q[1], pt[1])
}

#[cfg(test)]
mod tests {
  use super::*;

  use claims::{assert_err_eq, assert_ok};

  fn unit_square() -> Vec<Point<f64>> {
    vec![
      Point::new([0.0, 1.0]),
      Point::new([0.0, 0.0]),
      Point::new([1.0, 0.0]),
      Point::new([1.0, 1.0]),
    ]
  }

  #[test]
  fn validate_square() {
    assert_ok!(validate(&unit_square()));
  }

  #[test]
  fn validate_reversed_square() {
    let mut square = unit_square();
    square.reverse();
    assert_err_eq!(validate(&square), Error::ClockWiseViolation);
  }

  #[test]
  fn validate_too_small() {
    assert_err_eq!(
      validate(&unit_square()[..2]),
      Error::InsufficientVertices
    );
  }

  #[test]
  fn validate_colinear_interior() {
    let boundary = vec![
      Point::new([0.0, 1.0]),
      Point::new([0.0, 0.0]),
      Point::new([0.5, 0.0]),
      Point::new([1.0, 0.0]),
      Point::new([1.0, 1.0]),
    ];
    assert_err_eq!(validate(&boundary), Error::CoLinearViolation);
  }

  #[test]
  fn validate_colinear_at_wrap() {
    // (1,1) -> (0.5,1) -> (0,1) runs straight through the last vertex.
    let boundary = vec![
      Point::new([0.0, 1.0]),
      Point::new([0.0, 0.0]),
      Point::new([1.0, 0.0]),
      Point::new([1.0, 1.0]),
      Point::new([0.5, 1.0]),
    ];
    assert_ok!(validate(&boundary));
  }

  #[test]
  fn locate_in_square() {
    let square = unit_square();
    assert_eq!(
      locate(&square, &Point::new([0.5, 0.5])),
      PointLocation::Inside
    );
    assert_eq!(
      locate(&square, &Point::new([0.5, 0.0])),
      PointLocation::OnBoundary
    );
    assert_eq!(
      locate(&square, &Point::new([1.0, 1.0])),
      PointLocation::OnBoundary
    );
    assert_eq!(
      locate(&square, &Point::new([1.5, 0.0])),
      PointLocation::Outside
    );
    assert_eq!(
      locate(&square, &Point::new([-0.1, 0.5])),
      PointLocation::Outside
    );
  }

  #[test]
  fn locate_degenerate() {
    let p = Point::new([1.0, 1.0]);
    let q = Point::new([3.0, 2.0]);
    assert_eq!(locate(&[], &p), PointLocation::Outside);
    assert_eq!(locate(&[p], &p), PointLocation::OnBoundary);
    assert_eq!(locate(&[p], &q), PointLocation::Outside);
    assert_eq!(
      locate(&[p, q], &Point::new([2.0, 1.5])),
      PointLocation::OnBoundary
    );
    assert_eq!(
      locate(&[p, q], &Point::new([5.0, 3.0])),
      PointLocation::Outside
    );
    assert_eq!(
      locate(&[p, q], &Point::new([2.0, 1.0])),
      PointLocation::Outside
    );
  }
}
