//! Floating point turn and slope tests used by the hull walk.
//!
//! These are deliberately inexact: the walk compares turn cosines and
//! collinearity compares slopes with `==`. Use [`Orientation`](crate::Orientation)
//! when an exact answer is needed.
use crate::data::{Point, Vector};
use crate::HullScalar;

/// Cosine of the angle between the edge `v1 → v2` and the edge `v2 → v3`.
///
/// A straight continuation gives `1`, a right angle `0` and a full reversal
/// `-1`. If `v2 == v3` the outgoing edge has no direction and the result is
/// `0`, whatever `v1` is.
///
/// # Panics
///
/// Panics if `v1 == v2` and `v2 != v3`.
///
/// ```rust
/// # use giftwrap::data::Point;
/// # use giftwrap::predicates::turn_cosine;
/// let a = Point::new([0.0, 1.0]);
/// let b = Point::new([0.0, 0.0]);
/// assert_eq!(turn_cosine(&a, &b, &Point::new([0.0, -1.0])), 1.0);
/// assert_eq!(turn_cosine(&a, &b, &Point::new([1.0, 0.0])), 0.0);
/// assert_eq!(turn_cosine(&a, &b, &b), 0.0);
/// ```
pub fn turn_cosine<T>(v1: &Point<T>, v2: &Point<T>, v3: &Point<T>) -> T
where
  T: HullScalar,
{
  if v2 == v3 {
    return T::zero();
  }
  assert!(v1 != v2, "turn_cosine: incoming edge has zero length");
  direction_cosine(&(v2 - v1), &(v3 - v2))
}

// Both directions are scaled to unit length before the dot product, so
// edges longer than the square root of the largest float still work.
pub(crate) fn direction_cosine<T>(incoming: &Vector<T>, outgoing: &Vector<T>) -> T
where
  T: HullScalar,
{
  incoming.normalize().dot(&outgoing.normalize())
}

/// Slope of the segment `u → v`. Vertical segments are `+∞` going up and
/// `-∞` going down. Identical points also give `-∞`.
pub fn slope<T>(u: &Point<T>, v: &Point<T>) -> T
where
  T: HullScalar,
{
  if u.x_coord() == v.x_coord() {
    if u.y_coord() < v.y_coord() {
      T::infinity()
    } else {
      T::neg_infinity()
    }
  } else {
    (*v.y_coord() - *u.y_coord()) / (*v.x_coord() - *u.x_coord())
  }
}

/// `v1`, `v2` and `v3` are colinear iff `v1 → v2` and `v2 → v3` have the
/// same [`slope`], compared exactly.
///
/// Note that a vertical segment going up followed by one going down is not
/// colinear under this test.
pub fn collinear<T>(v1: &Point<T>, v2: &Point<T>, v3: &Point<T>) -> bool
where
  T: HullScalar,
{
  slope(v1, v2) == slope(v2, v3)
}
