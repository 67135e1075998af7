#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Convex hulls of planar point sets by gift wrapping (Jarvis march).
//!
//! ```rust
//! # use giftwrap::algorithms::convex_hull;
//! # use giftwrap::data::Point;
//! let square = vec![
//!   Point::new([0.0, 0.0]),
//!   Point::new([0.0, 1.0]),
//!   Point::new([1.0, 1.0]),
//!   Point::new([1.0, 0.0]),
//!   Point::new([0.5, 0.5]),
//! ];
//! assert_eq!(
//!   convex_hull(square).unwrap(),
//!   vec![
//!     Point::new([0.0, 1.0]),
//!     Point::new([0.0, 0.0]),
//!     Point::new([1.0, 0.0]),
//!     Point::new([1.0, 1.0]),
//!   ]
//! );
//! ```
use num_traits::Float;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;

pub mod algorithms;
pub mod data;
mod orientation;
pub mod predicates;

pub use orientation::Orientation;

#[cfg(test)]
pub mod testing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// No input points, or fewer than three boundary points to validate.
  InsufficientVertices,
  /// A coordinate was NaN or infinite, or two coordinates were too far apart
  /// for their difference to be finite.
  NonFiniteCoordinate,
  /// The boundary walk did not return to its starting point within one step per input point.
  NonTermination,
  /// A boundary turned clockwise.
  ClockWiseViolation,
  /// Three consecutive boundary vertices were colinear.
  CoLinearViolation,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::NonFiniteCoordinate => write!(f, "Coordinates must be finite"),
      Error::NonTermination => write!(
        f,
        "Boundary walk visited more vertices than there are input points"
      ),
      Error::ClockWiseViolation => write!(f, "Clockwise violation"),
      Error::CoLinearViolation => write!(f, "Three consecutive vertices are colinear"),
    }
  }
}

impl std::error::Error for Error {}

/// Coordinate types the hull can be computed over.
///
/// Arithmetic is plain floating point. Only the sort order and the
/// [`Orientation`] checks get type-specific implementations.
pub trait HullScalar: Float + std::fmt::Debug {
  /// Total order on coordinates. `-0.0` and `0.0` compare equal.
  fn cmp_coord(a: &Self, b: &Self) -> Ordering;
  /// Sign of the orientation determinant of `p`, `q`, `r`. `Greater` means a
  /// counter-clockwise turn.
  fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering;
}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl HullScalar for $ty {
        fn cmp_coord(a: &Self, b: &Self) -> Ordering {
          OrderedFloat(*a).cmp(&OrderedFloat(*b))
        }

        // Uses the adaptive precision predicates from `geometry_predicates`, so the
        // sign is exact even when the turn cosine used by the walk is not.
        fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let orient = geometry_predicates::orient2d(
            [f64::from(p[0]), f64::from(p[1])],
            [f64::from(q[0]), f64::from(q[1])],
            [f64::from(r[0]), f64::from(r[1])],
          );
          if orient > 0.0 {
            Ordering::Greater
          } else if orient < 0.0 {
            Ordering::Less
          } else {
            Ordering::Equal
          }
        }
      }
    )*
  };
}

floating_precision!(f32, f64);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn signed_zeros_compare_equal() {
    assert_eq!(HullScalar::cmp_coord(&-0.0_f64, &0.0), Ordering::Equal);
    assert_eq!(HullScalar::cmp_coord(&-1.0_f32, &0.0), Ordering::Less);
  }

  #[test]
  fn error_messages() {
    assert_eq!(Error::InsufficientVertices.to_string(), "Insufficient vertices");
    assert_eq!(
      Error::NonFiniteCoordinate.to_string(),
      "Coordinates must be finite"
    );
  }
}
