use std::cmp::Ordering;

use crate::data::Point;
use crate::HullScalar;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`, with the y-axis pointing up.
  ///
  /// The sign is computed with adaptive precision and is exact for any finite
  /// input.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use giftwrap::data::Point;
  /// # use giftwrap::Orientation;
  /// let p1 = Point::new([0.0, 0.0]);
  /// let p2 = Point::new([0.0, 1.0]); // One unit above p1.
  /// assert!(Orientation::new(&p1, &p2, &Point::new([0.0, 2.0])).is_colinear());
  /// assert!(Orientation::new(&p1, &p2, &Point::new([-1.0, 2.0])).is_ccw());
  /// assert!(Orientation::new(&p1, &p2, &Point::new([1.0, 2.0])).is_cw());
  /// ```
  pub fn new<T>(p1: &Point<T>, p2: &Point<T>, p3: &Point<T>) -> Orientation
  where
    T: HullScalar,
  {
    match T::cmp_slope(&p1.array, &p2.array, &p3.array) {
      Ordering::Less => Orientation::ClockWise,
      Ordering::Equal => Orientation::CoLinear,
      Ordering::Greater => Orientation::CounterClockWise,
    }
  }

  pub fn is_colinear(self) -> bool {
    self == Orientation::CoLinear
  }

  pub fn is_ccw(self) -> bool {
    self == Orientation::CounterClockWise
  }

  pub fn is_cw(self) -> bool {
    self == Orientation::ClockWise
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
