use num_traits::Float;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::ops::Index;

use crate::{HullScalar, Orientation};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Point<T> {
  pub array: [T; 2],
}

// Random sampling.
impl<T> Distribution<Point<T>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T> {
    Point {
      array: [rng.gen(), rng.gen()],
    }
  }
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }

  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }

  /// True unless a coordinate is NaN or infinite.
  pub fn is_finite(&self) -> bool
  where
    T: Float,
  {
    self.array.iter().all(|c| c.is_finite())
  }

  pub fn orientation(&self, q: &Point<T>, r: &Point<T>) -> Orientation
  where
    T: HullScalar,
  {
    Orientation::new(self, q, r)
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

mod sub;
