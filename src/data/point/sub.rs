use std::ops::Sub;

use super::Point;
use crate::data::Vector;

// point - point = vector
impl<'a, 'b, T> Sub<&'a Point<T>> for &'b Point<T>
where
  T: Sub<T, Output = T> + Copy,
{
  type Output = Vector<T>;

  fn sub(self: &'b Point<T>, other: &'a Point<T>) -> Self::Output {
    Vector([self.array[0] - other.array[0], self.array[1] - other.array[1]])
  }
}

impl<T> Sub<Point<T>> for Point<T>
where
  T: Sub<T, Output = T> + Copy,
{
  type Output = Vector<T>;

  fn sub(self: Point<T>, other: Point<T>) -> Self::Output {
    Sub::sub(&self, &other)
  }
}
