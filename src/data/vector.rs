use num_traits::Float;

/// Difference of two [`Point`](crate::data::Point)s.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Vector<T>(pub [T; 2]);

impl<T> Vector<T>
where
  T: Float,
{
  /// Euclidean norm. Zero for the zero vector. Does not overflow unless the
  /// norm itself is out of range.
  pub fn magnitude(&self) -> T {
    self.0[0].hypot(self.0[1])
  }

  /// Same direction, unit length. The zero vector gives NaN components.
  pub fn normalize(&self) -> Vector<T> {
    let len = self.magnitude();
    Vector([self.0[0] / len, self.0[1] / len])
  }

  pub fn dot(&self, other: &Vector<T>) -> T {
    self.0[0] * other.0[0] + self.0[1] * other.0[1]
  }
}
