pub mod boundary;
pub(crate) mod point;
mod vector;

pub use point::Point;
pub use vector::Vector;

/// Where a point lies relative to a closed boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
