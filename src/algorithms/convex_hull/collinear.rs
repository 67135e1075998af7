use crate::data::Point;
use crate::predicates::collinear;
use crate::HullScalar;

/// $O(n)$ Drop vertices that lie on the line through their neighbours.
///
/// `points` is expected to be a convex boundary, possibly with redundant
/// vertices along its edges. The boundary is scanned once, left to right:
/// runs such as `[a, b, c, d]` with `a`, `b`, `c` colinear collapse to
/// `[a, c, d]`. The closing edge is never examined, so a run through the
/// last and first vertex survives. Fewer than three points are returned as is.
///
/// ```rust
/// # use giftwrap::algorithms::convex_hull::collinear::delete_collinear;
/// # use giftwrap::data::Point;
/// let boundary = vec![
///   Point::new([0.0, 1.0]),
///   Point::new([0.0, 0.0]),
///   Point::new([0.5, 0.0]),
///   Point::new([1.0, 0.0]),
///   Point::new([1.0, 1.0]),
/// ];
/// assert_eq!(delete_collinear(boundary).len(), 4);
/// ```
pub fn delete_collinear<T>(points: Vec<Point<T>>) -> Vec<Point<T>>
where
  T: HullScalar,
{
  if points.len() < 3 {
    return points;
  }
  let mut stack: Vec<Point<T>> = Vec::with_capacity(points.len());
  for pt in points {
    if let [.., a, b] = stack[..] {
      if collinear(&a, &b, &pt) {
        stack.pop();
      }
    }
    stack.push(pt);
  }
  stack
}
