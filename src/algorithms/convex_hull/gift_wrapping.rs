use log::{debug, trace};

use super::collinear::delete_collinear;
use crate::data::{Point, Vector};
use crate::predicates::direction_cosine;
use crate::{Error, HullScalar};

// https://en.wikipedia.org/wiki/Gift_wrapping_algorithm

// Properties:
//    No panics.
//    No points are outside the resulting boundary.
//    All vertices are from the input set.
/// $O(n h)$ Convex hull of a set of points.
///
/// [Gift Wrapping][wiki] algorithm for finding the smallest convex polygon which
/// contains all the given points. The walk starts at the leftmost point (the
/// topmost one if several share the smallest x-coordinate), leaves it going
/// down and always continues towards the point that needs the smallest turn.
///
/// The result is open (the first point is not repeated) and counter-clockwise
/// with the y-axis pointing up. Colinear vertices are removed in one pass, see
/// [`delete_collinear`] for the exception at the closing edge. Inputs whose
/// points are all colinear give the two ends of the segment, and a single
/// distinct point gives that point.
///
/// # Errors
/// * [`Error::InsufficientVertices`] if the input is empty.
/// * [`Error::NonFiniteCoordinate`] if any coordinate is NaN or infinite, or
///   if two coordinates are too far apart for their difference to be finite.
/// * [`Error::NonTermination`] if the walk fails to close.
///
/// # Examples
///
/// ```rust
/// # use giftwrap::algorithms::convex_hull;
/// # use giftwrap::data::Point;
/// # use giftwrap::Error;
/// let empty_set: Vec<Point<f64>> = vec![];
/// assert_eq!(
///   convex_hull(empty_set).err(),
///   Some(Error::InsufficientVertices))
/// ```
///
/// ```rust
/// # use giftwrap::algorithms::convex_hull;
/// # use giftwrap::data::Point;
/// let diamond = vec![
///   Point::new([0.5, 0.0]),
///   Point::new([1.0, 0.5]),
///   Point::new([0.5, 1.0]),
///   Point::new([0.0, 0.5]),
/// ];
/// assert_eq!(
///   convex_hull(diamond).unwrap(),
///   vec![
///     Point::new([0.0, 0.5]),
///     Point::new([0.5, 0.0]),
///     Point::new([1.0, 0.5]),
///     Point::new([0.5, 1.0]),
///   ]
/// );
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Gift_wrapping_algorithm
pub fn convex_hull<T>(pts: Vec<Point<T>>) -> Result<Vec<Point<T>>, Error>
where
  T: HullScalar,
{
  Ok(delete_collinear(boundary_walk(pts)?))
}

// The hull before colinear vertices are removed.
pub(crate) fn boundary_walk<T>(mut pts: Vec<Point<T>>) -> Result<Vec<Point<T>>, Error>
where
  T: HullScalar,
{
  if pts.is_empty() {
    return Err(Error::InsufficientVertices);
  }
  if !pts.iter().all(Point::is_finite) || !extent_is_finite(&pts) {
    return Err(Error::NonFiniteCoordinate);
  }
  sort_leftmost_topmost(&mut pts);
  let hull = wrap(&pts, pts.len())?;
  debug!(
    "gift wrapping closed with {} of {} points on the boundary",
    hull.len(),
    pts.len()
  );
  Ok(hull.into_iter().map(|idx| pts[idx]).collect())
}

// Left to right, then top to bottom. Stable, so equal points keep their order.
fn sort_leftmost_topmost<T>(pts: &mut [Point<T>])
where
  T: HullScalar,
{
  pts.sort_by(|a, b| {
    T::cmp_coord(a.x_coord(), b.x_coord()).then_with(|| T::cmp_coord(b.y_coord(), a.y_coord()))
  });
}

// Largest distance along either axis must be finite, or edges between input
// points cannot be measured.
fn extent_is_finite<T>(pts: &[Point<T>]) -> bool
where
  T: HullScalar,
{
  (0..2).all(|axis| {
    let (lo, hi) = pts.iter().fold((pts[0][axis], pts[0][axis]), |(lo, hi), pt| {
      (lo.min(pt[axis]), hi.max(pt[axis]))
    });
    (hi - lo).is_finite()
  })
}

// Walks the boundary of sorted points and returns their indices, starting at 0.
// Fails once the hull would hold more than `limit` indices.
//
// The point with the largest turn cosine is the one with the smallest turn
// angle as long as no turn exceeds pi. That holds because every reference
// edge is a hull edge: all points lie on its left or on its line.
fn wrap<T>(pts: &[Point<T>], limit: usize) -> Result<Vec<usize>, Error>
where
  T: HullScalar,
{
  let mut hull: Vec<usize> = vec![0];

  loop {
    let current = pts[hull[hull.len() - 1]];
    let (incoming, prev, avoid) = match hull[..] {
      [.., prev, _] => (&current - &pts[prev], Some(pts[prev]), &hull[hull.len() - 2..]),
      // Pretend we arrived at the start going straight down. Nothing can lie
      // straight behind: the start is the topmost of the leftmost points.
      _ => (Vector([T::zero(), -T::one()]), None, &hull[..]),
    };

    // Ties go to the first index. The start has index 0 and therefore wins
    // every tie it takes part in.
    let mut best = None;
    let mut max_cos = -T::one();
    for (idx, candidate) in pts.iter().enumerate() {
      if avoid.iter().any(|&a| a == idx || pts[a] == *candidate) {
        continue;
      }
      if prev.map_or(false, |prev| is_behind(&prev, &current, candidate)) {
        continue;
      }
      let cos = direction_cosine(&incoming, &(candidate - &current));
      if cos > max_cos {
        max_cos = cos;
        best = Some(idx);
      }
    }

    match best {
      // Nothing left in front of us: every point is on the walked segment.
      None => break,
      Some(idx) if idx == hull[0] => break,
      Some(idx) => {
        if hull.len() == limit {
          debug!(
            "gift wrapping did not close after visiting {} points",
            hull.len()
          );
          return Err(Error::NonTermination);
        }
        trace!("hull vertex {}: {:?} (cos {:?})", hull.len(), pts[idx], max_cos);
        hull.push(idx);
      }
    }
  }
  Ok(hull)
}

// Colinear with `from -> to` and pointing back. Its cosine is -1 but may be
// rounded to slightly more.
fn is_behind<T>(from: &Point<T>, to: &Point<T>, candidate: &Point<T>) -> bool
where
  T: HullScalar,
{
  from.orientation(to, candidate).is_colinear()
    && (to - from).dot(&(candidate - to)) < T::zero()
}
