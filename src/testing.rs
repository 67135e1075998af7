// Strategies for points and point sets.
//
// Coordinates are small integers stored as floats. On such a grid the slope
// and cosine comparisons made by the hull walk agree with the exact
// orientation predicates, so properties can be checked without tolerances.
use crate::data::Point;

use proptest::collection::*;
use proptest::prelude::*;

pub const GRID: i32 = 20;

pub fn any_grid() -> impl Strategy<Value = Point<f64>> {
  (-GRID..=GRID, -GRID..=GRID).prop_map(|(x, y)| Point::new([f64::from(x), f64::from(y)]))
}

/// Up to `max` grid points. Small grids produce plenty of duplicates and
/// colinear runs.
pub fn any_grid_set(max: usize) -> impl Strategy<Value = Vec<Point<f64>>> {
  vec(any_grid(), 0..max)
}

/// Points on a coarse grid, rescaled into `[0, 1]` by a power of two so
/// coordinates stay exact.
pub fn any_unit() -> impl Strategy<Value = Point<f64>> {
  (0..=8_i32, 0..=8_i32)
    .prop_map(|(x, y)| Point::new([f64::from(x) / 8.0, f64::from(y) / 8.0]))
}

pub fn any_unit_set(max: usize) -> impl Strategy<Value = Vec<Point<f64>>> {
  vec(any_unit(), 1..max)
}
