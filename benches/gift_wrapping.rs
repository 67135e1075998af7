use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use giftwrap::algorithms::convex_hull;
use giftwrap::data::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

// Uniform points in the unit square. Expected hull size grows like log n.
pub fn gen_square(rng: &mut SmallRng, n: usize) -> Vec<Point<f64>> {
  (0..n).map(|_| rng.gen()).collect()
}

// Points on a circle, so every point ends up on the hull.
pub fn gen_circle(rng: &mut SmallRng, n: usize) -> Vec<Point<f64>> {
  (0..n)
    .map(|_| {
      let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
      Point::new([angle.cos(), angle.sin()])
    })
    .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
  let mut rng = SmallRng::seed_from_u64(0);
  for &n in &[100, 1_000, 10_000] {
    let pts = gen_square(&mut rng, n);
    c.bench_function(&format!("convex_hull(square, {})", n), |b| {
      b.iter_batched(|| pts.clone(), convex_hull, BatchSize::LargeInput)
    });
  }
  for &n in &[100, 1_000] {
    let pts = gen_circle(&mut rng, n);
    c.bench_function(&format!("convex_hull(circle, {})", n), |b| {
      b.iter_batched(|| pts.clone(), convex_hull, BatchSize::LargeInput)
    });
  }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
