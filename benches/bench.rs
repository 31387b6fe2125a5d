use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use num::complex::Complex64;
use zplane::Poly;

criterion_main!(benches);
criterion_group!(benches, roots_by_order);

/// Roots evenly spread on a circle of radius 0.9, a stand-in for the
/// pole patterns of stable discrete-time filters.
fn filter_poly(order: usize) -> Poly {
    let roots: Vec<Complex64> = (0..order)
        .map(|k| {
            Complex64::from_polar(0.9, std::f64::consts::TAU * k as f64 / order as f64 + 0.1)
        })
        .collect();
    Poly::from_roots(&roots)
}

pub fn roots_by_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("roots");
    for order in [2, 4, 6, 8, 12] {
        let poly = filter_poly(order);
        group.bench_function(BenchmarkId::from_parameter(order), |b| {
            b.iter(|| black_box(&poly).roots(1e-12, 1000))
        });
    }
    group.finish();
}
