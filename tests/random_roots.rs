//! Round-trips seeded random root sets through polynomial construction
//! and back through the root finder.

use num::complex::{Complex64, ComplexFloat};
use zplane::Poly;

/// Random roots in an annulus around the unit circle, away from the
/// origin so the simultaneous iteration is well-conditioned.
fn random_roots(seed: u64, count: usize) -> Vec<Complex64> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..count)
        .map(|_| {
            let radius = 0.4 + rng.f64() * 0.9;
            let angle = rng.f64() * std::f64::consts::TAU;
            Complex64::from_polar(radius, angle)
        })
        .collect()
}

fn check_roots(mut found: Vec<Complex64>, expected: &[Complex64], epsilon: f64) -> bool {
    if found.len() != expected.len() {
        return false;
    }
    for e in expected {
        let Some(i) = found.iter().position(|f| (f - e).abs() <= epsilon) else {
            return false;
        };
        found.swap_remove(i);
    }
    true
}

#[test]
fn round_trip_random_roots() {
    for seed in 0..20 {
        for degree in 3usize..=7 {
            let expected = random_roots(seed, degree);
            let poly = Poly::from_roots(&expected);
            let found = poly.roots(1e-14, 1000).unwrap();
            assert!(
                check_roots(found.clone(), &expected, 1e-6),
                "seed {seed} degree {degree}: {found:?} vs {expected:?}"
            );
        }
    }
}

#[test]
fn round_trip_keeps_degree() {
    let expected = random_roots(42, 10);
    let poly = Poly::from_roots(&expected);
    assert_eq!(poly.degree(), 10);
    assert_eq!(poly.roots(1e-14, 1000).unwrap().len(), 10);
}
