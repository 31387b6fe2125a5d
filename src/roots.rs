//! All-roots finding for the polynomials behind a pole-zero map.
//!
//! The pipeline factors out roots at the origin by deflation, solves
//! degree 1 and 2 in closed form, and hands everything else to the
//! Aberth-Ehrlich simultaneous iteration, started from deterministic
//! pseudo-random guesses inside an annulus that is known a-priori to
//! contain every root.

use itertools::Itertools;
use num::complex::Complex64;
use num::{One, Zero};

use crate::poly::Poly;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Carries the best iterates the solver had when it gave up.
    #[error("root finder did not converge within the given constraints")]
    NoConverge(Vec<Complex64>),

    #[error("unexpected error while running root finder")]
    Other(#[from] anyhow::Error),
}

pub type Result = std::result::Result<Vec<Complex64>, Error>;

impl Poly {
    /// Find all roots of the polynomial, with a pre-configured root finder.
    /// Works well for the low-degree real polynomials of a transfer function.
    ///
    /// Polynomials of degree 0, including the all-zero polynomial, have no
    /// roots and yield an empty set rather than an error.
    ///
    /// # Errors
    /// - Solver did not converge within `max_iter` iterations
    pub fn roots(&self, epsilon: f64, max_iter: usize) -> Result {
        let mut this = self.clone().normalize();

        if this.degree_raw() == 0 {
            return Ok(vec![]);
        }

        let mut roots = this.zero_roots(epsilon);

        match this.degree_raw() {
            0 => return Ok(roots),
            1 => {
                roots.extend(this.linear_roots());
                return Ok(roots);
            }
            2 => {
                roots.extend(this.quadratic_roots());
                return Ok(roots);
            }
            _ => {}
        }

        this.make_monic();

        let guesses = initial_guesses_random(&this, 1, this.degree_raw());
        roots.extend(aberth_ehrlich(&mut this, epsilon, max_iter, &guesses)?);

        log::debug!("found {} roots", roots.len());
        Ok(roots)
    }

    /// Deflate roots at the origin, which the simultaneous iteration
    /// handles poorly, by shifting coefficients down.
    fn zero_roots(&mut self, epsilon: f64) -> Vec<Complex64> {
        debug_assert!(self.is_normalized());

        let mut roots = vec![];
        for _ in 0..self.degree_raw() {
            if self.eval(Complex64::zero()).norm_sqr() < epsilon {
                roots.push(Complex64::zero());
                *self = self.shift_down(1);
            } else {
                break;
            }
        }

        roots
    }

    fn linear_roots(&mut self) -> Vec<Complex64> {
        debug_assert!(self.is_normalized());
        debug_assert_eq!(self.degree_raw(), 1);

        self.trim();
        if self.degree_raw() < 1 {
            return vec![];
        }

        let a = self.coeffs()[1];
        let b = self.coeffs()[0];

        // we found all the roots
        *self = Self::one();

        vec![-b / a]
    }

    /// Quadratic formula
    fn quadratic_roots(&mut self) -> Vec<Complex64> {
        debug_assert!(self.is_normalized());
        debug_assert_eq!(self.degree_raw(), 2);

        // trimming trailing almost zeros to avoid overflow
        self.trim();
        if self.degree_raw() == 1 {
            return self.linear_roots();
        }
        if self.degree_raw() == 0 {
            return vec![];
        }

        let a = self.coeffs()[2];
        let b = self.coeffs()[1];
        let c = self.coeffs()[0];

        let plus_minus_term = (b * b - 4.0 * a * c).sqrt();
        let x1 = (plus_minus_term - b) / (2.0 * a);
        let x2 = (-b - plus_minus_term) / (2.0 * a);

        // we found all the roots
        *self = Self::one();

        vec![x1, x2]
    }
}

/// Find all roots at once using the Aberth-Ehrlich method.
///
/// Zero roots should be removed beforehand, the method performs poorly
/// around the origin.
///
/// # Errors
/// - Solver did not converge within `max_iter` iterations
///
/// # Panics
/// If the provided guesses are not distinct, or if their number does not
/// match the degree of the polynomial.
pub fn aberth_ehrlich(
    poly: &mut Poly,
    epsilon: f64,
    max_iter: usize,
    initial_guesses: &[Complex64],
) -> Result {
    debug_assert!(poly.is_normalized());
    assert_eq!(
        initial_guesses.len(),
        poly.degree_raw(),
        "one initial guess per root is required"
    );

    let n = poly.degree_raw();
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            assert!(
                (initial_guesses[i] - initial_guesses[j]).norm_sqr() > 0.0,
                "initial guesses must be distinct"
            );
        }
    }

    if n == 0 {
        return Ok(vec![]);
    }

    poly.make_monic();

    let mut points = initial_guesses.to_vec();
    let mut alphas_buff = vec![Complex64::zero(); n];
    let mut betas_buff = vec![Complex64::zero(); n];

    for _ in 0..max_iter {
        alphas(poly, &points, &mut alphas_buff);
        betas(&points, &mut betas_buff);

        // alphas become deltas in-place
        for (a, b) in alphas_buff.iter_mut().zip(betas_buff.iter()) {
            *a /= Complex64::one() - *a * *b;
        }
        let deltas_buff = &alphas_buff;

        for (y, d) in points.iter_mut().zip(deltas_buff.iter()) {
            *y -= d;
        }

        log::trace!("{points:?}");

        // stopping criteria
        if deltas_buff.iter().all(|d| d.norm_sqr() <= epsilon) {
            return Ok(points);
        }
    }

    Err(Error::NoConverge(points))
}

/// Alpha coefficients of the Aberth-Ehrlich method, the Newton corrections
/// `p(x) / p'(x)` at each point.
fn alphas(poly: &Poly, points: &[Complex64], out: &mut [Complex64]) {
    debug_assert_eq!(points.len(), out.len());

    let p_diff = poly.diff();
    for (y, &x) in out.iter_mut().zip(points) {
        *y = poly.eval(x) / p_diff.eval(x);
    }
}

/// Beta coefficients of the Aberth-Ehrlich method, the pairwise repulsion
/// between the current iterates.
fn betas(points: &[Complex64], out: &mut [Complex64]) {
    debug_assert_eq!(points.len(), out.len());

    let n = points.len();
    out.fill(Complex64::zero());
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            out[i] += Complex64::one() / (points[i] - points[j]);
        }
    }
}

/// Deterministic pseudo-random guesses inside the annulus bounded by
/// [`lower_bound`] and [`upper_bound`].
fn initial_guesses_random(poly: &Poly, seed: u64, n: usize) -> Vec<Complex64> {
    let mut rng = fastrand::Rng::with_seed(seed);

    // Deutsch's bounds degenerate on sparse polynomials like z^n + c,
    // fall back to the Cauchy bound for the annulus then
    let cauchy = 1.0 + poly.coeffs().iter().map(|c| c.norm()).fold(0.0, f64::max);
    let mut low = lower_bound(poly);
    if !low.is_finite() {
        low = 0.0;
    }
    let mut high = upper_bound(poly);
    if !high.is_finite() || high <= low {
        high = cauchy;
    }
    if low >= high {
        low = 0.0;
    }
    let span = high - low;
    (0..n)
        .map(|_| {
            let radius = rng.f64() * span + low;
            let angle = rng.f64() * std::f64::consts::TAU;
            Complex64::from_polar(radius, angle)
        })
        .collect_vec()
}

/// The radius of a disk containing all the roots
///
/// Uses Deutsch's simple formula \[[McNamee 2005](https://www.researchgate.net/publication/228745231_A_comparison_of_a_priori_bounds_on_real_or_complex_roots_of_polynomials)\]
fn upper_bound(poly: &Poly) -> f64 {
    debug_assert!(
        poly.degree_raw() >= 1,
        "there are no bounds for a polynomial with no roots"
    );
    debug_assert!(
        poly.is_monic(),
        "Deutsch's formula requires the polynomial to be monic"
    );

    let n = poly.len_raw();
    let coeffs = poly.coeffs();

    let next_last = coeffs[n - 2];
    let max_term = coeffs
        .iter()
        .take(n - 2)
        .zip(coeffs.iter().skip(1).take(n - 2))
        .map(|(num, denom)| (num / denom).norm())
        .filter(|ratio| ratio.is_finite())
        .fold(0.0, f64::max);
    next_last.norm() + max_term
}

/// The radius of a disk containing none of the roots
fn lower_bound(poly: &Poly) -> f64 {
    let mut this = Poly::from_complex_vec(poly.coeffs().iter().copied().rev().collect_vec());
    this.make_monic();
    upper_bound(&this).recip()
}

#[cfg(test)]
mod test {
    use num::complex::Complex64;

    use crate::complex;
    use crate::poly::Poly;

    /// Every expected root must be matched by exactly one found root
    /// within `epsilon`, in any order.
    fn check_roots(mut found: Vec<Complex64>, expected: &[Complex64], epsilon: f64) -> bool {
        if found.len() != expected.len() {
            return false;
        }
        for e in expected {
            let Some(i) = found.iter().position(|f| (f - e).norm() <= epsilon) else {
                return false;
            };
            found.swap_remove(i);
        }
        true
    }

    #[test]
    fn degree_0_has_no_roots() {
        let p = Poly::from_descending(&[1.0]);
        assert!(p.roots(1e-14, 100).unwrap().is_empty());
    }

    #[test]
    fn all_zero_has_no_roots() {
        let p = Poly::from_descending(&[0.0, 0.0, 0.0]);
        assert!(p.roots(1e-14, 100).unwrap().is_empty());
    }

    #[test]
    fn linear() {
        let p = Poly::from_descending(&[1.0, -1.0]);
        let roots = p.roots(1e-14, 100).unwrap();
        assert!(check_roots(roots, &[complex!(1.0)], 1e-9));
    }

    #[test]
    fn quadratic_real() {
        // (z - 1)(z - 2)
        let p = Poly::from_descending(&[1.0, -3.0, 2.0]);
        let roots = p.roots(1e-14, 100).unwrap();
        assert!(check_roots(roots, &[complex!(1.0), complex!(2.0)], 1e-12));
    }

    #[test]
    fn quadratic_conjugate_pair() {
        // z^2 + 1
        let p = Poly::from_descending(&[1.0, 0.0, 1.0]);
        let roots = p.roots(1e-14, 100).unwrap();
        assert!(check_roots(
            roots,
            &[complex!(0.0, 1.0), complex!(0.0, -1.0)],
            1e-12
        ));
    }

    #[test]
    fn zero_roots_are_deflated() {
        // z^3 - z^2 = z^2 (z - 1)
        let p = Poly::from_descending(&[1.0, -1.0, 0.0, 0.0]);
        let roots = p.roots(1e-14, 100).unwrap();
        assert!(check_roots(
            roots,
            &[complex!(0.0), complex!(0.0), complex!(1.0)],
            1e-9
        ));
    }

    #[test]
    fn degree_3() {
        let expected = [complex!(1.0), complex!(2.0), complex!(3.0)];
        let p = Poly::from_roots(&expected);
        let roots = p.roots(1e-14, 1000).unwrap();
        assert!(check_roots(roots, &expected, 1e-8));
    }

    #[test]
    fn degree_3_complex() {
        let expected = [complex!(1.0), complex!(0.0, 1.0), complex!(0.0, -1.0)];
        let p = Poly::from_roots(&expected);
        let roots = p.roots(1e-14, 1000).unwrap();
        assert!(check_roots(roots, &expected, 1e-8));
    }

    #[test]
    fn degree_6_inside_unit_circle() {
        let expected = [
            complex!(0.3, 0.4),
            complex!(0.3, -0.4),
            complex!(-0.5, 0.2),
            complex!(-0.5, -0.2),
            complex!(0.9),
            complex!(-0.8),
        ];
        let p = Poly::from_roots(&expected);
        let roots = p.roots(1e-14, 1000).unwrap();
        assert!(check_roots(roots, &expected, 1e-6));
    }
}
