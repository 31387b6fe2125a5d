use num::complex::Complex64;
use num::{One, Zero};

/// Trailing coefficients below this magnitude are discarded by [`Poly::trim`],
/// so that a quadratic with a vanishing leading term does not overflow the
/// closed-form solvers.
const TINY: f64 = 1e-150;

/// Polynomial with real inputs, stored internally as complex coefficients
/// of ascending degree (constant term first).
///
/// The public constructors take coefficients in descending order, matching
/// the usual transfer-function convention where `[1.0, -1.0]` means `z - 1`.
#[derive(Clone, Debug, PartialEq)]
pub struct Poly(Vec<Complex64>);

impl Poly {
    /// Create a polynomial from real coefficients in descending order of
    /// degree (highest power of z first).
    #[must_use]
    pub fn from_descending(coeffs: &[f64]) -> Self {
        let v = coeffs
            .iter()
            .rev()
            .map(|&c| Complex64::new(c, 0.0))
            .collect();
        Self(v).normalize()
    }

    #[must_use]
    pub fn from_complex_vec(coeffs: Vec<Complex64>) -> Self {
        Self(coeffs).normalize()
    }

    /// Build the monic polynomial that has exactly the given roots.
    #[must_use]
    pub fn from_roots(roots: &[Complex64]) -> Self {
        let mut coeffs = vec![Complex64::one()];
        for r in roots {
            let mut next = vec![Complex64::zero(); coeffs.len() + 1];
            for (k, &c) in coeffs.iter().enumerate() {
                next[k + 1] += c;
                next[k] -= r * c;
            }
            coeffs = next;
        }
        Self(coeffs)
    }

    pub(crate) fn one() -> Self {
        Self(vec![Complex64::one()])
    }

    pub(crate) fn zero() -> Self {
        Self(vec![Complex64::zero()])
    }

    /// Coefficients in ascending order of degree.
    #[must_use]
    pub fn coeffs(&self) -> &[Complex64] {
        &self.0
    }

    /// The length of the polynomial without checking pre-conditions
    pub(crate) fn len_raw(&self) -> usize {
        self.0.len()
    }

    /// The degree of the polynomial without checking pre-conditions
    #[inline]
    pub(crate) fn degree_raw(&self) -> usize {
        self.len_raw() - 1
    }

    /// Degree of the polynomial, with leading zeros ignored.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.clone().normalize().degree_raw()
    }

    pub(crate) fn is_normalized(&self) -> bool {
        // a constant is always normalized, as it may be just a constant zero
        self.len_raw() == 1 || !self.last().is_zero()
    }

    /// Removes leading zero coefficients, keeping at least the constant term.
    pub(crate) fn normalize(mut self) -> Self {
        while self.0.len() > 1 && self.0.last().is_some_and(Complex64::is_zero) {
            self.0.pop();
        }
        if self.0.is_empty() {
            self.0.push(Complex64::zero());
        }
        debug_assert!(self.is_normalized());
        self
    }

    /// Make sure trailing almost-zero coefficients are removed
    pub(crate) fn trim(&mut self) {
        while self.0.len() > 1 && self.0.last().is_some_and(|c| c.norm() < TINY) {
            self.0.pop();
        }
    }

    /// The coefficient of the highest-degree term
    pub(crate) fn last(&self) -> Complex64 {
        self.0[self.len_raw() - 1]
    }

    pub(crate) fn is_monic(&self) -> bool {
        self.last().is_one()
    }

    /// Make the polynomial monic in-place.
    ///
    /// Monic polynomials are scaled such that the leading coefficient is 1,
    /// and the roots are preserved.
    pub(crate) fn make_monic(&mut self) {
        debug_assert!(self.is_normalized());
        let last_coeff = self.last();
        if last_coeff.is_one() {
            // already monic
            return;
        }
        for c in &mut self.0 {
            *c /= last_coeff;
        }
    }

    /// Evaluate the polynomial at `x` using Horner's scheme.
    #[must_use]
    pub fn eval(&self, x: Complex64) -> Complex64 {
        self.0
            .iter()
            .rev()
            .fold(Complex64::zero(), |acc, &c| acc * x + c)
    }

    /// Derivative
    #[must_use]
    pub fn diff(&self) -> Self {
        debug_assert!(self.is_normalized());

        // derivative of constant is zero
        if self.degree_raw() == 0 {
            return Self::zero();
        }

        let coeffs = self
            .0
            .iter()
            .enumerate()
            .skip(1) // shift degrees down
            .map(|(k, &c)| c * k as f64)
            .collect();
        Self(coeffs).normalize()
    }

    /// Factor out `n` roots at the origin by dropping the `n` lowest
    /// coefficients.
    pub(crate) fn shift_down(&self, n: usize) -> Self {
        debug_assert!(n < self.len_raw());
        Self(self.0[n..].to_vec())
    }
}
