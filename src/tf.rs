use num::complex::Complex64;

use crate::error::{Error, Result};
use crate::poly::Poly;

/// Root-finder tolerance on the squared step size. Comfortably below the
/// 1e-9 placement tolerance that matters at plotting resolution.
const EPSILON: f64 = 1e-14;
const MAX_ITER: usize = 1000;

/// A discrete-time transfer function B(z)/A(z), described by two real
/// coefficient vectors in descending powers of z.
#[derive(Clone, Debug, PartialEq)]
pub struct TransferFunction {
    b: Vec<f64>,
    a: Vec<f64>,
}

impl TransferFunction {
    /// Create a transfer function from numerator (`b`) and denominator
    /// (`a`) coefficients, highest-degree first.
    ///
    /// # Errors
    /// Rejects empty vectors and non-finite values before any root finding
    /// or plotting is attempted.
    pub fn new(b: impl Into<Vec<f64>>, a: impl Into<Vec<f64>>) -> Result<Self> {
        let b = b.into();
        let a = a.into();
        validate(&b, "empty numerator", "non-finite value in numerator")?;
        validate(&a, "empty denominator", "non-finite value in denominator")?;
        Ok(Self { b, a })
    }

    #[must_use]
    pub fn numerator(&self) -> &[f64] {
        &self.b
    }

    #[must_use]
    pub fn denominator(&self) -> &[f64] {
        &self.a
    }

    /// Scale down the numerator when either vector has a coefficient
    /// greater than 1.
    ///
    /// Both `kn = max(b)` and `kd = max(a)` divide `b`; `a` is never
    /// modified. This mirrors the source behavior of the tool this crate
    /// reimplements, asymmetry included, so that rendered pole-zero
    /// patterns match. The maxima are plain maxima, not maxima of the
    /// absolute values.
    pub fn normalize(&mut self) {
        let kn = peak(&self.b);
        if kn > 1.0 {
            for c in &mut self.b {
                *c /= kn;
            }
        }

        let kd = peak(&self.a);
        if kd > 1.0 {
            for c in &mut self.b {
                *c /= kd;
            }
        }
    }

    /// Roots of the numerator polynomial.
    ///
    /// A degree-0 or all-zero numerator has no zeros and yields an empty
    /// set.
    ///
    /// # Errors
    /// Propagates root-finder non-convergence.
    pub fn zeros(&self) -> Result<Vec<Complex64>> {
        Ok(Poly::from_descending(&self.b).roots(EPSILON, MAX_ITER)?)
    }

    /// Roots of the denominator polynomial.
    ///
    /// # Errors
    /// Propagates root-finder non-convergence.
    pub fn poles(&self) -> Result<Vec<Complex64>> {
        Ok(Poly::from_descending(&self.a).roots(EPSILON, MAX_ITER)?)
    }
}

fn peak(coeffs: &[f64]) -> f64 {
    coeffs.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

fn validate(coeffs: &[f64], empty: &'static str, non_finite: &'static str) -> Result<()> {
    if coeffs.is_empty() {
        return Err(Error::InvalidPolynomial(empty));
    }
    if coeffs.iter().any(|c| !c.is_finite()) {
        return Err(Error::InvalidPolynomial(non_finite));
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::TransferFunction;
    use crate::Error;

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            TransferFunction::new(vec![], vec![1.0]),
            Err(Error::InvalidPolynomial(_))
        ));
        assert!(matches!(
            TransferFunction::new(vec![1.0], vec![]),
            Err(Error::InvalidPolynomial(_))
        ));
    }

    #[test]
    fn rejects_non_finite() {
        assert!(matches!(
            TransferFunction::new(vec![1.0, f64::NAN], vec![1.0]),
            Err(Error::InvalidPolynomial(_))
        ));
        assert!(matches!(
            TransferFunction::new(vec![1.0], vec![f64::INFINITY]),
            Err(Error::InvalidPolynomial(_))
        ));
    }

    #[test]
    fn normalization_divides_b_by_both_factors() {
        // kn = 4, kd = 1 (max(a) = 1 is not > 1), so b becomes [1, 0.5]
        let mut tf = TransferFunction::new(vec![4.0, 2.0], vec![1.0, 0.5]).unwrap();
        tf.normalize();
        assert_eq!(tf.numerator(), &[1.0, 0.5]);
        assert_eq!(tf.denominator(), &[1.0, 0.5]);
    }

    #[test]
    fn normalization_applies_kd_to_b_not_a() {
        let mut tf = TransferFunction::new(vec![1.0, 1.0], vec![2.0, 4.0]).unwrap();
        tf.normalize();
        // kn = 1 (max(b) not > 1), kd = 4, applied to b only
        assert_eq!(tf.numerator(), &[0.25, 0.25]);
        assert_eq!(tf.denominator(), &[2.0, 4.0]);
    }

    #[test]
    fn normalization_ignores_negative_peaks() {
        let mut tf = TransferFunction::new(vec![-3.0, -2.0], vec![1.0]).unwrap();
        tf.normalize();
        assert_eq!(tf.numerator(), &[-3.0, -2.0]);
    }

    #[test]
    fn degree_0_numerator_has_no_zeros() {
        let tf = TransferFunction::new(vec![1.0], vec![1.0, -0.5]).unwrap();
        assert!(tf.zeros().unwrap().is_empty());
        assert_eq!(tf.poles().unwrap().len(), 1);
    }

    #[test]
    fn single_zero_at_one() {
        let tf = TransferFunction::new(vec![1.0, -1.0], vec![1.0]).unwrap();
        let zeros = tf.zeros().unwrap();
        assert_eq!(zeros.len(), 1);
        assert!((zeros[0].re - 1.0).abs() < 1e-9);
        assert!(zeros[0].im.abs() < 1e-9);
    }
}
