use num::complex::Complex64;
use thiserror::Error;

use crate::roots;

/// The top-level error type for this crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A coefficient vector that cannot describe a polynomial was rejected
    /// at the boundary, before any root finding or plotting was attempted.
    #[error("invalid polynomial: {0}")]
    InvalidPolynomial(&'static str),

    #[error("scaling factor must be a non-negative finite number, got {0}")]
    InvalidScalingFactor(f64),

    /// The root finder ran out of iterations. Carries the best iterates it
    /// had when it gave up.
    #[error("root finder did not converge within the given constraints")]
    NoConverge(Vec<Complex64>),

    /// The plotting backend reported a failure; surfaced without retries.
    #[error("rendering failed: {0}")]
    Render(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<roots::Error> for Error {
    fn from(e: roots::Error) -> Self {
        match e {
            roots::Error::NoConverge(points) => Self::NoConverge(points),
            roots::Error::Other(source) => Self::Other(source),
        }
    }
}
