//! Pole-zero maps of discrete-time transfer functions B(z)/A(z) on the
//! complex z-plane.
//!
//! The crate does three things: it normalizes the two coefficient vectors,
//! finds the roots of the numerator (zeros) and denominator (poles), and
//! draws the familiar z-plane picture (unit circle, axis crosshairs,
//! half-integer tick grid, `O` markers for zeros, `X` markers for poles)
//! onto a [`plotters`] drawing area supplied by the caller.
//!
//! Computing zeros and poles without plotting:
//!
//! ```
//! use zplane::TransferFunction;
//!
//! let tf = TransferFunction::new(vec![1.0, -1.4, 0.24], vec![1.0, 0.59, -0.64])?;
//! assert_eq!(tf.zeros()?.len(), 2);
//! assert_eq!(tf.poles()?.len(), 2);
//! # Ok::<(), zplane::Error>(())
//! ```
//!
//! Rendering onto a caller-owned surface (the caller keeps the drawing
//! area, so it can compose further or export with any plotters backend):
//!
//! ```no_run
//! use plotters::prelude::*;
//! use zplane::plot_z_plane;
//!
//! let root = BitMapBackend::new("z_plane.png", (800, 800)).into_drawing_area();
//! root.fill(&WHITE)?;
//! plot_z_plane(&[1.0, -1.0], &[1.0, -0.5], "Z-Plane", 0.0, &root)?;
//! root.present()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod plot;
mod poly;
pub mod roots;
mod tf;

pub use error::{Error, Result};
pub use num::complex::Complex64;
pub use plot::{plot_z_plane, ticks, ZPlane};
pub use poly::Poly;
pub use tf::TransferFunction;

/// A convenient way of writing complex number literals.
///
/// ```
/// use zplane::complex;
///
/// let z = complex!(1.0, -2.0);
/// assert_eq!(z.re, 1.0);
/// assert_eq!(z.im, -2.0);
/// ```
#[macro_export]
macro_rules! complex {
    () => {
        $crate::Complex64::new(0.0, 0.0)
    };
    ($re:expr) => {
        $crate::Complex64::new($re, 0.0)
    };
    ($re:expr, $im:expr) => {
        $crate::Complex64::new($re, $im)
    };
}
