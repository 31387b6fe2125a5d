//! Rendering of the z-plane picture: unit circle, axis crosshairs,
//! half-integer tick grid, and the pole/zero markers.
//!
//! Everything is drawn onto a caller-supplied [`DrawingArea`], so the
//! caller owns the surface and decides how to compose or export it.

use std::f64::consts::TAU;
use std::ops::Range;

use plotters::coord::ranged1d::{DefaultFormatting, KeyPointHint, Ranged};
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::{Error, Result};
use crate::tf::TransferFunction;

/// Matlab blue, the reference color of circle, crosshairs and grid.
const REFERENCE: RGBColor = RGBColor(0x4d, 0xbe, 0xee);
/// Edge color of the pole and zero markers.
const MARKER_EDGE: RGBColor = RGBColor(0x00, 0x72, 0xbd);
const ALPHA: f64 = 0.8;
/// Half-extent of the fixed square viewing window.
const WINDOW: f64 = 1.5;
/// Marker radius in pixels (about a 10pt marker).
const MARKER_RADIUS: i32 = 5;
/// Dots used to draw the unit circle.
const CIRCLE_DOTS: u32 = 180;

/// Tick positions shared by both axes: half-integer steps from
/// `-(1 + s)` through `1.5 + s` inclusive, where `s` is the scaling
/// factor truncated to an integer.
///
/// ```
/// assert_eq!(zplane::ticks(0.0), vec![-1.0, -0.5, 0.0, 0.5, 1.0, 1.5]);
/// ```
#[must_use]
pub fn ticks(scaling_factor: f64) -> Vec<f64> {
    let s = scaling_factor.max(0.0).trunc() as i64;
    (-2 * (1 + s)..=3 + 2 * s).map(|k| k as f64 * 0.5).collect()
}

/// A linear f64 axis that puts grid lines and labels exactly at the
/// half-integer tick positions instead of letting the library pick them.
#[derive(Clone)]
struct HalfStepCoord {
    range: Range<f64>,
    ticks: Vec<f64>,
}

impl HalfStepCoord {
    fn new(range: Range<f64>, ticks: Vec<f64>) -> Self {
        Self { range, ticks }
    }
}

impl Ranged for HalfStepCoord {
    type FormatOption = DefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        let span = self.range.end - self.range.start;
        if span == 0.0 {
            return limit.0;
        }
        let ratio = (value - self.range.start) / span;
        limit.0 + (f64::from(limit.1 - limit.0) * ratio).round() as i32
    }

    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        if hint.max_num_points() == 0 {
            return vec![];
        }
        // ticks beyond the window are requested by large scaling factors;
        // they simply fall outside the drawn region
        self.ticks
            .iter()
            .copied()
            .filter(|t| *t >= self.range.start && *t <= self.range.end)
            .collect()
    }

    fn range(&self) -> Range<f64> {
        self.range.clone()
    }
}

/// Builder for a pole-zero map of one transfer function.
///
/// Defaults: title `"Z-Plane"`, scaling factor 0.
pub struct ZPlane {
    tf: TransferFunction,
    title: String,
    scaling_factor: f64,
}

impl ZPlane {
    #[must_use]
    pub fn new(tf: TransferFunction) -> Self {
        Self {
            tf,
            title: "Z-Plane".to_owned(),
            scaling_factor: 0.0,
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Extends crosshairs and tick range beyond the unit interval.
    /// Must be non-negative; validated when rendering.
    #[must_use]
    pub fn scaling_factor(mut self, scaling_factor: f64) -> Self {
        self.scaling_factor = scaling_factor;
        self
    }

    /// Normalize the coefficients, compute zeros and poles, and draw the
    /// z-plane map onto `root`.
    ///
    /// The plot region is centered and squared inside `root` so the unit
    /// circle renders as a true circle regardless of the area's shape.
    /// After this returns, `root` stays fully usable for further
    /// composition or export.
    ///
    /// # Errors
    /// - The scaling factor is negative or non-finite
    /// - Root finding did not converge
    /// - The plotting backend reported a drawing failure
    pub fn render<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()> {
        if !self.scaling_factor.is_finite() || self.scaling_factor < 0.0 {
            return Err(Error::InvalidScalingFactor(self.scaling_factor));
        }

        let mut tf = self.tf.clone();
        tf.normalize();
        let zeros = tf.zeros()?;
        let poles = tf.poles()?;
        log::debug!(
            "rendering {:?}: {} zeros, {} poles",
            self.title,
            zeros.len(),
            poles.len()
        );

        // center a square viewport inside the supplied area
        let (w, h) = root.dim_in_pixel();
        let side = w.min(h);
        let mx = ((w - side) / 2) as i32;
        let my = ((h - side) / 2) as i32;
        let square = root.margin(my, my, mx, mx);

        // the fixed window never shows ticks beyond +-1.5, which s = 1
        // already covers, so larger factors need not generate more
        let tick_values = ticks(self.scaling_factor.min(1.0));
        let mut chart = ChartBuilder::on(&square)
            .margin(10)
            .caption(&self.title, ("sans-serif", 24))
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(
                HalfStepCoord::new(-WINDOW..WINDOW, tick_values.clone()),
                HalfStepCoord::new(-WINDOW..WINDOW, tick_values),
            )
            .map_err(|e| Error::Render(e.to_string()))?;

        chart
            .configure_mesh()
            .light_line_style(WHITE.mix(0.0))
            .bold_line_style(REFERENCE.mix(0.2))
            .axis_style(BLACK.mix(0.6))
            .x_desc("Real Part")
            .y_desc("Imaginary Part")
            .label_style(("sans-serif", 14))
            .draw()
            .map_err(|e| Error::Render(e.to_string()))?;

        let guide: ShapeStyle = REFERENCE.mix(ALPHA).filled();

        // dotted unit circle
        chart
            .draw_series((0..=CIRCLE_DOTS).map(|i| {
                let t = TAU * f64::from(i) / f64::from(CIRCLE_DOTS);
                Circle::new((t.cos(), t.sin()), 1, guide)
            }))
            .map_err(|e| Error::Render(e.to_string()))?;

        // dotted crosshairs through the origin, extended by the scaling
        // factor but drawn only up to the window edge
        let extent = (self.scaling_factor + 2.0).min(WINDOW);
        let dots = (extent * 40.0) as u32;
        chart
            .draw_series((0..=dots).map(|i| {
                let x = -extent + 2.0 * extent * f64::from(i) / f64::from(dots);
                Circle::new((x, 0.0), 1, guide)
            }))
            .map_err(|e| Error::Render(e.to_string()))?;
        chart
            .draw_series((0..=dots).map(|i| {
                let y = -extent + 2.0 * extent * f64::from(i) / f64::from(dots);
                Circle::new((0.0, y), 1, guide)
            }))
            .map_err(|e| Error::Render(e.to_string()))?;

        // zeros: hollow circles, white fill over the grid, colored rim
        chart
            .draw_series(
                zeros
                    .iter()
                    .map(|z| Circle::new((z.re, z.im), MARKER_RADIUS, WHITE.filled())),
            )
            .map_err(|e| Error::Render(e.to_string()))?;
        chart
            .draw_series(
                zeros
                    .iter()
                    .map(|z| Circle::new((z.re, z.im), MARKER_RADIUS, MARKER_EDGE.stroke_width(1))),
            )
            .map_err(|e| Error::Render(e.to_string()))?;

        // poles: crosses, same edge color and size
        chart
            .draw_series(
                poles
                    .iter()
                    .map(|z| Cross::new((z.re, z.im), MARKER_RADIUS, MARKER_EDGE.stroke_width(1))),
            )
            .map_err(|e| Error::Render(e.to_string()))?;

        Ok(())
    }
}

/// Draw the pole-zero map of B(z)/A(z) onto `root` in one call.
///
/// Thin wrapper over [`ZPlane`] mirroring the classic
/// `plot_z_plane(B, A, title, scaling_factor)` surface.
///
/// # Errors
/// Propagates coefficient validation, root finding and rendering errors.
pub fn plot_z_plane<DB: DrawingBackend>(
    b: &[f64],
    a: &[f64],
    title: &str,
    scaling_factor: f64,
    root: &DrawingArea<DB, Shift>,
) -> Result<()> {
    ZPlane::new(TransferFunction::new(b, a)?)
        .title(title)
        .scaling_factor(scaling_factor)
        .render(root)
}
