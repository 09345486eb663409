//! Parametric heart outline sampled into polygon vertices
//!
//! The outline is the classic heart curve
//! `x = 16 sin³t`, `y = 13 cos t − 5 cos 2t − 2 cos 3t − cos 4t`,
//! scaled relative to the smaller canvas dimension and centered on the canvas
//! midpoint so that its proportions do not depend on resolution.

use crate::io::configuration::{HEART_CURVE_STEPS, HEART_CURVE_UNIT, HEART_SCALE_FACTOR};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::canvas::CanvasSize;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Sampling parameters for the heart outline
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeartCurve {
    /// Number of evenly spaced parameter samples over the full period
    pub steps: usize,
    /// Curve scale relative to `min(width, height)`
    pub scale_factor: f64,
}

impl Default for HeartCurve {
    fn default() -> Self {
        Self::new(HEART_CURVE_STEPS, HEART_SCALE_FACTOR)
    }
}

impl HeartCurve {
    /// Create curve parameters
    pub const fn new(steps: usize, scale_factor: f64) -> Self {
        Self {
            steps,
            scale_factor,
        }
    }

    /// Whether these parameters cannot produce a polygon with area
    pub fn is_degenerate(&self) -> bool {
        self.steps < 3 || !self.scale_factor.is_finite() || self.scale_factor <= 0.0
    }

    /// Reject parameters that cannot describe an outline
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than three steps are requested or the scale
    /// factor is not a positive finite number
    pub fn validate(&self) -> Result<()> {
        if self.steps < 3 {
            return Err(invalid_parameter(
                "curve.steps",
                &self.steps,
                &"at least 3 samples are needed to enclose an area",
            ));
        }
        if !self.scale_factor.is_finite() || self.scale_factor <= 0.0 {
            return Err(invalid_parameter(
                "curve.scale_factor",
                &self.scale_factor,
                &"must be a positive finite number",
            ));
        }
        Ok(())
    }

    /// Evaluate the curve at parameter `t` in canvas pixel coordinates
    pub fn point_at(&self, t: f64, canvas: CanvasSize) -> (f64, f64) {
        let scale = f64::from(canvas.min_dimension()) * self.scale_factor * HEART_CURVE_UNIT;
        let (center_x, center_y) = canvas.center();

        let raw_x = 16.0 * t.sin().powi(3);
        let raw_y = 13.0f64.mul_add(
            t.cos(),
            -(5.0f64.mul_add((2.0 * t).cos(), 2.0f64.mul_add((3.0 * t).cos(), (4.0 * t).cos()))),
        );

        (
            scale.mul_add(raw_x, f64::from(center_x)),
            scale.mul_add(-raw_y, f64::from(center_y)),
        )
    }

    /// Sample the closed outline into an ordered vertex list
    ///
    /// Samples span `[0, 2π]` inclusive, so the last vertex repeats the first.
    /// Degenerate parameters yield an empty list.
    pub fn sample(&self, canvas: CanvasSize) -> Vec<(f64, f64)> {
        if self.is_degenerate() {
            return Vec::new();
        }

        let last = (self.steps - 1) as f64;
        (0..self.steps)
            .map(|step| self.point_at(TAU * step as f64 / last, canvas))
            .collect()
    }
}
