//! Canvas dimensions and their validation

use crate::io::configuration::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, MAX_CANVAS_DIMENSION,
};
use crate::io::error::{Result, invalid_parameter};
use serde::{Deserialize, Serialize};

/// Pixel dimensions of the collage canvas
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSize {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
    }
}

impl CanvasSize {
    /// Create a canvas of the given dimensions
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The smaller of the two dimensions, which drives outline scaling
    pub fn min_dimension(&self) -> u32 {
        self.width.min(self.height)
    }

    /// Integer midpoint of the canvas as (x, y)
    pub const fn center(&self) -> (u32, u32) {
        (self.width / 2, self.height / 2)
    }

    /// Total number of pixels
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Reject empty or oversized canvases
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds
    /// [`MAX_CANVAS_DIMENSION`]
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be positive"));
            }
            if value > MAX_CANVAS_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must not exceed {MAX_CANVAS_DIMENSION}"),
                ));
            }
        }
        Ok(())
    }
}
