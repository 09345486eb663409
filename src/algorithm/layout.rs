//! Validated heart layout: canvas, outline mask and selection parameters

use crate::algorithm::params::SelectionParams;
use crate::algorithm::selection::{Selection, SelectionProgress, select_points_with_progress};
use crate::io::error::Result;
use crate::spatial::canvas::CanvasSize;
use crate::spatial::curve::HeartCurve;
use crate::spatial::mask::OccupancyMask;
use log::debug;
use rand::Rng;

/// Entry point for placing footprints inside a heart outline
///
/// Construction validates every parameter and rasterizes the outline once;
/// each call to [`HeartLayout::place`] runs an independent selection.
#[derive(Debug, Clone)]
pub struct HeartLayout {
    canvas: CanvasSize,
    curve: HeartCurve,
    params: SelectionParams,
    mask: OccupancyMask,
}

impl HeartLayout {
    /// Validate the configuration and build the outline mask
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas, curve or selection parameters are
    /// malformed
    pub fn new(canvas: CanvasSize, curve: HeartCurve, params: SelectionParams) -> Result<Self> {
        canvas.validate()?;
        curve.validate()?;
        params.validate(canvas)?;

        let mask = OccupancyMask::heart(canvas, &curve);
        debug!(
            "Heart mask covers {} of {} pixels on a {}x{} canvas",
            mask.count(),
            canvas.area(),
            canvas.width,
            canvas.height
        );

        Ok(Self {
            canvas,
            curve,
            params,
            mask,
        })
    }

    /// Canvas the layout was built for
    pub const fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    /// Outline parameters
    pub const fn curve(&self) -> &HeartCurve {
        &self.curve
    }

    /// Selection parameters
    pub const fn params(&self) -> &SelectionParams {
        &self.params
    }

    /// Rasterized outline
    pub const fn mask(&self) -> &OccupancyMask {
        &self.mask
    }

    /// Select placement points
    pub fn place<R: Rng + ?Sized>(&self, rng: &mut R) -> Selection {
        self.place_with_progress(rng, |_| {})
    }

    /// Select placement points, reporting each acceptance
    pub fn place_with_progress<R, F>(&self, rng: &mut R, observer: F) -> Selection
    where
        R: Rng + ?Sized,
        F: FnMut(SelectionProgress),
    {
        select_points_with_progress(&self.mask, &self.params, rng, observer)
    }
}
