//! Selection parameters and boundary validation

use crate::io::configuration::{
    DEFAULT_FOOTPRINT_SIZE, DEFAULT_MAX_OVERLAP_PERCENT, DEFAULT_MIN_DISTANCE_FACTOR,
    DEFAULT_PRUNE_INTERVAL, DEFAULT_PRUNE_RADIUS_FACTOR,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::canvas::CanvasSize;

/// Parameters controlling constrained point selection
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectionParams {
    /// Number of points requested
    pub count: usize,
    /// Side length of each footprint in pixels
    pub footprint_size: u32,
    /// Largest allowed overlap between two footprints, as a percentage
    pub max_overlap_percent: f64,
    /// Prune the candidate set after every this many acceptances
    pub prune_interval: usize,
    /// Pruning radius as a fraction of [`SelectionParams::min_distance`]
    pub prune_radius_factor: f64,
    /// Scale applied to the non-overlapping footprint extent
    pub min_distance_factor: f64,
    /// Cap on candidates examined before falling through to the fallback
    pub max_candidate_scans: Option<usize>,
}

impl Default for SelectionParams {
    fn default() -> Self {
        Self::new(0, DEFAULT_FOOTPRINT_SIZE, DEFAULT_MAX_OVERLAP_PERCENT)
    }
}

impl SelectionParams {
    /// Create parameters with default density relaxation settings
    pub const fn new(count: usize, footprint_size: u32, max_overlap_percent: f64) -> Self {
        Self {
            count,
            footprint_size,
            max_overlap_percent,
            prune_interval: DEFAULT_PRUNE_INTERVAL,
            prune_radius_factor: DEFAULT_PRUNE_RADIUS_FACTOR,
            min_distance_factor: DEFAULT_MIN_DISTANCE_FACTOR,
            max_candidate_scans: None,
        }
    }

    /// Expected spacing between neighbouring accepted points
    pub fn min_distance(&self) -> f64 {
        f64::from(self.footprint_size)
            * (1.0 - self.max_overlap_percent / 100.0)
            * self.min_distance_factor
    }

    /// Candidates closer than this to a pruning point are discarded
    pub fn prune_radius(&self) -> f64 {
        self.min_distance() * self.prune_radius_factor
    }

    /// Check the parameters against the canvas they will be used on
    ///
    /// A zero `count` is accepted and simply yields an empty selection.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The footprint size is zero or larger than the smaller canvas dimension
    /// - The overlap percentage is not a finite value in `[0, 100]`
    /// - The prune interval is zero
    /// - A factor is negative or not finite
    /// - The scan cap is zero
    pub fn validate(&self, canvas: CanvasSize) -> Result<()> {
        if self.footprint_size == 0 {
            return Err(invalid_parameter(
                "footprint_size",
                &self.footprint_size,
                &"must be positive",
            ));
        }
        if self.footprint_size > canvas.min_dimension() {
            return Err(invalid_parameter(
                "footprint_size",
                &self.footprint_size,
                &format!(
                    "must fit within the {}x{} canvas",
                    canvas.width, canvas.height
                ),
            ));
        }
        if !self.max_overlap_percent.is_finite()
            || !(0.0..=100.0).contains(&self.max_overlap_percent)
        {
            return Err(invalid_parameter(
                "max_overlap_percent",
                &self.max_overlap_percent,
                &"must be between 0 and 100",
            ));
        }
        if self.prune_interval == 0 {
            return Err(invalid_parameter(
                "prune_interval",
                &self.prune_interval,
                &"must be positive",
            ));
        }
        for (parameter, value) in [
            ("prune_radius_factor", self.prune_radius_factor),
            ("min_distance_factor", self.min_distance_factor),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &"must be a non-negative finite number",
                ));
            }
        }
        if self.max_candidate_scans == Some(0) {
            return Err(invalid_parameter(
                "max_candidate_scans",
                &0,
                &"must be positive when set",
            ));
        }
        Ok(())
    }
}
