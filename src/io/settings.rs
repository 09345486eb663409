//! JSON settings file layered under command-line overrides

use crate::algorithm::layout::HeartLayout;
use crate::algorithm::params::SelectionParams;
use crate::io::configuration::{
    DEFAULT_FOOTPRINT_SIZE, DEFAULT_MAX_OVERLAP_PERCENT, DEFAULT_MIN_DISTANCE_FACTOR,
    DEFAULT_PRUNE_INTERVAL, DEFAULT_PRUNE_RADIUS_FACTOR,
};
use crate::io::error::{CollageError, Result, WithPath};
use crate::spatial::canvas::CanvasSize;
use crate::spatial::curve::HeartCurve;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Every tunable of a layout run; missing fields take their defaults
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutSettings {
    /// Canvas dimensions
    pub canvas: CanvasSize,
    /// Footprint side length in pixels
    pub footprint_size: u32,
    /// Largest allowed overlap between footprints, as a percentage
    pub max_overlap_percent: f64,
    /// Outline sampling parameters
    pub curve: HeartCurve,
    /// Acceptances between density relaxation passes
    pub prune_interval: usize,
    /// Pruning radius as a fraction of the minimum spacing
    pub prune_radius_factor: f64,
    /// Minimum spacing as a fraction of the non-overlapping extent
    pub min_distance_factor: f64,
    /// Optional cap on constrained-phase candidate scans
    pub max_candidate_scans: Option<usize>,
    /// Seed for reproducible runs; OS entropy when absent
    pub seed: Option<u64>,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            canvas: CanvasSize::default(),
            footprint_size: DEFAULT_FOOTPRINT_SIZE,
            max_overlap_percent: DEFAULT_MAX_OVERLAP_PERCENT,
            curve: HeartCurve::default(),
            prune_interval: DEFAULT_PRUNE_INTERVAL,
            prune_radius_factor: DEFAULT_PRUNE_RADIUS_FACTOR,
            min_distance_factor: DEFAULT_MIN_DISTANCE_FACTOR,
            max_candidate_scans: None,
            seed: None,
        }
    }
}

impl LayoutSettings {
    /// Load settings from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or does not parse
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_path(path, "open settings")?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| CollageError::Settings {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Selection parameters for `count` items
    pub const fn selection_params(&self, count: usize) -> SelectionParams {
        SelectionParams {
            count,
            footprint_size: self.footprint_size,
            max_overlap_percent: self.max_overlap_percent,
            prune_interval: self.prune_interval,
            prune_radius_factor: self.prune_radius_factor,
            min_distance_factor: self.min_distance_factor,
            max_candidate_scans: self.max_candidate_scans,
        }
    }

    /// Build a validated layout for `count` items
    ///
    /// # Errors
    ///
    /// Returns an error if any setting is out of range
    pub fn layout(&self, count: usize) -> Result<HeartLayout> {
        HeartLayout::new(self.canvas, self.curve, self.selection_params(count))
    }
}
