//! Constrained greedy point selection with density relaxation and fallback
//!
//! The constrained phase walks the mask's pixels in random order and accepts a
//! pixel when its footprint overlaps no previously accepted footprint by more
//! than the allowed percentage. If that phase cannot reach the requested count,
//! the fallback phase drops the overlap bound and fills the remainder with any
//! pixel whose footprint fits on the canvas. Infeasible requests never fail;
//! they return a shorter selection.

use crate::algorithm::params::SelectionParams;
use crate::spatial::footprint::{Footprint, Point};
use crate::spatial::index::FootprintIndex;
use crate::spatial::mask::OccupancyMask;
use log::{debug, warn};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

/// Phase of the selection that produced a point
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionPhase {
    /// Point respects the overlap bound against all earlier constrained points
    Constrained,
    /// Point was added without any overlap check
    Fallback,
}

/// Snapshot reported to progress observers after each acceptance
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionProgress {
    /// Phase that accepted the latest point
    pub phase: SelectionPhase,
    /// Points selected so far
    pub selected: usize,
    /// Points requested
    pub requested: usize,
}

/// Ordered points produced by one selection run
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    /// Accepted points; constrained points come first
    pub points: Vec<Point>,
    /// Number of leading points produced by the constrained phase
    pub constrained: usize,
    /// Candidates examined by the constrained phase
    pub scanned: usize,
    /// Candidates discarded by density relaxation
    pub pruned: usize,
}

impl Selection {
    /// Total number of points
    pub const fn len(&self) -> usize {
        self.points.len()
    }

    /// Test if no points were selected
    pub const fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points added by the fallback phase
    pub const fn fallback(&self) -> usize {
        self.points.len() - self.constrained
    }

    /// Whether the fallback phase contributed any point
    pub const fn used_fallback(&self) -> bool {
        self.fallback() > 0
    }

    /// Whether fewer points than `requested` were found
    pub const fn is_short(&self, requested: usize) -> bool {
        self.points.len() < requested
    }

    /// Points that respect the overlap bound
    pub fn constrained_points(&self) -> &[Point] {
        self.points.get(..self.constrained).unwrap_or(&[])
    }

    /// Points added without an overlap check
    pub fn fallback_points(&self) -> &[Point] {
        self.points.get(self.constrained..).unwrap_or(&[])
    }

    /// Phase that produced the point at `index`
    pub fn phase_of(&self, index: usize) -> Option<SelectionPhase> {
        (index < self.points.len()).then_some(if index < self.constrained {
            SelectionPhase::Constrained
        } else {
            SelectionPhase::Fallback
        })
    }
}

/// Select up to `params.count` points from the mask
///
/// See [`select_points_with_progress`].
pub fn select_points<R: Rng + ?Sized>(
    mask: &OccupancyMask,
    params: &SelectionParams,
    rng: &mut R,
) -> Selection {
    select_points_with_progress(mask, params, rng, |_| {})
}

/// Select up to `params.count` points, reporting each acceptance to `observer`
///
/// Acceptance order follows the shuffled candidate order, which is the only
/// source of randomness; a seeded `rng` makes runs reproducible. An empty mask
/// or a zero count yields an empty selection.
pub fn select_points_with_progress<R, F>(
    mask: &OccupancyMask,
    params: &SelectionParams,
    rng: &mut R,
    mut observer: F,
) -> Selection
where
    R: Rng + ?Sized,
    F: FnMut(SelectionProgress),
{
    let mut selection = Selection::default();
    if params.count == 0 {
        return selection;
    }
    if mask.is_empty() {
        warn!("Outline mask is empty; no points can be placed");
        return selection;
    }

    constrained_phase(mask, params, rng, &mut selection, &mut observer);
    selection.constrained = selection.points.len();
    debug!(
        "Constrained phase placed {}/{} points after scanning {} candidates ({} pruned)",
        selection.constrained, params.count, selection.scanned, selection.pruned
    );

    if selection.is_short(params.count) {
        fallback_phase(mask, params, rng, &mut selection, &mut observer);
        warn!(
            "Overlap bound relaxed for {} of {} points",
            selection.fallback(),
            selection.len()
        );
    }

    if selection.is_short(params.count) {
        warn!(
            "Only {} of {} requested points fit inside the outline",
            selection.len(),
            params.count
        );
    }

    selection
}

fn constrained_phase<R, F>(
    mask: &OccupancyMask,
    params: &SelectionParams,
    rng: &mut R,
    selection: &mut Selection,
    observer: &mut F,
) where
    R: Rng + ?Sized,
    F: FnMut(SelectionProgress),
{
    let mut pixels = mask.true_pixels();
    pixels.shuffle(rng);
    let mut candidates = VecDeque::from(pixels);

    let mut placed = FootprintIndex::new(params.footprint_size);
    let prune_radius_squared = params.prune_radius().powi(2);
    let scan_limit = params.max_candidate_scans.unwrap_or(usize::MAX);

    while selection.points.len() < params.count {
        if selection.scanned >= scan_limit {
            debug!("Candidate scan cap of {scan_limit} reached");
            break;
        }
        let Some(candidate) = candidates.pop_front() else {
            break;
        };
        selection.scanned += 1;

        let footprint = Footprint::centered(candidate, params.footprint_size);
        if placed.exceeds(&footprint, params.max_overlap_percent) {
            continue;
        }

        placed.insert(footprint);
        selection.points.push(candidate);
        observer(SelectionProgress {
            phase: SelectionPhase::Constrained,
            selected: selection.points.len(),
            requested: params.count,
        });

        // Thin the remaining candidates around every Nth acceptance
        if params.prune_interval > 0 && selection.points.len() % params.prune_interval == 0 {
            let before = candidates.len();
            candidates.retain(|pixel| pixel.distance_squared(candidate) >= prune_radius_squared);
            selection.pruned += before - candidates.len();
        }
    }
}

fn fallback_phase<R, F>(
    mask: &OccupancyMask,
    params: &SelectionParams,
    rng: &mut R,
    selection: &mut Selection,
    observer: &mut F,
) where
    R: Rng + ?Sized,
    F: FnMut(SelectionProgress),
{
    let mut pixels = mask.true_pixels();
    pixels.shuffle(rng);

    let size = i64::from(params.footprint_size);
    let max_x = mask.width() as i64 - size;
    let max_y = mask.height() as i64 - size;
    let mut taken: HashSet<Point> = selection.points.iter().copied().collect();

    for pixel in pixels {
        if selection.points.len() >= params.count {
            break;
        }

        let (x, y) = (i64::from(pixel.x), i64::from(pixel.y));
        if 0 < x && x < max_x && 0 < y && y < max_y && taken.insert(pixel) {
            selection.points.push(pixel);
            observer(SelectionProgress {
                phase: SelectionPhase::Fallback,
                selected: selection.points.len(),
                requested: params.count,
            });
        }
    }
}
