//! Bucket-grid spatial index over placed footprints
//!
//! Every footprint is registered in each grid cell its extent touches. Two
//! footprints with a positive intersection always share at least one cell, so
//! an overlap query only needs to look at the cells covered by the query.

use crate::spatial::footprint::{Footprint, overlap_percent};
use std::collections::HashMap;
use std::ops::RangeInclusive;

/// Placed footprints in acceptance order, with bucketed lookup
#[derive(Debug, Clone)]
pub struct FootprintIndex {
    cell_size: i64,
    placed: Vec<Footprint>,
    buckets: HashMap<(i64, i64), Vec<usize>>,
}

impl FootprintIndex {
    /// Create an empty index with square cells of `cell_size` pixels
    ///
    /// A cell size equal to the footprint size keeps each footprint in at most
    /// four cells.
    pub fn new(cell_size: u32) -> Self {
        Self {
            cell_size: i64::from(cell_size.max(1)),
            placed: Vec::new(),
            buckets: HashMap::new(),
        }
    }

    /// Register a footprint
    pub fn insert(&mut self, footprint: Footprint) {
        let id = self.placed.len();
        let (rows, cols) = self.cell_span(&footprint);
        for row in rows {
            for col in cols.clone() {
                self.buckets.entry((row, col)).or_default().push(id);
            }
        }
        self.placed.push(footprint);
    }

    /// Whether `footprint` overlaps any placed footprint by more than
    /// `max_overlap_percent`
    ///
    /// Stops at the first violation.
    pub fn exceeds(&self, footprint: &Footprint, max_overlap_percent: f64) -> bool {
        self.neighbours(footprint)
            .any(|other| overlap_percent(footprint, other) > max_overlap_percent)
    }

    // Candidates sharing a cell with `footprint`; may repeat across cells
    fn neighbours<'a>(&'a self, footprint: &Footprint) -> impl Iterator<Item = &'a Footprint> {
        let (rows, cols) = self.cell_span(footprint);
        rows.flat_map(move |row| cols.clone().map(move |col| (row, col)))
            .filter_map(|cell| self.buckets.get(&cell))
            .flatten()
            .filter_map(|&id| self.placed.get(id))
    }

    fn cell_span(&self, footprint: &Footprint) -> (RangeInclusive<i64>, RangeInclusive<i64>) {
        let first_row = footprint.top.div_euclid(self.cell_size);
        let last_row = (footprint.bottom - 1).max(footprint.top).div_euclid(self.cell_size);
        let first_col = footprint.left.div_euclid(self.cell_size);
        let last_col = (footprint.right - 1).max(footprint.left).div_euclid(self.cell_size);
        (first_row..=last_row, first_col..=last_col)
    }
}
