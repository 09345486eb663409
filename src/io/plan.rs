//! Placement plan pairing discovered image files with selected points
//!
//! The plan is the hand-off to whatever composites the collage: entry `i`
//! tells it where to center file `i`. Files that did not receive a point are
//! listed separately so the compositor can drop them. File names are stored
//! relative to the target directory, which sits next to the plan.

use crate::algorithm::params::SelectionParams;
use crate::algorithm::selection::{Selection, SelectionPhase};
use crate::io::error::{CollageError, Result, WithPath};
use crate::spatial::canvas::CanvasSize;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// One placed item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Name of the image file assigned to this point, absent when the count
    /// was overridden
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Center column on the canvas
    pub x: i32,
    /// Center row on the canvas
    pub y: i32,
    /// Phase that produced the point
    pub phase: SelectionPhase,
}

/// Complete layout result for one target
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacementPlan {
    /// Canvas the points refer to
    pub canvas: CanvasSize,
    /// Footprint side length in pixels
    pub footprint_size: u32,
    /// Overlap bound used by the constrained phase
    pub max_overlap_percent: f64,
    /// Number of points requested
    pub requested: usize,
    /// Points that respect the overlap bound
    pub constrained: usize,
    /// Points added without an overlap check
    pub fallback: usize,
    /// Placements in selection order
    pub placements: Vec<Placement>,
    /// Names of files left without a point
    pub unplaced: Vec<PathBuf>,
}

impl PlacementPlan {
    /// Pair `files` with the selected points index by index
    ///
    /// Only the file name of each path is recorded.
    pub fn new(
        files: &[PathBuf],
        selection: &Selection,
        canvas: CanvasSize,
        params: &SelectionParams,
    ) -> Self {
        let placements = selection
            .points
            .iter()
            .enumerate()
            .map(|(index, point)| Placement {
                file: files.get(index).map(|path| file_name(path)),
                x: point.x,
                y: point.y,
                phase: selection
                    .phase_of(index)
                    .unwrap_or(SelectionPhase::Fallback),
            })
            .collect();

        let unplaced = files
            .get(selection.len()..)
            .unwrap_or(&[])
            .iter()
            .map(|path| file_name(path))
            .collect();

        Self {
            canvas,
            footprint_size: params.footprint_size,
            max_overlap_percent: params.max_overlap_percent,
            requested: params.count,
            constrained: selection.constrained,
            fallback: selection.fallback(),
            placements,
            unplaced,
        }
    }

    /// Number of placements
    pub fn placed(&self) -> usize {
        self.placements.len()
    }

    /// Write the plan as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory or file cannot be created or
    /// the plan cannot be serialized
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
        }

        let file = File::create(path).with_path(path, "create plan")?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self).map_err(|source| {
            CollageError::Serialization {
                path: path.to_path_buf(),
                source,
            }
        })?;
        writer.flush().with_path(path, "write plan")?;
        Ok(())
    }

    /// Read a plan written by [`PlacementPlan::write_json`]
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsed
    pub fn read_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_path(path, "open plan")?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            CollageError::Serialization {
                path: path.to_path_buf(),
                source,
            }
        })
    }
}

fn file_name(path: &Path) -> PathBuf {
    path.file_name()
        .map_or_else(|| path.to_path_buf(), PathBuf::from)
}
