//! Heart-shaped collage layout by constrained greedy point placement
//!
//! The crate rasterizes a heart outline into an occupancy mask, then samples
//! placement points inside it so that square image footprints centered on those
//! points overlap each other by at most a given percentage. When the region
//! cannot hold enough footprints under that bound, the remaining points are
//! filled without the overlap check rather than failing.

#![forbid(unsafe_code)]

/// Point selection and layout orchestration
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Canvas geometry, outline masks and footprint overlap
pub mod spatial;

pub use algorithm::layout::HeartLayout;
pub use algorithm::params::SelectionParams;
pub use algorithm::selection::{Selection, select_points};
pub use io::error::{CollageError, Result};
