//! Canvas geometry, outline rasterization and footprint overlap
//!
//! This module contains the shape side of the layout:
//! - Canvas dimensions and the heart outline curve
//! - Occupancy mask rasterization
//! - Footprint rectangles and their spatial index

/// Canvas dimensions and validation
pub mod canvas;
/// Heart outline curve sampling
pub mod curve;
/// Footprint rectangles and overlap percentage
pub mod footprint;
/// Bucket-grid index over placed footprints
pub mod index;
/// Occupancy mask rasterization
pub mod mask;

pub use canvas::CanvasSize;
pub use footprint::{Footprint, Point};
pub use mask::OccupancyMask;
