//! Placement points and the square footprints reserved around them

use serde::{Deserialize, Serialize};

/// Integer pixel coordinate on the canvas (x = column, y = row)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl Point {
    /// Create a point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point
    pub fn distance_squared(self, other: Self) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        dx.mul_add(dx, dy * dy)
    }
}

/// Axis-aligned rectangle with half-open extents `[left, right) × [top, bottom)`
///
/// Only used for overlap testing; never clipped to the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Footprint {
    /// Left edge (inclusive)
    pub left: i64,
    /// Top edge (inclusive)
    pub top: i64,
    /// Right edge (exclusive)
    pub right: i64,
    /// Bottom edge (exclusive)
    pub bottom: i64,
}

impl Footprint {
    /// Create a footprint from its edges
    pub const fn new(left: i64, top: i64, right: i64, bottom: i64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Square of side `size` centered on `center`
    ///
    /// The leading edge sits `size / 2` (integer division) before the center.
    pub fn centered(center: Point, size: u32) -> Self {
        let size = i64::from(size);
        let left = i64::from(center.x) - size / 2;
        let top = i64::from(center.y) - size / 2;
        Self::new(left, top, left + size, top + size)
    }

    /// Horizontal extent
    pub const fn width(&self) -> i64 {
        self.right - self.left
    }

    /// Vertical extent
    pub const fn height(&self) -> i64 {
        self.bottom - self.top
    }

    /// Enclosed area, zero for inverted rectangles
    pub fn area(&self) -> i64 {
        self.width().max(0) * self.height().max(0)
    }

    /// Area shared with `other`; touching edges share nothing
    pub fn intersection_area(&self, other: &Self) -> i64 {
        let width = self.right.min(other.right) - self.left.max(other.left);
        let height = self.bottom.min(other.bottom) - self.top.max(other.top);

        if width <= 0 || height <= 0 {
            0
        } else {
            width * height
        }
    }
}

/// Overlap between two footprints as a percentage of the smaller area
///
/// Returns 0 for disjoint or touching rectangles and for zero-area inputs,
/// 100 when one rectangle contains the other. Symmetric in its arguments.
pub fn overlap_percent(a: &Footprint, b: &Footprint) -> f64 {
    let overlap = a.intersection_area(b);
    if overlap == 0 {
        return 0.0;
    }

    let min_area = a.area().min(b.area());
    if min_area <= 0 {
        return 0.0;
    }

    overlap as f64 / min_area as f64 * 100.0
}
