//! Occupancy mask rasterized from a closed outline polygon

use crate::spatial::canvas::CanvasSize;
use crate::spatial::curve::HeartCurve;
use crate::spatial::footprint::Point;
use ndarray::Array2;

/// Binary grid marking which canvas pixels lie inside the outline
///
/// Indexed `[row, col]`. Built once and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyMask {
    cells: Array2<bool>,
}

impl OccupancyMask {
    /// Create an all-false mask covering the canvas
    pub fn empty(canvas: CanvasSize) -> Self {
        Self {
            cells: Array2::from_elem((canvas.height as usize, canvas.width as usize), false),
        }
    }

    /// Wrap a precomputed grid
    pub const fn from_cells(cells: Array2<bool>) -> Self {
        Self { cells }
    }

    /// Rasterize the heart outline for the given canvas
    pub fn heart(canvas: CanvasSize, curve: &HeartCurve) -> Self {
        Self::from_polygon(canvas, &curve.sample(canvas))
    }

    /// Fill a closed polygon using the even-odd rule
    ///
    /// A pixel is inside when its center `(col + 0.5, row + 0.5)` is enclosed.
    /// Polygons with fewer than three vertices or non-finite coordinates give an
    /// all-false mask.
    pub fn from_polygon(canvas: CanvasSize, vertices: &[(f64, f64)]) -> Self {
        let mut mask = Self::empty(canvas);
        if vertices.len() < 3
            || vertices
                .iter()
                .any(|&(x, y)| !x.is_finite() || !y.is_finite())
        {
            return mask;
        }

        let width = mask.width() as f64;
        let mut crossings = Vec::with_capacity(vertices.len());

        for row in 0..mask.height() {
            scanline_crossings(vertices, row as f64 + 0.5, &mut crossings);

            for span in crossings.chunks_exact(2) {
                let [start, end] = span else { continue };
                let first_col = (start - 0.5).ceil().clamp(0.0, width) as usize;
                let end_col = (end - 0.5).ceil().clamp(0.0, width) as usize;

                for col in first_col..end_col {
                    if let Some(cell) = mask.cells.get_mut([row, col]) {
                        *cell = true;
                    }
                }
            }
        }

        mask
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Underlying grid
    pub const fn cells(&self) -> &Array2<bool> {
        &self.cells
    }

    /// Test whether a point lies inside the outline
    pub fn contains(&self, point: Point) -> bool {
        let (Ok(row), Ok(col)) = (usize::try_from(point.y), usize::try_from(point.x)) else {
            return false;
        };
        self.cells.get([row, col]).copied().unwrap_or(false)
    }

    /// Number of inside pixels
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&inside| inside).count()
    }

    /// Test if no pixel is inside
    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&inside| inside)
    }

    /// All inside pixels in row-major order
    pub fn true_pixels(&self) -> Vec<Point> {
        self.cells
            .indexed_iter()
            .filter(|&(_, &inside)| inside)
            .map(|((row, col), _)| Point::new(col as i32, row as i32))
            .collect()
    }
}

// Sorted x positions where the horizontal line at `sample_y` crosses polygon edges.
// Edges are half-open in y so a vertex shared by two edges is counted once.
fn scanline_crossings(vertices: &[(f64, f64)], sample_y: f64, crossings: &mut Vec<f64>) {
    crossings.clear();

    let closing = vertices.first().into_iter();
    for (&(x1, y1), &(x2, y2)) in vertices.iter().zip(vertices.iter().skip(1).chain(closing)) {
        if (y1 <= sample_y) != (y2 <= sample_y) {
            let slope = (x2 - x1) / (y2 - y1);
            crossings.push((sample_y - y1).mul_add(slope, x1));
        }
    }

    crossings.sort_by(f64::total_cmp);
}
