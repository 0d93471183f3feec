//! Dual-gradient pixel energy with wraparound neighbours
//!
//! Energy is the magnitude of the colour gradient across a pixel:
//!
//! ```text
//! e(x, y) = sqrt(|right - left|^2 + |down - up|^2)
//! ```
//!
//! where each `|a - b|^2` sums the squared red, green and blue differences.
//! Neighbours past an edge wrap to the opposite edge, so border pixels need no
//! special handling.

use ndarray::Array2;

use crate::spatial::{Pixel, PixelGrid};

/// The four neighbours used for one energy evaluation
struct Neighbours {
    left: Pixel,
    right: Pixel,
    up: Pixel,
    down: Pixel,
}

// Only called with in-range coordinates on a non-empty grid
fn toroidal_neighbours(grid: &PixelGrid, col: usize, row: usize) -> Neighbours {
    let (width, height) = grid.dimensions();

    let right_col = if col + 1 < width { col + 1 } else { 0 };
    let left_col = if col > 0 { col - 1 } else { width - 1 };
    let down_row = if row + 1 < height { row + 1 } else { 0 };
    let up_row = if row > 0 { row - 1 } else { height - 1 };

    Neighbours {
        left: grid.pixel_at(left_col, row),
        right: grid.pixel_at(right_col, row),
        up: grid.pixel_at(col, up_row),
        down: grid.pixel_at(col, down_row),
    }
}

/// Energy of the pixel at `(col, row)`
///
/// Coordinates outside the grid, including any coordinate on an empty grid,
/// have energy 0.
pub fn energy_at(grid: &PixelGrid, col: usize, row: usize) -> f64 {
    if col >= grid.width() || row >= grid.height() {
        return 0.0;
    }

    let n = toroidal_neighbours(grid, col, row);
    let gradient = n.right.squared_difference(&n.left) + n.down.squared_difference(&n.up);
    (gradient as f64).sqrt()
}

/// Energy of every pixel, indexed `[row, col]`
pub fn energy_map(grid: &PixelGrid) -> Array2<f64> {
    let (width, height) = grid.dimensions();
    Array2::from_shape_fn((height, width), |(row, col)| energy_at(grid, col, row))
}
