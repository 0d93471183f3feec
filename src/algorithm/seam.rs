//! Minimum-energy seam search by dynamic programming
//!
//! Both orientations run the same search. A seam is built layer by layer
//! along the *primary* axis (rows for a vertical seam, columns for a
//! horizontal one); each layer picks one *position* on the secondary axis.
//! [`Orientation`] maps `(layer, position)` back to grid `(col, row)`.

use std::fmt;

use ndarray::{Array2, ArrayView1};

use crate::algorithm::energy::energy_at;
use crate::io::error::{AlgorithmError, Result};
use crate::spatial::PixelGrid;

/// Indices of the pixels a seam passes through, one per layer
///
/// A vertical seam holds a column index for every row; a horizontal seam
/// holds a row index for every column.
pub type Seam = Vec<usize>;

/// Direction a seam runs across the image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Top to bottom, one column index per row; removal narrows the image
    Vertical,
    /// Left to right, one row index per column; removal shortens the image
    Horizontal,
}

impl Orientation {
    /// The other orientation
    pub const fn turn(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }

    /// `(layers, positions per layer)` for a `width` x `height` grid
    pub const fn axis_lengths(self, width: usize, height: usize) -> (usize, usize) {
        match self {
            Self::Vertical => (height, width),
            Self::Horizontal => (width, height),
        }
    }

    /// Grid `(col, row)` of `position` within `layer`
    pub const fn to_grid(self, layer: usize, position: usize) -> (usize, usize) {
        match self {
            Self::Vertical => (position, layer),
            Self::Horizontal => (layer, position),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertical => write!(f, "vertical"),
            Self::Horizontal => write!(f, "horizontal"),
        }
    }
}

// Same position wins ties, then the lower neighbour, then the higher one
fn cheapest_parent(previous: ArrayView1<'_, f64>, position: usize) -> (usize, f64) {
    let cost_of = |index: usize| previous.get(index).copied().unwrap_or(f64::INFINITY);

    let mut best = (position, cost_of(position));
    if position > 0 && cost_of(position - 1) < best.1 {
        best = (position - 1, cost_of(position - 1));
    }
    if position + 1 < previous.len() && cost_of(position + 1) < best.1 {
        best = (position + 1, cost_of(position + 1));
    }
    best
}

/// Cheapest 8-connected path through a `layers` x `positions` energy field
///
/// `energy(layer, position)` is evaluated once per cell. The returned path has
/// one position per layer, in layer order, and consecutive positions differ by
/// at most 1. On equal totals the lowest final position wins.
///
/// Returns an empty path when `layers` is 0, and `None` when there are layers
/// but no positions to choose from.
pub fn minimum_path<F>(layers: usize, positions: usize, energy: F) -> Option<Vec<usize>>
where
    F: Fn(usize, usize) -> f64,
{
    if layers == 0 {
        return Some(Vec::new());
    }
    if positions == 0 {
        return None;
    }

    // cost[[l, p]]: cheapest total from layer 0 to (l, p)
    // backpointer[[l, p]]: position in layer l - 1 that achieves it
    let mut cost = Array2::<f64>::zeros((layers, positions));
    let mut backpointer = Array2::<usize>::zeros((layers, positions));

    for (position, cell) in cost.row_mut(0).iter_mut().enumerate() {
        *cell = energy(0, position);
    }

    for layer in 1..layers {
        for position in 0..positions {
            let (parent, parent_cost) = cheapest_parent(cost.row(layer - 1), position);
            if let Some(cell) = cost.get_mut([layer, position]) {
                *cell = parent_cost + energy(layer, position);
            }
            if let Some(cell) = backpointer.get_mut([layer, position]) {
                *cell = parent;
            }
        }
    }

    let mut position = cost
        .row(layers - 1)
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.total_cmp(b.1))
        .map_or(0, |(index, _)| index);

    let mut path = Vec::with_capacity(layers);
    for layer in (0..layers).rev() {
        path.push(position);
        position = backpointer
            .get([layer, position])
            .copied()
            .unwrap_or(position);
    }
    path.reverse();
    Some(path)
}

/// Find the minimum-energy seam of `grid` in the given orientation
///
/// # Errors
///
/// Returns `DegenerateGrid` if the grid holds no pixels, in either
/// orientation: a zero-height grid has no pixel to put in a vertical seam and
/// no row to remove with a horizontal one
pub fn find_seam(grid: &PixelGrid, orientation: Orientation) -> Result<Seam> {
    let (width, height) = grid.dimensions();
    let degenerate = || AlgorithmError::DegenerateGrid {
        operation: match orientation {
            Orientation::Vertical => "find a vertical seam",
            Orientation::Horizontal => "find a horizontal seam",
        },
        width,
        height,
    };
    if grid.is_empty() {
        return Err(degenerate());
    }

    let (layers, positions) = orientation.axis_lengths(width, height);
    minimum_path(layers, positions, |layer, position| {
        let (col, row) = orientation.to_grid(layer, position);
        energy_at(grid, col, row)
    })
    .ok_or_else(degenerate)
}

/// Check that `seam` can be removed from `grid` in the given orientation
///
/// Only length and index range are checked; connectivity is the caller's
/// responsibility.
///
/// # Errors
///
/// Returns `InvalidSeam` on a length mismatch and `SeamOutOfRange` for the
/// first index that lies outside the grid
pub fn check_seam(grid: &PixelGrid, seam: &[usize], orientation: Orientation) -> Result<()> {
    let (layers, positions) = orientation.axis_lengths(grid.width(), grid.height());

    if seam.len() != layers {
        return Err(AlgorithmError::InvalidSeam {
            orientation,
            expected: layers,
            actual: seam.len(),
        });
    }

    if let Some((layer, &index)) = seam
        .iter()
        .enumerate()
        .find(|(_, index)| **index >= positions)
    {
        return Err(AlgorithmError::SeamOutOfRange {
            orientation,
            layer,
            index,
            limit: positions,
        });
    }

    Ok(())
}

/// Total energy of the pixels `seam` passes through
pub fn seam_cost(grid: &PixelGrid, seam: &[usize], orientation: Orientation) -> f64 {
    seam.iter()
        .enumerate()
        .map(|(layer, &position)| {
            let (col, row) = orientation.to_grid(layer, position);
            energy_at(grid, col, row)
        })
        .sum()
}

/// True when consecutive entries differ by at most 1
pub fn is_connected(seam: &[usize]) -> bool {
    seam.windows(2).all(|pair| match pair {
        [a, b] => a.abs_diff(*b) <= 1,
        _ => true,
    })
}
