//! Column-major pixel storage that shrinks in place
//!
//! The grid keeps one `Vec` per column so that removing an entry from a column
//! is a single `Vec::remove`, while removing a column is a `pop`. Every column
//! has the same length at all times.

use crate::io::error::{AlgorithmError, Result};
use crate::spatial::pixel::Pixel;

/// Rectangular two-dimensional array of pixels, stored column by column
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PixelGrid {
    columns: Vec<Vec<Pixel>>,
}

impl PixelGrid {
    /// Create an empty grid (width 0, height 0)
    pub const fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Build a grid from column vectors
    ///
    /// # Errors
    ///
    /// Returns `InvalidSourceData` if the columns differ in length
    pub fn from_columns(columns: Vec<Vec<Pixel>>) -> Result<Self> {
        let height = columns.first().map_or(0, Vec::len);
        if let Some((index, column)) = columns
            .iter()
            .enumerate()
            .find(|(_, column)| column.len() != height)
        {
            return Err(AlgorithmError::InvalidSourceData {
                reason: format!(
                    "column {index} has {} rows but column 0 has {height}",
                    column.len()
                ),
            });
        }
        Ok(Self { columns })
    }

    /// Build a `width` x `height` grid by evaluating `fill(col, row)` for every cell
    pub fn from_fn<F>(width: usize, height: usize, mut fill: F) -> Self
    where
        F: FnMut(usize, usize) -> Pixel,
    {
        let columns = (0..width)
            .map(|col| (0..height).map(|row| fill(col, row)).collect())
            .collect();
        Self { columns }
    }

    /// Build a `width` x `height` grid where every cell holds `pixel`
    pub fn filled(width: usize, height: usize, pixel: Pixel) -> Self {
        Self::from_fn(width, height, |_, _| pixel)
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows, 0 when the grid has no columns
    pub fn height(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// Current `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    /// True when the grid holds no pixels
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Pixel at `(col, row)`, or `None` outside the grid
    pub fn get(&self, col: usize, row: usize) -> Option<Pixel> {
        self.columns
            .get(col)
            .and_then(|column| column.get(row))
            .copied()
    }

    /// Mutable access to the pixel at `(col, row)`
    pub fn get_mut(&mut self, col: usize, row: usize) -> Option<&mut Pixel> {
        self.columns
            .get_mut(col)
            .and_then(|column| column.get_mut(row))
    }

    /// Pixel at `(col, row)`
    ///
    /// # Panics
    ///
    /// Panics if `col >= width()` or `row >= height()`
    pub fn pixel_at(&self, col: usize, row: usize) -> Pixel {
        assert!(
            col < self.width() && row < self.height(),
            "pixel ({col}, {row}) is outside a {}x{} grid",
            self.width(),
            self.height()
        );
        self.get(col, row).unwrap_or_default()
    }

    /// All columns, top to bottom within each
    pub fn columns(&self) -> &[Vec<Pixel>] {
        &self.columns
    }

    /// Iterate over `(col, row, pixel)` in column-major order
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize, Pixel)> + '_ {
        self.columns.iter().enumerate().flat_map(|(col, column)| {
            column
                .iter()
                .enumerate()
                .map(move |(row, pixel)| (col, row, *pixel))
        })
    }

    /// Delete entry `row` of column `col`, moving the entries below it up by one
    ///
    /// Only this column shrinks; callers restore rectangularity by removing one
    /// entry from every column. Returns the removed pixel.
    pub fn remove_column_entry(&mut self, col: usize, row: usize) -> Option<Pixel> {
        let column = self.columns.get_mut(col)?;
        (row < column.len()).then(|| column.remove(row))
    }

    /// Move pixels of `row` one column to the left, starting at `from_col`
    ///
    /// The last column keeps a stale copy of its old value in `row` until it is
    /// dropped by [`Self::remove_last_column`].
    pub fn shift_row_left(&mut self, row: usize, from_col: usize) {
        for col in from_col..self.width().saturating_sub(1) {
            if let Some(next) = self.get(col + 1, row) {
                if let Some(cell) = self.get_mut(col, row) {
                    *cell = next;
                }
            }
        }
    }

    /// Drop the trailing entry of every column
    ///
    /// Row-wise counterpart of [`PixelGrid::remove_last_column`] for callers
    /// that shift pixels themselves. The carver's removals use
    /// [`PixelGrid::shift_row_left`] and [`PixelGrid::remove_column_entry`].
    pub fn remove_last_row_from_all_columns(&mut self) {
        for column in &mut self.columns {
            column.pop();
        }
    }

    /// Drop the last column entirely
    pub fn remove_last_column(&mut self) -> Option<Vec<Pixel>> {
        self.columns.pop()
    }
}
