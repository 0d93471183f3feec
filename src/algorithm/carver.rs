//! Seam carver owning the grid it shrinks
//!
//! The carver recomputes energy from the current grid on every search, so a
//! loop of find/remove calls always works on the image left by the previous
//! removal.

use log::debug;
use ndarray::Array2;

use crate::algorithm::energy::{energy_at, energy_map};
use crate::algorithm::seam::{Orientation, Seam, check_seam, find_seam};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::PixelGrid;

/// Content-aware shrinker for a single image
#[derive(Debug, Clone)]
pub struct SeamCarver {
    grid: PixelGrid,
}

impl SeamCarver {
    /// Take ownership of `grid` for carving
    pub const fn new(grid: PixelGrid) -> Self {
        Self { grid }
    }

    /// Current number of columns
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Current number of rows
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Read-only view of the grid in its current state
    pub const fn current_grid(&self) -> &PixelGrid {
        &self.grid
    }

    /// Give the carved grid back
    pub fn into_grid(self) -> PixelGrid {
        self.grid
    }

    /// Energy of the pixel at `(col, row)`, 0 outside the grid
    pub fn pixel_energy_at(&self, col: usize, row: usize) -> f64 {
        energy_at(&self.grid, col, row)
    }

    /// Energy of every pixel, indexed `[row, col]`
    pub fn energy_map(&self) -> Array2<f64> {
        energy_map(&self.grid)
    }

    /// Cheapest top-to-bottom seam: one column index per row
    ///
    /// # Errors
    ///
    /// Returns `DegenerateGrid` if the grid is empty (no columns, or columns of
    /// height 0)
    pub fn find_vertical_seam(&self) -> Result<Seam> {
        find_seam(&self.grid, Orientation::Vertical)
    }

    /// Cheapest left-to-right seam: one row index per column
    ///
    /// # Errors
    ///
    /// Returns `DegenerateGrid` if the grid is empty
    pub fn find_horizontal_seam(&self) -> Result<Seam> {
        find_seam(&self.grid, Orientation::Horizontal)
    }

    /// Remove one pixel per row, narrowing the grid by one column
    ///
    /// Pixels right of the seam move one column left.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSeam` if `seam.len() != height()` and `SeamOutOfRange`
    /// if an entry is not a valid column. The grid is untouched on error.
    pub fn remove_vertical_seam(&mut self, seam: &[usize]) -> Result<()> {
        check_seam(&self.grid, seam, Orientation::Vertical)?;

        for (row, &col) in seam.iter().enumerate() {
            self.grid.shift_row_left(row, col);
        }
        self.grid.remove_last_column();
        Ok(())
    }

    /// Remove one pixel per column, shortening the grid by one row
    ///
    /// Pixels below the seam move one row up.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSeam` if `seam.len() != width()` and `SeamOutOfRange`
    /// if an entry is not a valid row. The grid is untouched on error.
    pub fn remove_horizontal_seam(&mut self, seam: &[usize]) -> Result<()> {
        check_seam(&self.grid, seam, Orientation::Horizontal)?;

        for (col, &row) in seam.iter().enumerate() {
            self.grid.remove_column_entry(col, row);
        }
        Ok(())
    }

    /// Find and remove the cheapest seam in one orientation
    ///
    /// # Errors
    ///
    /// Propagates search and removal errors
    pub fn carve_once(&mut self, orientation: Orientation) -> Result<Seam> {
        let seam = find_seam(&self.grid, orientation)?;
        match orientation {
            Orientation::Vertical => self.remove_vertical_seam(&seam)?,
            Orientation::Horizontal => self.remove_horizontal_seam(&seam)?,
        }
        debug!(
            "removed {orientation} seam: width = {}, height = {}",
            self.width(),
            self.height()
        );
        Ok(seam)
    }

    /// Remove `count` seams of one orientation, calling `on_seam` after each
    ///
    /// The callback receives the orientation and the grid left by the removal.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `count` exceeds the number of columns
    /// (vertical) or rows (horizontal) left to remove
    pub fn remove_seams<F>(
        &mut self,
        orientation: Orientation,
        count: usize,
        mut on_seam: F,
    ) -> Result<()>
    where
        F: FnMut(Orientation, &PixelGrid),
    {
        let available = match orientation {
            Orientation::Vertical => self.width(),
            Orientation::Horizontal => self.height(),
        };
        if count > available {
            return Err(invalid_parameter(
                "count",
                &count,
                &format!("only {available} {orientation} seams can be removed"),
            ));
        }

        for _ in 0..count {
            self.carve_once(orientation)?;
            on_seam(orientation, &self.grid);
        }
        Ok(())
    }

    /// Shrink the grid to `target_width` x `target_height`
    ///
    /// While both dimensions are too large, vertical and horizontal seams are
    /// removed alternately (vertical first); the remaining axis is then
    /// finished on its own. The last row is kept until every column due for
    /// removal is gone, since a zero-height grid has no vertical seams.
    /// `on_seam` runs after every removal.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either target exceeds the current size,
    /// since seams can only be removed
    pub fn carve_to<F>(
        &mut self,
        target_width: usize,
        target_height: usize,
        mut on_seam: F,
    ) -> Result<()>
    where
        F: FnMut(Orientation, &PixelGrid),
    {
        if target_width > self.width() {
            return Err(invalid_parameter(
                "width",
                &target_width,
                &format!("cannot enlarge from {} columns", self.width()),
            ));
        }
        if target_height > self.height() {
            return Err(invalid_parameter(
                "height",
                &target_height,
                &format!("cannot enlarge from {} rows", self.height()),
            ));
        }

        let mut orientation = Orientation::Vertical;
        while self.width() > target_width && self.height() > target_height.max(1) {
            self.carve_once(orientation)?;
            on_seam(orientation, &self.grid);
            orientation = orientation.turn();
        }

        // A grid without columns reports height 0, so either count may already be 0
        let columns_left = self.width().saturating_sub(target_width);
        self.remove_seams(Orientation::Vertical, columns_left, &mut on_seam)?;
        let rows_left = self.height().saturating_sub(target_height);
        self.remove_seams(Orientation::Horizontal, rows_left, &mut on_seam)
    }
}

impl From<PixelGrid> for SeamCarver {
    fn from(grid: PixelGrid) -> Self {
        Self::new(grid)
    }
}
