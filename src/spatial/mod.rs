//! Pixel storage for the carving algorithm
//!
//! This module contains:
//! - The RGB pixel value type
//! - The column-major grid that seam removal shrinks in place

/// Column-major pixel grid with in-place row and column removal
pub mod grid;
/// RGB pixel values
pub mod pixel;

pub use grid::PixelGrid;
pub use pixel::Pixel;
