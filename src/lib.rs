//! Content-aware image shrinking by repeated removal of minimum-energy seams
//!
//! Each pixel gets an energy from the colour gradient across it. A seam is a
//! connected path of one pixel per row (or per column) with the lowest total
//! energy; removing it narrows (or shortens) the image by one pixel while
//! leaving high-contrast content in place.

#![forbid(unsafe_code)]

/// Energy computation, seam search and the carver that shrinks a grid
pub mod algorithm;
/// Input/output operations, command line and error handling
pub mod io;
/// Pixel and grid storage
pub mod spatial;

pub use algorithm::carver::SeamCarver;
pub use algorithm::seam::{Orientation, Seam};
pub use io::error::{AlgorithmError, Result};
pub use spatial::{Pixel, PixelGrid};
