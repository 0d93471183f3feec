//! Carving defaults and runtime limits

// Narrow by a fixed number of columns unless told otherwise
/// Vertical seams removed when neither a count nor a target width is given
pub const DEFAULT_VERTICAL_SEAMS: usize = 150;

/// Horizontal seams removed by default
pub const DEFAULT_HORIZONTAL_SEAMS: usize = 0;

// Safety limit to prevent excessive memory allocation from a bad header
/// Maximum width or height accepted by the text grid loader
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Output settings
/// Suffix added to carved output filenames
pub const OUTPUT_SUFFIX: &str = "_carved";
/// Suffix added to energy map filenames
pub const ENERGY_SUFFIX: &str = "_energy";

/// Extensions read as whitespace-separated text grids
pub const TEXT_GRID_EXTENSIONS: [&str; 2] = ["csv", "txt"];

// Progress bar display settings
/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
/// Log filter used with `--verbose`
pub const VERBOSE_LOG_FILTER: &str = "info";
