//! Error types for grid loading, seam validation and export

use std::fmt;
use std::path::PathBuf;

use crate::algorithm::seam::Orientation;

/// Main error type for all carving operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// Failed to decode a raster image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to save a raster image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Text grid could not be parsed
    Parse {
        /// 1-based line where parsing stopped
        line: usize,
        /// Description of what was expected
        reason: String,
    },

    /// Source data doesn't form a valid rectangular grid
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// Seam length doesn't match the grid dimension it spans
    InvalidSeam {
        /// Orientation of the rejected seam
        orientation: Orientation,
        /// Required number of entries
        expected: usize,
        /// Number of entries supplied
        actual: usize,
    },

    /// Seam entry points outside the grid
    SeamOutOfRange {
        /// Orientation of the rejected seam
        orientation: Orientation,
        /// Position of the offending entry within the seam
        layer: usize,
        /// The offending index
        index: usize,
        /// Exclusive upper bound for indices
        limit: usize,
    },

    /// Seam search on a grid with nothing to choose from
    DegenerateGrid {
        /// Operation that was attempted
        operation: &'static str,
        /// Grid width at the time
        width: usize,
        /// Grid height at the time
        height: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Parse { line, reason } => {
                write!(f, "Parse error on line {line}: {reason}")
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::InvalidSeam {
                orientation,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{orientation} seam has {actual} entries but the grid needs {expected}"
                )
            }
            Self::SeamOutOfRange {
                orientation,
                layer,
                index,
                limit,
            } => {
                write!(
                    f,
                    "{orientation} seam entry {layer} is {index}, outside 0..{limit}"
                )
            }
            Self::DegenerateGrid {
                operation,
                width,
                height,
            } => {
                write!(f, "Cannot {operation} on a {width}x{height} grid")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for carving results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

impl From<std::io::Error> for AlgorithmError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
