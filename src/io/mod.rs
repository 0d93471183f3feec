/// Command-line parsing and the file processing driver
pub mod cli;
/// Carving defaults and limits
pub mod configuration;
/// Whitespace-separated text grid reader and writer
pub mod csv;
/// Error type shared by the whole crate
pub mod error;
/// Raster image import and export
pub mod image;
/// Progress display while seams are removed
pub mod progress;
