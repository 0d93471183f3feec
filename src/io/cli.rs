//! Command-line interface for carving text grids and raster images

use crate::algorithm::carver::SeamCarver;
use crate::io::configuration::{
    DEFAULT_HORIZONTAL_SEAMS, DEFAULT_VERTICAL_SEAMS, ENERGY_SUFFIX, OUTPUT_SUFFIX,
    TEXT_GRID_EXTENSIONS,
};
use crate::io::csv::{load_grid, save_grid};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{export_energy_map, export_grid, load_image};
use crate::io::progress::ProgressManager;
use crate::spatial::PixelGrid;
use clap::Parser;
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "seamcarve")]
#[command(
    author,
    version,
    about = "Shrink images by removing minimum-energy seams"
)]
/// Command-line arguments for the carving tool
pub struct Cli {
    /// Input grid (.csv/.txt) or raster image
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output path (defaults to <input>_carved with the same extension)
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Number of vertical seams (columns) to remove
    #[arg(short, long, default_value_t = DEFAULT_VERTICAL_SEAMS)]
    pub columns: usize,

    /// Number of horizontal seams (rows) to remove
    #[arg(short, long, default_value_t = DEFAULT_HORIZONTAL_SEAMS)]
    pub rows: usize,

    /// Target width in pixels (overrides --columns)
    #[arg(short = 'w', long)]
    pub width: Option<usize>,

    /// Target height in pixels (overrides --rows)
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Also write the energy map of the input as a grayscale PNG
    #[arg(short, long)]
    pub energy: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log load, carve and save summaries
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Where the carved result is written
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| suffixed_path(&self.input, OUTPUT_SUFFIX, None))
    }

    /// Where the energy map is written when `--energy` is set
    pub fn energy_path(&self) -> PathBuf {
        suffixed_path(&self.input, ENERGY_SUFFIX, Some("png"))
    }

    /// Dimensions to carve a `width` x `height` grid down to
    ///
    /// An explicit `--width`/`--height` wins over the matching seam count;
    /// an axis with neither keeps the default count.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if a target exceeds the current size or a
    /// count exceeds the seams available
    pub fn target_dimensions(&self, width: usize, height: usize) -> Result<(usize, usize)> {
        let target_width = match self.width {
            Some(w) if w > width => {
                return Err(invalid_parameter(
                    "width",
                    &w,
                    &format!("image is only {width} pixels wide"),
                ));
            }
            Some(w) => w,
            None => width.checked_sub(self.columns).ok_or_else(|| {
                invalid_parameter(
                    "columns",
                    &self.columns,
                    &format!(
                        "image has only {width} columns (default is {DEFAULT_VERTICAL_SEAMS}); \
                         lower --columns or set --width"
                    ),
                )
            })?,
        };

        let target_height = match self.height {
            Some(h) if h > height => {
                return Err(invalid_parameter(
                    "height",
                    &h,
                    &format!("image is only {height} pixels high"),
                ));
            }
            Some(h) => h,
            None => height.checked_sub(self.rows).ok_or_else(|| {
                invalid_parameter(
                    "rows",
                    &self.rows,
                    &format!(
                        "image has only {height} rows (default is {DEFAULT_HORIZONTAL_SEAMS}); \
                         lower --rows or set --height"
                    ),
                )
            })?,
        };

        Ok((target_width, target_height))
    }
}

/// True when `path` has a text grid extension
pub fn is_text_grid(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            TEXT_GRID_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

// <stem><suffix>.<extension>, next to `input`
fn suffixed_path(input: &Path, suffix: &str, extension: Option<&str>) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default();
    let extension = extension.map_or_else(
        || input.extension().unwrap_or_default().to_string_lossy(),
        std::borrow::Cow::from,
    );
    let name = if extension.is_empty() {
        format!("{}{suffix}", stem.to_string_lossy())
    } else {
        format!("{}{suffix}.{extension}", stem.to_string_lossy())
    };

    if let Some(parent) = input.parent() {
        parent.join(name)
    } else {
        PathBuf::from(name)
    }
}

/// Load `path` as a text grid or a raster image, depending on its extension
///
/// # Errors
///
/// Propagates loader errors
pub fn load_input(path: &Path) -> Result<PixelGrid> {
    if is_text_grid(path) {
        load_grid(path)
    } else {
        load_image(path)
    }
}

/// Save `grid` to `path` as a text grid or a raster image, depending on its extension
///
/// # Errors
///
/// Propagates writer errors
pub fn save_output(grid: &PixelGrid, path: &Path) -> Result<()> {
    if is_text_grid(path) {
        save_grid(grid, path)
    } else {
        export_grid(grid, path)
    }
}

/// Runs one carve from command-line arguments
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Load, carve and save according to the CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if loading, parameter validation, carving or saving fails
    pub fn process(&mut self) -> Result<PixelGrid> {
        let start_time = Instant::now();
        let grid = load_input(&self.cli.input)?;
        info!("image: {}x{}", grid.width(), grid.height());

        if self.cli.energy {
            export_energy_map(&grid, &self.cli.energy_path())?;
        }

        let (target_width, target_height) =
            self.cli.target_dimensions(grid.width(), grid.height())?;
        let total_seams = (grid.width() - target_width) + (grid.height() - target_height);
        if total_seams == 0 {
            warn!(
                "{} is already {target_width}x{target_height}, writing it unchanged",
                self.cli.input.display()
            );
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.start(&self.cli.input, total_seams);
        }

        let mut carver = SeamCarver::new(grid);
        let progress = &mut self.progress_manager;
        carver.carve_to(target_width, target_height, |_, grid| {
            if let Some(pm) = progress.as_mut() {
                pm.seam_removed(grid.width(), grid.height());
            }
        })?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        let output_path = self.cli.output_path();
        let grid = carver.into_grid();
        save_output(&grid, &output_path)?;

        info!(
            "carved to {}x{} in {:.2?}, written to {}",
            grid.width(),
            grid.height(),
            start_time.elapsed(),
            output_path.display()
        );
        Ok(grid)
    }
}
