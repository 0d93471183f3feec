//! Raster import and export through the `image` crate

use std::path::Path;

use image::{DynamicImage, GrayImage, ImageBuffer, Luma, Rgb, RgbImage};
use log::info;
use num_traits::{ToPrimitive, clamp};

use crate::algorithm::energy::energy_map;
use crate::io::error::{AlgorithmError, Result};
use crate::spatial::{Pixel, PixelGrid};

/// Convert an RGB image into a pixel grid
pub fn grid_from_rgb(image: &RgbImage) -> PixelGrid {
    let (width, height) = image.dimensions();
    PixelGrid::from_fn(width as usize, height as usize, |col, row| {
        image
            .get_pixel_checked(col as u32, row as u32)
            .map_or_else(Pixel::default, |rgb| Pixel::from(*rgb))
    })
}

/// Decode any format supported by `image` into a pixel grid
///
/// # Errors
///
/// Returns `ImageLoad` naming `path` if the file can't be opened or decoded
pub fn load_image(path: &Path) -> Result<PixelGrid> {
    let image = image::open(path).map_err(|e| AlgorithmError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    let grid = grid_from_rgb(&image.to_rgb8());
    info!(
        "decoded {}x{} image from {}",
        grid.width(),
        grid.height(),
        path.display()
    );
    Ok(grid)
}

// Raster output has 8-bit channels; wider values saturate
fn to_channel(value: u32) -> u8 {
    u8::try_from(value).unwrap_or(u8::MAX)
}

/// Render a pixel grid as an RGB image
pub fn grid_to_rgb(grid: &PixelGrid) -> RgbImage {
    let mut image: RgbImage = ImageBuffer::new(grid.width() as u32, grid.height() as u32);
    for (col, row, pixel) in grid.pixels() {
        let [red, green, blue] = pixel.channels().map(to_channel);
        image.put_pixel(col as u32, row as u32, Rgb([red, green, blue]));
    }
    image
}

/// Render the energy of every pixel as grayscale, brightest at the maximum
///
/// A grid whose energy is zero everywhere renders black.
pub fn energy_to_gray(grid: &PixelGrid) -> GrayImage {
    let energies = energy_map(grid);
    let peak = energies.iter().copied().fold(0.0_f64, f64::max);

    let (height, width) = energies.dim();
    let mut image: GrayImage = ImageBuffer::new(width as u32, height as u32);
    for ((row, col), &energy) in energies.indexed_iter() {
        let scaled = if peak > 0.0 {
            clamp(energy / peak * 255.0, 0.0, 255.0)
        } else {
            0.0
        };
        let level = scaled.round().to_u8().unwrap_or(u8::MAX);
        image.put_pixel(col as u32, row as u32, Luma([level]));
    }
    image
}

fn save_raster(image: &DynamicImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image.save(path).map_err(|e| AlgorithmError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Save `grid` as an image, format chosen by the extension of `path`
///
/// # Errors
///
/// Returns:
/// - `FileSystem` if the parent directory cannot be created
/// - `ImageExport` if the image cannot be encoded or written, including an
///   empty grid
pub fn export_grid(grid: &PixelGrid, path: &Path) -> Result<()> {
    save_raster(&DynamicImage::ImageRgb8(grid_to_rgb(grid)), path)?;
    info!(
        "wrote {}x{} image to {}",
        grid.width(),
        grid.height(),
        path.display()
    );
    Ok(())
}

/// Save the energy map of `grid` as a grayscale image
///
/// # Errors
///
/// Same as [`export_grid`]
pub fn export_energy_map(grid: &PixelGrid, path: &Path) -> Result<()> {
    save_raster(&DynamicImage::ImageLuma8(energy_to_gray(grid)), path)?;
    info!("wrote energy map to {}", path.display());
    Ok(())
}
