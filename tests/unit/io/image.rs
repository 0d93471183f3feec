//! Tests for raster conversion and export

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use seamcarve::io::image::{
        energy_to_gray, export_energy_map, export_grid, grid_from_rgb, grid_to_rgb, load_image,
    };
    use seamcarve::{AlgorithmError, Pixel, PixelGrid};
    use tempfile::TempDir;

    // Tests image coordinates map to (column, row)
    // Verified by transposing during conversion
    #[test]
    fn test_grid_from_rgb_orientation() {
        let mut image = RgbImage::new(3, 2);
        image.put_pixel(2, 1, Rgb([10, 20, 30]));

        let grid = grid_from_rgb(&image);
        assert_eq!(grid.dimensions(), (3, 2));
        assert_eq!(grid.get(2, 1), Some(Pixel::new(10, 20, 30)));
        assert_eq!(grid.get(1, 0), Some(Pixel::default()));
    }

    // Tests channels above 255 saturate rather than wrap
    // Verified by casting with `as u8`
    #[test]
    fn test_grid_to_rgb_saturates() {
        let grid = PixelGrid::from_fn(2, 1, |col, _| {
            if col == 0 {
                Pixel::new(256, 255, 0)
            } else {
                Pixel::new(1000, 7, 300)
            }
        });

        let image = grid_to_rgb(&grid);
        assert_eq!(image.get_pixel(0, 0), &Rgb([255, 255, 0]));
        assert_eq!(image.get_pixel(1, 0), &Rgb([255, 7, 255]));
    }

    // Tests the energy map is scaled so the peak is white
    // Verified by writing raw energies
    #[test]
    fn test_energy_to_gray_scaling() {
        let grid = PixelGrid::from_fn(4, 1, |col, _| {
            if col == 0 {
                Pixel::new(255, 255, 255)
            } else {
                Pixel::default()
            }
        });

        let gray = energy_to_gray(&grid);
        assert_eq!(gray.dimensions(), (4, 1));
        let levels: Vec<u8> = gray.pixels().map(|p| p.0[0]).collect();
        assert!(levels.contains(&255));
        assert!(levels.contains(&0));
    }

    #[test]
    fn test_energy_to_gray_uniform_is_black() {
        let gray = energy_to_gray(&PixelGrid::filled(3, 3, Pixel::new(9, 9, 9)));
        assert!(gray.pixels().all(|p| p.0[0] == 0));
    }

    // Tests PNG export then import preserves 8-bit pixels
    // Verified by swapping channels on export
    #[test]
    fn test_png_round_trip() {
        let Ok(dir) = TempDir::new() else {
            return;
        };
        let path = dir.path().join("out/grid.png");
        let grid = PixelGrid::from_fn(3, 2, |col, row| {
            Pixel::new(col as u32 * 50, row as u32 * 100, 17)
        });

        assert!(export_grid(&grid, &path).is_ok());
        let loaded = load_image(&path);
        assert!(loaded.is_ok_and(|g| g == grid));
    }

    #[test]
    fn test_export_energy_map_writes_file() {
        let Ok(dir) = TempDir::new() else {
            return;
        };
        let path = dir.path().join("energy.png");
        let grid = PixelGrid::from_fn(3, 3, |col, row| Pixel::new(col as u32, row as u32, 0));

        assert!(export_energy_map(&grid, &path).is_ok());
        assert!(path.exists());
    }

    // Tests decode failures name the file
    // Verified by mapping through the <unknown> conversion
    #[test]
    fn test_load_image_missing() {
        let missing = std::path::Path::new("no/such/image.png");
        match load_image(missing) {
            Err(AlgorithmError::ImageLoad { path, .. }) => assert_eq!(path, missing),
            other => unreachable!("expected ImageLoad error, got {other:?}"),
        }
    }
}
