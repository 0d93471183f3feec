//! Tests for dual-gradient energy with wraparound neighbours

#[cfg(test)]
mod tests {
    use seamcarve::algorithm::energy::{energy_at, energy_map};
    use seamcarve::{Pixel, PixelGrid};

    fn scenario_grid() -> PixelGrid {
        let columns = [
            [(186, 73, 178), (50, 93, 116), (252, 102, 248)],
            [(237, 102, 135), (64, 174, 101), (247, 9, 24)],
            [(153, 109, 248), (148, 123, 173), (31, 158, 239)],
            [(125, 81, 34), (179, 100, 40), (59, 156, 206)],
            [(252, 199, 253), (38, 117, 54), (220, 120, 156)],
        ];
        PixelGrid::from_fn(5, 3, |col, row| {
            let (r, g, b) = columns
                .get(col)
                .and_then(|c| c.get(row))
                .copied()
                .unwrap_or_default();
            Pixel::new(r, g, b)
        })
    }

    // Squared energies of the 5x3 scenario, indexed [row][col]
    const SCENARIO_SQUARED: [[u32; 5]; 3] = [
        [81_867, 73_928, 42_456, 63_018, 68_058],
        [16_231, 34_823, 39_788, 65_862, 39_140],
        [53_214, 88_327, 95_923, 47_367, 134_050],
    ];

    // Tests every pixel of the scenario against hand-computed gradients
    // Verified by clamping instead of wrapping at the borders
    #[test]
    fn test_scenario_energies() {
        let grid = scenario_grid();
        for (row, expected_row) in SCENARIO_SQUARED.iter().enumerate() {
            for (col, &squared) in expected_row.iter().enumerate() {
                let energy = energy_at(&grid, col, row);
                let expected = f64::from(squared).sqrt();
                assert!(
                    (energy - expected).abs() < 1e-9,
                    "energy at ({col}, {row}) was {energy}, expected {expected}"
                );
            }
        }
    }

    // Tests a uniform image has zero energy everywhere
    // Verified by adding the centre pixel into the gradient
    #[test]
    fn test_uniform_image_has_zero_energy() {
        let grid = PixelGrid::filled(4, 6, Pixel::new(90, 180, 45));
        assert!(energy_map(&grid).iter().all(|&e| e == 0.0));
    }

    // Tests full-range u32 channels produce finite energy
    // Verified by squaring channel differences in i64
    #[test]
    fn test_full_range_channels() {
        let grid = PixelGrid::from_fn(3, 1, |col, _| {
            if col == 1 {
                Pixel::new(u32::MAX, u32::MAX, u32::MAX)
            } else {
                Pixel::default()
            }
        });

        let expected = 3.0_f64.sqrt() * f64::from(u32::MAX);
        let energy = energy_at(&grid, 0, 0);
        assert!(energy.is_finite());
        assert!((energy - expected).abs() <= expected * 1e-12);
        assert!(energy_at(&grid, 1, 0) == 0.0);
        assert!((energy_at(&grid, 2, 0) - expected).abs() <= expected * 1e-12);
    }

    // Tests coordinates outside the grid have zero energy
    // Verified by wrapping out-of-range coordinates
    #[test]
    fn test_out_of_range_energy_is_zero() {
        let grid = scenario_grid();
        assert!(energy_at(&grid, 5, 0) == 0.0);
        assert!(energy_at(&grid, 0, 3) == 0.0);
        assert!(energy_at(&PixelGrid::new(), 0, 0) == 0.0);
    }

    // Tests left neighbour of column 0 is the last column
    // Verified by using the pixel itself as its missing neighbour
    #[test]
    fn test_horizontal_wraparound() {
        // Single row: vertical neighbours are the pixel itself
        let grid = PixelGrid::from_fn(3, 1, |col, _| Pixel::new([0, 10, 40][col % 3], 0, 0));
        // col 0: right = 10, left wraps to 40
        assert!((energy_at(&grid, 0, 0) - 30.0).abs() < 1e-12);
        // col 2: right wraps to 0, left = 10
        assert!((energy_at(&grid, 2, 0) - 10.0).abs() < 1e-12);
    }

    // Tests up neighbour of row 0 is the last row
    // Verified by swapping the up and down lookups at the border
    #[test]
    fn test_vertical_wraparound() {
        let grid = PixelGrid::from_fn(1, 3, |_, row| Pixel::new(0, [5, 8, 20][row % 3], 0));
        assert!((energy_at(&grid, 0, 0) - 12.0).abs() < 1e-12);
        assert!((energy_at(&grid, 0, 2) - 3.0).abs() < 1e-12);
    }

    // Tests a 1x1 grid is its own neighbour on every side
    #[test]
    fn test_single_pixel_energy() {
        let grid = PixelGrid::filled(1, 1, Pixel::new(255, 0, 17));
        assert!(energy_at(&grid, 0, 0) == 0.0);
    }

    // Tests map layout is [row, col]
    // Verified by building the map with (width, height) shape
    #[test]
    fn test_energy_map_layout() {
        let grid = scenario_grid();
        let map = energy_map(&grid);
        assert_eq!(map.dim(), (3, 5));
        let value = map.get([2, 4]).copied().unwrap_or_default();
        assert!((value - f64::from(134_050_u32).sqrt()).abs() < 1e-9);
    }

    // Tests rotating the columns cyclically only permutes the energies
    // Verified by clamping at the left border
    #[test]
    fn test_cyclic_column_shift_preserves_energy_multiset() {
        let grid = scenario_grid();
        let shifted = PixelGrid::from_fn(5, 3, |col, row| grid.pixel_at((col + 1) % 5, row));

        let mut original: Vec<f64> = energy_map(&grid).iter().copied().collect();
        let mut rotated: Vec<f64> = energy_map(&shifted).iter().copied().collect();
        original.sort_by(f64::total_cmp);
        rotated.sort_by(f64::total_cmp);

        assert_eq!(original, rotated);
    }
}
