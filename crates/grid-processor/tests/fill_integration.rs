//! Integration tests comparing the feature transform and fill against
//! brute-force nearest-neighbour search on synthetic grids.

use grid_processor::{euclidean_feature_transform, fill, fill_grid, GridProcessorError};
use test_utils::{
    count_nans, create_temperature_grid, create_test_grid, decode_test_value, init_tracing,
    punch_hole, random_mask, with_random_nans,
};

/// Squared distance between two flat indices of a 2-D grid.
fn sq_dist_2d(a: usize, b: usize, width: usize) -> usize {
    let (ar, ac) = (a / width, a % width);
    let (br, bc) = (b / width, b % width);
    let dr = ar.abs_diff(br);
    let dc = ac.abs_diff(bc);
    dr * dr + dc * dc
}

/// Minimum squared distance from `cell` to any seed, by exhaustive search.
fn brute_force_min(mask: &[bool], width: usize, cell: usize) -> Option<usize> {
    mask.iter()
        .enumerate()
        .filter(|&(_, &bad)| !bad)
        .map(|(i, _)| sq_dist_2d(cell, i, width))
        .min()
}

// =============================================================================
// Feature transform vs brute force
// =============================================================================

#[test]
fn test_feature_transform_matches_brute_force() {
    init_tracing();

    for seed in 0..8u64 {
        let (width, height) = (23, 17);
        let mask = random_mask(width * height, 0.85, seed);
        if mask.iter().all(|&bad| bad) {
            continue;
        }

        let ft = euclidean_feature_transform(&mask, &[height, width]).unwrap();

        for cell in 0..mask.len() {
            let expected = brute_force_min(&mask, width, cell).unwrap();
            let nearest = ft.indices[cell].expect("every cell has a nearest seed");

            assert!(!mask[nearest], "nearest index {} is not a seed", nearest);
            assert_eq!(
                sq_dist_2d(cell, nearest, width),
                expected,
                "seed {} cell {}: feature is not a nearest seed",
                seed,
                cell
            );
            let d = ft.distances[cell];
            assert!(
                (d * d - expected as f64).abs() < 1e-9,
                "seed {} cell {}: distance {} vs brute force {}",
                seed,
                cell,
                d,
                (expected as f64).sqrt()
            );
        }
    }
}

#[test]
fn test_feature_transform_3d() {
    // 3x4x5 volume with a single seed at (2, 3, 4)
    let shape = [3, 4, 5];
    let mut mask = vec![true; 60];
    let seed = 2 * 20 + 3 * 5 + 4;
    mask[seed] = false;

    let ft = euclidean_feature_transform(&mask, &shape).unwrap();
    assert!(ft.indices.iter().all(|&i| i == Some(seed)));
    assert_eq!(ft.coords(seed), vec![2, 3, 4]);
    // Opposite corner (0, 0, 0)
    assert!((ft.distances[0] - (4.0f64 + 9.0 + 16.0).sqrt()).abs() < 1e-12);
}

// =============================================================================
// Fill properties
// =============================================================================

#[test]
fn test_fill_random_holes_properties() {
    init_tracing();

    let (width, height) = (40, 30);
    let original = create_test_grid(width, height);
    let holed = with_random_nans(&original, 0.4, 7);
    assert!(count_nans(&holed) > 0);

    let filled = fill_grid(&holed, width, height).unwrap();

    assert_eq!(filled.len(), holed.len());
    assert_eq!(count_nans(&filled), 0);

    let mask: Vec<bool> = holed.iter().map(|v| v.is_nan()).collect();
    for (cell, &value) in filled.iter().enumerate() {
        if !mask[cell] {
            assert_eq!(value, holed[cell], "valid cell {} changed", cell);
            continue;
        }
        // The fill value encodes its source cell, which must be a nearest seed
        let (col, row) = decode_test_value(value);
        let source = row * width + col;
        assert!(!mask[source]);
        assert_eq!(
            sq_dist_2d(cell, source, width),
            brute_force_min(&mask, width, cell).unwrap()
        );
    }
}

#[test]
fn test_fill_values_come_from_input() {
    let (width, height) = (25, 25);
    let mut data = create_temperature_grid(width, height);
    punch_hole(&mut data, width, 5, 5, 10, 8);
    punch_hole(&mut data, width, 18, 0, 7, 25);

    let filled = fill_grid(&data, width, height).unwrap();
    for value in &filled {
        assert!(
            data.iter().any(|v| v == value),
            "value {} was synthesized",
            value
        );
    }
}

#[test]
fn test_fill_is_idempotent() {
    let (width, height) = (16, 12);
    let holed = with_random_nans(&create_temperature_grid(width, height), 0.5, 99);

    let once = fill_grid(&holed, width, height).unwrap();
    let twice = fill_grid(&once, width, height).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_fill_single_valid_cell_floods_grid() {
    let mut data = vec![f32::NAN; 12];
    data[7] = 42.0;
    let filled = fill_grid(&data, 4, 3).unwrap();
    assert!(filled.iter().all(|&v| v == 42.0));
}

#[test]
fn test_fill_all_nan_fails() {
    let data = vec![f32::NAN; 9];
    assert_eq!(
        fill_grid(&data, 3, 3).unwrap_err(),
        GridProcessorError::NoValidCells(9)
    );
}

#[test]
fn test_fill_f64_nd() {
    let data = vec![f64::NAN, 1.0, f64::NAN, f64::NAN, f64::NAN, f64::NAN, f64::NAN, 8.0];
    let filled = fill(&data, &[2, 2, 2]).unwrap();
    assert_eq!(filled[1], 1.0);
    assert_eq!(filled[7], 8.0);
    // (0,0,0) is adjacent to (0,0,1) only
    assert_eq!(filled[0], 1.0);
    // (1,1,0) is adjacent to (1,1,1) only
    assert_eq!(filled[6], 8.0);
}
