//! Test data generators for grid-filling tests.
//!
//! These generators create predictable, verifiable patterns, optionally
//! punched with NaN holes, that can be used across the test suite.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a test grid with predictable values.
///
/// Each cell value is calculated as: `col * 1000 + row`
///
/// This makes it easy to verify where a filled value came from by checking
/// that the value decodes to the source (col, row).
///
/// # Arguments
///
/// * `width` - Number of columns
/// * `height` - Number of rows
///
/// # Returns
///
/// A `Vec<f32>` in row-major order (row 0 first, then row 1, etc.)
///
/// # Example
///
/// ```
/// use test_utils::create_test_grid;
///
/// let grid = create_test_grid(10, 5);
/// assert_eq!(grid.len(), 50); // 10 * 5
/// assert_eq!(grid[0], 0.0);   // col=0, row=0 -> 0*1000 + 0
/// assert_eq!(grid[1], 1000.0); // col=1, row=0 -> 1*1000 + 0
/// assert_eq!(grid[10], 1.0);  // col=0, row=1 -> 0*1000 + 1
/// ```
pub fn create_test_grid(width: usize, height: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            data.push((col * 1000 + row) as f32);
        }
    }
    data
}

/// Decode a value produced by [`create_test_grid`] back into (col, row).
pub fn decode_test_value(value: f32) -> (usize, usize) {
    let v = value as usize;
    (v / 1000, v % 1000)
}

/// Creates a test grid with temperature-like values in Kelvin.
///
/// The values range from approximately 250K to 310K with a diagonal
/// gradient, similar to a real surface temperature field.
pub fn create_temperature_grid(width: usize, height: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let x_factor = col as f32 / width.max(1) as f32;
            let y_factor = row as f32 / height.max(1) as f32;
            data.push(250.0 + (x_factor * 30.0) + (y_factor * 30.0));
        }
    }
    data
}

/// Set a rectangular block of cells to NaN (a cloud or swath gap).
///
/// The block is clipped to the grid.
pub fn punch_hole(
    data: &mut [f32],
    width: usize,
    col: usize,
    row: usize,
    hole_width: usize,
    hole_height: usize,
) {
    let height = if width == 0 { 0 } else { data.len() / width };
    for r in row..(row + hole_height).min(height) {
        for c in col..(col + hole_width).min(width) {
            data[r * width + c] = f32::NAN;
        }
    }
}

/// Replace roughly `fraction` of the cells with NaN using a seeded RNG.
///
/// The same seed always produces the same mask.
pub fn with_random_nans(data: &[f32], fraction: f64, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    data.iter()
        .map(|&v| if rng.random_bool(fraction) { f32::NAN } else { v })
        .collect()
}

/// Random invalidity mask with roughly `fraction` of cells set.
pub fn random_mask(len: usize, fraction: f64, seed: u64) -> Vec<bool> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_bool(fraction)).collect()
}

/// Count NaN cells.
pub fn count_nans(data: &[f32]) -> usize {
    data.iter().filter(|v| v.is_nan()).count()
}
