//! Nearest-valid filling of NaN cells.
//!
//! Every NaN cell takes the value of the nearest non-NaN cell by Euclidean
//! distance in index space. Values are copied, never interpolated, so the
//! output only contains values already present in the input.

use num_traits::Float;
use tracing::{debug, warn};

use crate::config::FillConfig;
use crate::edt::euclidean_feature_transform;
use crate::error::{GridProcessorError, Result};

/// Summary of a fill operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillStats {
    /// Number of NaN cells that received a value
    pub filled: usize,
    /// NaN cells left untouched (beyond `max_distance`)
    pub skipped: usize,
    /// Total number of cells
    pub total: usize,
}

/// Replace every NaN in `data` with the value of its nearest valid cell.
///
/// `data` is row-major with the given `shape` (any rank). The input is not
/// modified.
///
/// # Errors
/// * `ShapeMismatch` if `data.len()` is not the product of `shape`
/// * `NoValidCells` if the grid is non-empty and entirely NaN
pub fn fill<T: Float>(data: &[T], shape: &[usize]) -> Result<Vec<T>> {
    fill_with(data, shape, &FillConfig::default())
}

/// [`fill`] with explicit configuration.
pub fn fill_with<T: Float>(data: &[T], shape: &[usize], config: &FillConfig) -> Result<Vec<T>> {
    fill_with_stats(data, shape, config).map(|(filled, _)| filled)
}

/// [`fill_with`], also returning how many cells were filled.
pub fn fill_with_stats<T: Float>(
    data: &[T],
    shape: &[usize],
    config: &FillConfig,
) -> Result<(Vec<T>, FillStats)> {
    config.validate().map_err(GridProcessorError::config_error)?;

    let total: usize = shape.iter().product();
    if data.len() != total {
        return Err(GridProcessorError::shape_mismatch(shape, data.len()));
    }

    let invalid: Vec<bool> = data.iter().map(|v| v.is_nan()).collect();
    let missing = invalid.iter().filter(|&&bad| bad).count();

    if missing == 0 {
        debug!(cells = total, "no invalid cells, nothing to fill");
        return Ok((
            data.to_vec(),
            FillStats {
                total,
                ..Default::default()
            },
        ));
    }

    if missing == total {
        warn!(cells = total, ?shape, "cannot fill grid: every cell is NaN");
        return Err(GridProcessorError::NoValidCells(total));
    }

    let ft = euclidean_feature_transform(&invalid, shape)?;

    let mut stats = FillStats {
        total,
        ..Default::default()
    };
    let mut output = Vec::with_capacity(total);
    for (i, &value) in data.iter().enumerate() {
        if !invalid[i] {
            output.push(value);
            continue;
        }

        let within_reach = config
            .max_distance
            .map_or(true, |max| ft.distances[i] <= max);

        match ft.indices[i] {
            Some(source) if within_reach => {
                output.push(data[source]);
                stats.filled += 1;
            }
            _ => {
                output.push(value);
                stats.skipped += 1;
            }
        }
    }

    debug!(
        cells = total,
        filled = stats.filled,
        skipped = stats.skipped,
        "filled invalid cells from nearest valid neighbours"
    );

    Ok((output, stats))
}

/// Fill a 2-D row-major grid of `width` columns and `height` rows.
pub fn fill_grid(data: &[f32], width: usize, height: usize) -> Result<Vec<f32>> {
    fill(data, &[height, width])
}
