//! Exact Euclidean feature transform.
//!
//! For every cell of an N-dimensional row-major grid this finds the nearest
//! "seed" cell (a cell whose mask entry is `false`) and the Euclidean
//! distance to it, measured in cell units.
//!
//! The transform is separable: squared Euclidean distance is a sum of
//! per-axis terms, so one pass per axis is enough. Each pass computes the
//! lower envelope of the parabolas `(x - i)² + g(i)` along a 1-D line,
//! where `g` is the squared distance accumulated over the axes already
//! processed, and carries the index of the seed that owns each cell.
//!
//! Reference: P. Felzenszwalb and D. Huttenlocher, "Distance Transforms of
//! Sampled Functions", Theory of Computing 8, 2012.
//!
//! Ties resolve toward the lower index along each axis.

use crate::error::{GridProcessorError, Result};

/// Nearest-seed indices and distances for every cell of a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureTransform {
    shape: Vec<usize>,
    /// Flat index of the nearest seed cell, `None` when the grid has no seeds.
    pub indices: Vec<Option<usize>>,
    /// Euclidean distance to the nearest seed (0 for seeds, infinite when
    /// the grid has no seeds).
    pub distances: Vec<f64>,
}

impl FeatureTransform {
    /// Shape of the transformed grid.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// True for a grid with a zero-length axis.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Convert a flat row-major index into per-axis coordinates.
    pub fn coords(&self, flat: usize) -> Vec<usize> {
        let mut coords = vec![0; self.shape.len()];
        let mut rem = flat;
        for (axis, &dim) in self.shape.iter().enumerate().rev() {
            if dim == 0 {
                continue;
            }
            coords[axis] = rem % dim;
            rem /= dim;
        }
        coords
    }
}

/// Compute the exact Euclidean feature transform of `invalid`.
///
/// Cells where `invalid[i]` is `false` are seeds. The mask is row-major
/// with the given `shape`; an empty shape is treated as a single cell.
pub fn euclidean_feature_transform(invalid: &[bool], shape: &[usize]) -> Result<FeatureTransform> {
    let total: usize = shape.iter().product();
    if invalid.len() != total {
        return Err(GridProcessorError::shape_mismatch(shape, invalid.len()));
    }

    let mut sq_dist: Vec<f64> = invalid
        .iter()
        .map(|&bad| if bad { f64::INFINITY } else { 0.0 })
        .collect();
    let mut features: Vec<usize> = (0..total).collect();

    if total > 0 {
        let mut pass = LinePass::default();
        let mut stride = total;
        for &dim in shape {
            stride /= dim;
            transform_axis(&mut sq_dist, &mut features, dim, stride, &mut pass);
        }
    }

    let indices = sq_dist
        .iter()
        .zip(&features)
        .map(|(d, &f)| d.is_finite().then_some(f))
        .collect();
    let distances = sq_dist.iter().map(|d| d.sqrt()).collect();

    Ok(FeatureTransform {
        shape: shape.to_vec(),
        indices,
        distances,
    })
}

/// Scratch buffers reused across lines.
#[derive(Default)]
struct LinePass {
    g: Vec<f64>,
    feat: Vec<usize>,
    /// Positions of the parabolas forming the lower envelope
    v: Vec<usize>,
    /// Left boundary of each envelope parabola's interval
    z: Vec<f64>,
}

/// Run the 1-D transform over every line along one axis.
///
/// `dim` is the axis length and `stride` the distance between consecutive
/// cells along it in the flat buffer.
fn transform_axis(
    sq_dist: &mut [f64],
    features: &mut [usize],
    dim: usize,
    stride: usize,
    pass: &mut LinePass,
) {
    let block = dim * stride;
    for outer in (0..sq_dist.len()).step_by(block) {
        for inner in 0..stride {
            let base = outer + inner;

            pass.g.clear();
            pass.feat.clear();
            for i in 0..dim {
                pass.g.push(sq_dist[base + i * stride]);
                pass.feat.push(features[base + i * stride]);
            }

            transform_line(pass, |x, d, f| {
                sq_dist[base + x * stride] = d;
                features[base + x * stride] = f;
            });
        }
    }
}

/// Lower envelope of parabolas along one line.
///
/// Only seeds with finite `g` take part. A line with no finite entries is
/// left untouched.
fn transform_line(pass: &mut LinePass, mut write: impl FnMut(usize, f64, usize)) {
    let LinePass { g, feat, v, z } = pass;
    v.clear();
    z.clear();

    for q in 0..g.len() {
        if !g[q].is_finite() {
            continue;
        }
        let mut s = f64::NEG_INFINITY;
        while let (Some(&p), Some(&zk)) = (v.last(), z.last()) {
            s = intersect(g, p, q);
            if s <= zk {
                v.pop();
                z.pop();
            } else {
                break;
            }
        }
        v.push(q);
        z.push(s);
    }

    if v.is_empty() {
        return;
    }

    let mut k = 0;
    for x in 0..g.len() {
        while k + 1 < v.len() && z[k + 1] < x as f64 {
            k += 1;
        }
        let p = v[k];
        let d = x as f64 - p as f64;
        write(x, d * d + g[p], feat[p]);
    }
}

/// Abscissa where the parabolas rooted at `p` and `q` (p < q) intersect.
#[inline]
fn intersect(g: &[f64], p: usize, q: usize) -> f64 {
    let (pf, qf) = (p as f64, q as f64);
    ((g[q] + qf * qf) - (g[p] + pf * pf)) / (2.0 * (qf - pf))
}
