//! Nearest-valid filling for gridded imagery and raster data.
//!
//! Satellite composites and model output routinely contain gaps (clouds,
//! swath edges, masked pixels) encoded as NaN. This crate fills those gaps
//! by copying the value of the nearest valid cell, located with an exact
//! Euclidean feature transform.
//!
//! # Architecture
//!
//! ```text
//! fill(data, shape)
//!      │
//!      ├─► Build invalidity mask (NaN → true)
//!      │
//!      ├─► euclidean_feature_transform(mask, shape)
//!      │         │
//!      │         └─► one lower-envelope pass per axis, carrying seed index
//!      │
//!      └─► Gather data[nearest_index] for every invalid cell
//! ```
//!
//! # Example
//!
//! ```
//! use grid_processor::fill;
//!
//! let data = [1.0, f64::NAN, f64::NAN, 4.0];
//! let filled = fill(&data, &[2, 2]).unwrap();
//! assert!(filled.iter().all(|v| !v.is_nan()));
//! ```

pub mod config;
pub mod edt;
pub mod error;
pub mod fill;

// Re-export commonly used types at crate root
pub use config::FillConfig;
pub use edt::{euclidean_feature_transform, FeatureTransform};
pub use error::{GridProcessorError, Result};
pub use fill::{fill, fill_grid, fill_with, fill_with_stats, FillStats};
