//! Error types for grid processing.

use thiserror::Error;

/// Errors that can occur during grid processing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridProcessorError {
    /// The data buffer does not match the declared shape.
    #[error("data length {len} does not match shape {shape:?} ({expected} cells)")]
    ShapeMismatch {
        shape: Vec<usize>,
        expected: usize,
        len: usize,
    },

    /// Every cell is invalid, so there is nothing to propagate.
    #[error("grid has no valid cells to fill from ({0} cells, all NaN)")]
    NoValidCells(usize),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl GridProcessorError {
    /// Create a ShapeMismatch error.
    pub fn shape_mismatch(shape: &[usize], len: usize) -> Self {
        Self::ShapeMismatch {
            shape: shape.to_vec(),
            expected: shape.iter().product(),
            len,
        }
    }

    /// Create a ConfigError.
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}

/// Result type for grid processor operations.
pub type Result<T> = std::result::Result<T, GridProcessorError>;
