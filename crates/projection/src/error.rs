//! Errors raised by projection math.

use thiserror::Error;

pub type ProjectionResult<T> = Result<T, ProjectionError>;

/// Errors that can occur while projecting coordinates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    /// An input or intermediate value was NaN or infinite.
    #[error("non-finite coordinate: {0}")]
    NonFinite(String),
}
