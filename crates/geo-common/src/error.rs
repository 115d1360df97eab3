//! Error types shared by the area-of-interest crates.

use thiserror::Error;

/// Result type alias using GeoError.
pub type GeoResult<T> = Result<T, GeoError>;

/// Primary error type for geometry and envelope operations.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    #[error("Geometry is empty: {0}")]
    EmptyGeometry(String),

    #[error("Projection error: {0}")]
    Projection(String),

    #[error(transparent)]
    Download(#[from] DownloadError),
}

impl GeoError {
    /// Create an InvalidParameter error.
    pub fn invalid_parameter(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param: param.into(),
            message: message.into(),
        }
    }
}

/// Raised when an image download from Google Earth Engine fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("gee>> download failed! message: {message}")]
pub struct DownloadError {
    message: String,
}

impl DownloadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message supplied when the error was raised.
    pub fn message(&self) -> &str {
        &self.message
    }
}
