//! Configuration for area-of-interest envelopes.

use projection::Ellipsoid;
use serde::{Deserialize, Serialize};

/// Configuration for area-of-interest computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AoiConfig {
    /// Buffer vertices per quarter circle.
    pub quadrant_segments: usize,

    /// Decimal places kept in the returned envelope.
    pub precision: u32,

    /// Ellipsoid of the local projection.
    pub ellipsoid: Ellipsoid,
}

impl Default for AoiConfig {
    fn default() -> Self {
        Self {
            quadrant_segments: 16,
            precision: 3,
            ellipsoid: Ellipsoid::wgs84(),
        }
    }
}

impl AoiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("AOI_QUADRANT_SEGMENTS") {
            if let Ok(segments) = val.parse() {
                config.quadrant_segments = segments;
            }
        }

        if let Ok(val) = std::env::var("AOI_PRECISION") {
            if let Ok(precision) = val.parse() {
                config.precision = precision;
            }
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.quadrant_segments == 0 {
            return Err("quadrant_segments must be > 0".to_string());
        }

        if self.precision > 15 {
            return Err("precision must be <= 15".to_string());
        }

        if !(self.ellipsoid.a > 0.0) || !(0.0..1.0).contains(&self.ellipsoid.f) {
            return Err(format!("invalid ellipsoid: {:?}", self.ellipsoid));
        }

        Ok(())
    }
}
