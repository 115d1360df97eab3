//! Bounding box types and operations.

use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box (envelope).
///
/// For geographic envelopes x is longitude and y is latitude, in degrees.
/// For projected envelopes coordinates are in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Round every bound to `decimals` decimal places.
    ///
    /// Rounding goes through the exact decimal expansion of each value, so
    /// halfway cases resolve the same way as a correctly rounded `round(x, n)`.
    pub fn rounded(&self, decimals: u32) -> Self {
        Self {
            min_x: round_to(self.min_x, decimals),
            min_y: round_to(self.min_y, decimals),
            max_x: round_to(self.max_x, decimals),
            max_y: round_to(self.max_y, decimals),
        }
    }

    /// Bounds as `[min_x, min_y, max_x, max_y]`.
    pub fn to_array(&self) -> [f64; 4] {
        [self.min_x, self.min_y, self.max_x, self.max_y]
    }
}

impl From<BoundingBox> for [f64; 4] {
    fn from(b: BoundingBox) -> Self {
        b.to_array()
    }
}

/// Round `value` to `decimals` decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", decimals as usize, value)
        .parse()
        .unwrap_or(value)
}
