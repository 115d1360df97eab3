//! Reference ellipsoids.

use serde::{Deserialize, Serialize};

/// An ellipsoid of revolution defined by semi-major axis and flattening.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipsoid {
    /// Semi-major (equatorial) axis in meters
    pub a: f64,
    /// Flattening, (a - b) / a
    pub f: f64,
}

impl Ellipsoid {
    /// WGS84 ellipsoid.
    pub fn wgs84() -> Self {
        Self {
            a: 6378137.0,
            f: 1.0 / 298.257223563,
        }
    }

    /// A sphere of the given radius (zero flattening).
    pub fn sphere(radius: f64) -> Self {
        Self { a: radius, f: 0.0 }
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::wgs84()
    }
}
