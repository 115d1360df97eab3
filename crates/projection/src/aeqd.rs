//! Azimuthal Equidistant projection.
//!
//! Distances and azimuths measured from the projection centre are true.
//! A planar point `(x, y)` lies `hypot(x, y)` meters from the centre along
//! the geodesic with forward azimuth `atan2(x, y)` (clockwise from north).
//!
//! The forward transform solves the inverse geodesic problem and the inverse
//! transform solves the direct problem, using Karney's algorithms through
//! [`geo::GeodesicMeasure`]. This is the same construction as
//! `+proj=aeqd` on an ellipsoid, and stays accurate up to the antipode.

use geo::{Bearing, Destination, Distance, GeodesicMeasure, Point};

use crate::ellipsoid::Ellipsoid;
use crate::error::{ProjectionError, ProjectionResult};

/// Azimuthal Equidistant projection centred on a geographic point.
#[derive(Debug, Clone)]
pub struct AzimuthalEquidistant {
    /// Latitude of projection centre in degrees
    pub lat0: f64,
    /// Longitude of projection centre in degrees
    pub lon0: f64,
    /// Reference ellipsoid
    pub ellipsoid: Ellipsoid,
}

impl AzimuthalEquidistant {
    /// Create a projection centred at (`lat0`, `lon0`) degrees on WGS84.
    ///
    /// Equivalent to `+proj=aeqd +lat_0=.. +lon_0=.. +x_0=0 +y_0=0`.
    pub fn new(lat0: f64, lon0: f64) -> Self {
        Self::with_ellipsoid(lat0, lon0, Ellipsoid::wgs84())
    }

    /// Create a projection centred at (`lat0`, `lon0`) degrees on `ellipsoid`.
    pub fn with_ellipsoid(lat0: f64, lon0: f64, ellipsoid: Ellipsoid) -> Self {
        Self {
            lat0,
            lon0,
            ellipsoid,
        }
    }

    /// Projection centre as (lat, lon) in degrees.
    pub fn center(&self) -> (f64, f64) {
        (self.lat0, self.lon0)
    }

    /// Convert geographic coordinates (degrees) to planar (x, y) in meters.
    pub fn geo_to_xy(&self, lat: f64, lon: f64) -> ProjectionResult<(f64, f64)> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(ProjectionError::NonFinite(format!("lat={}, lon={}", lat, lon)));
        }

        let geodesic = self.geodesic();
        let target = Point::new(lon, lat);
        let s = geodesic.distance(self.origin(), target);
        if s == 0.0 {
            return Ok((0.0, 0.0));
        }

        let azimuth = geodesic.bearing(self.origin(), target).to_radians();
        let (x, y) = (s * azimuth.sin(), s * azimuth.cos());
        if !x.is_finite() || !y.is_finite() {
            return Err(ProjectionError::NonFinite(format!(
                "no geodesic from centre to lat={}, lon={}",
                lat, lon
            )));
        }
        Ok((x, y))
    }

    /// Convert planar (x, y) in meters to geographic coordinates.
    ///
    /// Returns (lat, lon) in degrees, longitude normalized to [-180, 180].
    pub fn xy_to_geo(&self, x: f64, y: f64) -> ProjectionResult<(f64, f64)> {
        if !x.is_finite() || !y.is_finite() {
            return Err(ProjectionError::NonFinite(format!("x={}, y={}", x, y)));
        }

        let s = x.hypot(y);
        if s == 0.0 {
            return Ok((self.lat0, normalize_lon(self.lon0)));
        }

        let azimuth = x.atan2(y).to_degrees();
        let dest = self.geodesic().destination(self.origin(), azimuth, s);
        if !dest.x().is_finite() || !dest.y().is_finite() {
            return Err(ProjectionError::NonFinite(format!(
                "destination of x={}, y={} from ({}, {})",
                x, y, self.lat0, self.lon0
            )));
        }
        Ok((dest.y(), normalize_lon(dest.x())))
    }

    fn origin(&self) -> Point<f64> {
        Point::new(self.lon0, self.lat0)
    }

    fn geodesic(
        &self,
    ) -> impl Bearing<f64> + Destination<f64> + Distance<f64, Point<f64>, Point<f64>> {
        GeodesicMeasure::new(self.ellipsoid.a, self.ellipsoid.f)
    }
}

/// Normalize a longitude in degrees to [-180, 180].
fn normalize_lon(lon: f64) -> f64 {
    let mut lon = lon;
    while lon > 180.0 {
        lon -= 360.0;
    }
    while lon < -180.0 {
        lon += 360.0;
    }
    lon
}
