//! Area-of-interest envelope around a geographic point.

use geo::{BoundingRect, MapCoords};
use geo_common::{BoundingBox, GeoError, GeoResult};
use geo_types::{Coord, Point};
use projection::AzimuthalEquidistant;
use tracing::debug;

use crate::buffer::buffer_point;
use crate::config::AoiConfig;

/// Bounding box `[xmin, ymin, xmax, ymax]` (lon/lat degrees, WGS84) of a
/// `km` kilometre buffer around (`lat`, `lon`), rounded to 3 decimals.
///
/// # Example
///
/// ```
/// let [xmin, ymin, xmax, ymax] = aoi::area_of_interest(0.0, 0.0, 1.0).unwrap();
/// assert_eq!([xmin, ymin, xmax, ymax], [-0.009, -0.009, 0.009, 0.009]);
/// ```
pub fn area_of_interest(lat: f64, lon: f64, km: f64) -> GeoResult<[f64; 4]> {
    area_of_interest_with(lat, lon, km, &AoiConfig::default())
}

/// [`area_of_interest`] with explicit configuration.
pub fn area_of_interest_with(lat: f64, lon: f64, km: f64, config: &AoiConfig) -> GeoResult<[f64; 4]> {
    area_of_interest_bbox(lat, lon, km, config).map(Into::into)
}

/// Compute the area-of-interest envelope as a [`BoundingBox`].
///
/// The buffer is built in a local azimuthal equidistant projection centred
/// at (`lat`, `lon`) and transformed back to geographic coordinates before
/// taking its envelope.
///
/// The buffered point is constructed as `Point(lat, lon)` in projected
/// meters, i.e. planar x carries the latitude value and y the longitude
/// value. Keep this order; do not swap it to (lon, lat).
///
/// # Errors
/// * `InvalidParameter` for non-finite input or an invalid config
/// * `EmptyGeometry` when `km <= 0`
/// * `Projection` when a buffer vertex cannot be transformed
pub fn area_of_interest_bbox(
    lat: f64,
    lon: f64,
    km: f64,
    config: &AoiConfig,
) -> GeoResult<BoundingBox> {
    config
        .validate()
        .map_err(|msg| GeoError::invalid_parameter("config", msg))?;

    for (name, value) in [("lat", lat), ("lon", lon), ("km", km)] {
        if !value.is_finite() {
            return Err(GeoError::invalid_parameter(name, format!("must be finite, got {}", value)));
        }
    }

    let aeqd = AzimuthalEquidistant::with_ellipsoid(lat, lon, config.ellipsoid);

    let point = Point::new(lat, lon);
    let buffer = buffer_point(point, km * 1000.0, config.quadrant_segments).ok_or_else(|| {
        GeoError::EmptyGeometry(format!("buffer of {} km around ({}, {})", km, lat, lon))
    })?;

    let geographic = buffer.try_map_coords(|c: Coord<f64>| {
        aeqd.xy_to_geo(c.x, c.y)
            .map(|(lat, lon)| Coord { x: lon, y: lat })
            .map_err(|e| GeoError::Projection(e.to_string()))
    })?;

    let rect = geographic
        .exterior()
        .bounding_rect()
        .ok_or_else(|| GeoError::EmptyGeometry("buffer exterior has no coordinates".to_string()))?;

    let bbox = BoundingBox::new(rect.min().x, rect.min().y, rect.max().x, rect.max().y)
        .rounded(config.precision);

    debug!(
        lat,
        lon,
        km,
        vertices = geographic.exterior().0.len(),
        bbox = ?bbox.to_array(),
        "computed area of interest"
    );

    Ok(bbox)
}
