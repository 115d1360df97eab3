//! Integration tests for area-of-interest envelopes.

use aoi::{area_of_interest, area_of_interest_bbox, area_of_interest_with, AoiConfig, DownloadError};
use projection::Ellipsoid;
use test_utils::{assert_approx_eq, assert_rounded_to, init_tracing};

const LOCATIONS: &[(f64, f64)] = &[
    (51.5074, -0.1278),  // London
    (-33.8688, 151.2093), // Sydney
    (35.6762, 139.6503), // Tokyo
    (-1.2921, 36.8219),  // Nairobi
    (64.1466, -21.9426), // Reykjavik
    (0.0, 0.0),
];

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_area_of_interest_is_deterministic() {
    init_tracing();

    for &(lat, lon) in LOCATIONS {
        let a = area_of_interest(lat, lon, 25.0).unwrap();
        let b = area_of_interest(lat, lon, 25.0).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn test_envelope_is_ordered() {
    for &(lat, lon) in LOCATIONS {
        for km in [0.5, 5.0, 50.0] {
            let [xmin, ymin, xmax, ymax] = area_of_interest(lat, lon, km).unwrap();
            assert!(xmin <= xmax, "({}, {}, {}): xmin {} > xmax {}", lat, lon, km, xmin, xmax);
            assert!(ymin <= ymax, "({}, {}, {}): ymin {} > ymax {}", lat, lon, km, ymin, ymax);
        }
    }
}

#[test]
fn test_envelope_is_rounded_to_three_decimals() {
    for &(lat, lon) in LOCATIONS {
        for value in area_of_interest(lat, lon, 12.3).unwrap() {
            assert_rounded_to!(value, 3);
        }
    }
}

#[test]
fn test_precision_is_configurable() {
    let config = AoiConfig {
        precision: 1,
        ..Default::default()
    };
    for value in area_of_interest_with(48.8566, 2.3522, 10.0, &config).unwrap() {
        assert_rounded_to!(value, 1);
    }
}

// =============================================================================
// Geometry
// =============================================================================

#[test]
fn test_envelope_size_matches_radius() {
    // 10 km radius at London: ~0.18 deg of latitude, ~0.29 deg of longitude
    let [xmin, ymin, xmax, ymax] = area_of_interest(51.5074, -0.1278, 10.0).unwrap();
    assert_approx_eq!(ymax - ymin, 0.180, 0.003);
    assert_approx_eq!(xmax - xmin, 0.288, 0.003);
}

#[test]
fn test_envelope_grows_with_radius() {
    let small = area_of_interest_bbox(35.6762, 139.6503, 5.0, &AoiConfig::default()).unwrap();
    let large = area_of_interest_bbox(35.6762, 139.6503, 50.0, &AoiConfig::default()).unwrap();
    assert!(large.max_x - large.min_x > (small.max_x - small.min_x) * 9.0);
    assert!(large.max_y - large.min_y > (small.max_y - small.min_y) * 9.0);
    assert!(large.min_x <= small.min_x && large.min_y <= small.min_y);
    assert!(large.max_x >= small.max_x && large.max_y >= small.max_y);
}

#[test]
fn test_point_is_built_in_lat_lon_order() {
    // The buffer centre sits `lat` meters east and `lon` meters north of the
    // projection centre. At 80N a 10 m buffer is then ~80 m east of lon 0.
    let [xmin, ymin, xmax, ymax] = area_of_interest(80.0, 0.0, 0.01).unwrap();
    assert!(xmin > 0.0, "xmin {} should be east of the requested point", xmin);
    assert_eq!([xmin, xmax], [0.004, 0.005]);
    assert_eq!([ymin, ymax], [80.0, 80.0]);
}

#[test]
fn test_sphere_and_wgs84_agree_roughly() {
    let sphere = AoiConfig {
        ellipsoid: Ellipsoid::sphere(6_371_008.8),
        ..Default::default()
    };
    let a = area_of_interest(45.0, 7.0, 20.0).unwrap();
    let b = area_of_interest_with(45.0, 7.0, 20.0, &sphere).unwrap();
    for (x, y) in a.iter().zip(&b) {
        assert_approx_eq!(*x, *y, 0.002);
    }
}

#[test]
fn test_higher_resolution_buffer_stays_close() {
    let fine = AoiConfig {
        quadrant_segments: 64,
        ..Default::default()
    };
    let a = area_of_interest(-33.8688, 151.2093, 30.0).unwrap();
    let b = area_of_interest_with(-33.8688, 151.2093, 30.0, &fine).unwrap();
    for (x, y) in a.iter().zip(&b) {
        assert_approx_eq!(*x, *y, 0.0011);
    }
}

#[test]
fn test_envelope_around_pole_spans_all_longitudes() {
    init_tracing();

    // Every buffer vertex is ~10 km from the pole, so they fan out over
    // the whole longitude range at nearly the same latitude
    let [xmin, ymin, xmax, ymax] = area_of_interest(90.0, 0.0, 10.0).unwrap();
    assert!(xmax - xmin > 340.0, "longitude span {} .. {}", xmin, xmax);
    assert!(xmin >= -180.0 && xmax <= 180.0);
    assert!(ymin > 89.8 && ymax <= 90.0, "latitude span {} .. {}", ymin, ymax);
}

#[test]
fn test_envelope_across_antimeridian_spans_all_longitudes() {
    // Vertices east of 180 wrap to -180, so the envelope covers the globe
    let [xmin, ymin, xmax, ymax] = area_of_interest(0.0, 180.0, 10.0).unwrap();
    assert!(xmin < -179.9 && xmax > 179.9, "longitude span {} .. {}", xmin, xmax);
    assert!(xmin >= -180.0 && xmax <= 180.0);
    assert_approx_eq!(ymin, -0.089, 0.002);
    assert_approx_eq!(ymax, 0.092, 0.002);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_download_error_is_reexported() {
    let err = DownloadError::new("HTTP 429");
    assert_eq!(err.to_string(), "gee>> download failed! message: HTTP 429");
}
