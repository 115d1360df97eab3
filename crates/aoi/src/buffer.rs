//! Circular buffers around planar points.

use std::f64::consts::PI;

use geo_types::{Coord, LineString, Point, Polygon};

/// Buffer `center` by `radius` into a polygon approximating a circle.
///
/// The ring has `4 * quadrant_segments` segments, starts at angle 0 (due +x)
/// and runs counter-clockwise; it is closed, so the first coordinate is
/// repeated at the end. A non-positive radius produces an empty buffer and
/// returns `None`, as does zero `quadrant_segments`.
pub fn buffer_point(center: Point<f64>, radius: f64, quadrant_segments: usize) -> Option<Polygon<f64>> {
    if !(radius > 0.0) || quadrant_segments == 0 {
        return None;
    }

    let n = 4 * quadrant_segments;
    let step = 2.0 * PI / n as f64;

    let mut coords: Vec<Coord<f64>> = (0..n)
        .map(|k| {
            let (sin, cos) = (k as f64 * step).sin_cos();
            Coord {
                x: center.x() + radius * cos,
                y: center.y() + radius * sin,
            }
        })
        .collect();
    coords.push(coords[0]);

    Some(Polygon::new(LineString::new(coords), vec![]))
}
