//! Stop-to-shape distance with Mercator correction.
//!
//! Planar projection straight on `(lat, lon)` skews with latitude.  Each
//! vertex is pushed through Mercator (`x = lon`, `y = ln(tan(π/4 + φ/2))`),
//! projected there, pulled back to `(lat, lon)`, and only then measured with
//! the haversine formula against the untouched stop position.

use dv_core::GeoPoint;
use dv_wkt::parse_wkt;

use crate::projection::project_xy;

/// Distance in metres from `stop` to the Mercator-projected closest point of
/// the segment `a → b`.
#[inline]
pub fn segment_distance_m(stop: GeoPoint, a: GeoPoint, b: GeoPoint) -> f64 {
    mercator_segment_distance(stop, stop.to_mercator(), a.to_mercator(), b.to_mercator())
}

#[inline]
fn mercator_segment_distance(stop: GeoPoint, s: [f64; 2], a: [f64; 2], b: [f64; 2]) -> f64 {
    let closest = GeoPoint::from_mercator(project_xy(s, a, b));
    stop.distance_m(closest)
}

/// Smallest distance in metres from `stop` to any segment of `line`.
///
/// `f64::INFINITY` when `line` has fewer than two points: there is nothing
/// to be near.  Segments whose distance comes out `NaN` are ignored.
pub fn min_distance_to_polyline(stop: GeoPoint, line: &[GeoPoint]) -> f64 {
    if line.len() < 2 {
        return f64::INFINITY;
    }

    let s = stop.to_mercator();
    let projected: Vec<[f64; 2]> = line.iter().map(|p| p.to_mercator()).collect();

    projected
        .windows(2)
        .map(|w| mercator_segment_distance(stop, s, w[0], w[1]))
        .fold(f64::INFINITY, |best, d| if d < best { d } else { best })
}

/// [`min_distance_to_polyline`] on a WKT shape (parsed leniently).
pub fn min_distance_to_polyline_wkt(stop: GeoPoint, wkt: &str) -> f64 {
    min_distance_to_polyline(stop, &parse_wkt(wkt))
}
