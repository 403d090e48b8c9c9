//! Clamped point-on-segment projection and nearest-segment search.
//!
//! Projection is planar: it works on whatever `[x, y]` space it is handed.
//! [`project_point_on_segment`] treats `(lat, lon)` as `(x, y)` directly;
//! the Mercator-corrected variant lives in [`crate::distance`].

use dv_core::{GeoPoint, SegmentIndex, segments};

/// Nearest point on a polyline to some query point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Projection {
    /// The closest point found.
    pub point: GeoPoint,
    /// Segment the point lies on.
    pub segment: SegmentIndex,
    /// Great-circle distance from the query point to `point`, metres.
    pub distance_m: f64,
}

/// Haversine distance in metres.  Same as [`GeoPoint::distance_m`].
#[inline]
pub fn calculate_distance(p1: GeoPoint, p2: GeoPoint) -> f64 {
    p1.distance_m(p2)
}

/// Closest point to `p` on the segment `a → b` in a planar space.
///
/// The projection parameter is clamped to `[0, 1]`: points before the start
/// land on `a`, points past the end land on `b`.  A zero-length segment
/// returns `a`.
pub fn project_xy(p: [f64; 2], a: [f64; 2], b: [f64; 2]) -> [f64; 2] {
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    let len2 = dx * dx + dy * dy;
    if len2 == 0.0 {
        return a;
    }
    let t = ((p[0] - a[0]) * dx + (p[1] - a[1]) * dy) / len2;
    let t = t.clamp(0.0, 1.0);
    [a[0] + t * dx, a[1] + t * dy]
}

/// [`project_xy`] on raw `(lat, lon)` coordinates.
pub fn project_point_on_segment(p: GeoPoint, p1: GeoPoint, p2: GeoPoint) -> GeoPoint {
    if p1 == p2 {
        return p1;
    }
    GeoPoint::from_xy(project_xy(p.to_xy(), p1.to_xy(), p2.to_xy()))
}

/// Closest point to `point` over every segment of `line`.
///
/// Each segment's clamped projection is measured with the haversine
/// distance.  On an exact tie the earlier segment wins.  Returns `None` when
/// `line` has fewer than two points, or when no distance is finite (a line
/// full of `NaN`s from a lenient parse).
pub fn find_projection_on_polyline(point: GeoPoint, line: &[GeoPoint]) -> Option<Projection> {
    let mut best: Option<Projection> = None;
    let mut best_distance = f64::INFINITY;

    for (segment, a, b) in segments(line) {
        let candidate = project_point_on_segment(point, a, b);
        let distance_m = point.distance_m(candidate);
        if distance_m < best_distance {
            best_distance = distance_m;
            best = Some(Projection { point: candidate, segment, distance_m });
        }
    }

    best
}
