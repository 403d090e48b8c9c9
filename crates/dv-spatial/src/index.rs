//! R-tree over the segments of one shape.
//!
//! Classifying every stop of a route against a shape with
//! [`min_distance_to_polyline`](crate::min_distance_to_polyline) is
//! O(stops × segments).  [`ShapeIndex`] bulk-loads the segment bounding
//! boxes into an `rstar` tree and only measures the segments whose box
//! falls inside a padded search window around the stop.
//!
//! # Equivalence
//!
//! For any radius `r`, `min_distance_within(stop, r)` is `Some(d)` exactly
//! when the full scan returns `d <= r`, and `d` is bit-identical to it.  The
//! search window is sized so the true closest segment can never fall
//! outside it: latitude pads by `2r` worth of degrees, longitude by the same
//! divided by `cos` of the highest latitude in the window.  Windows that
//! would cross ±180° fall back to scanning every segment.

use std::f64::consts::PI;

use rstar::{AABB, RTree, RTreeObject};

use dv_core::{EARTH_RADIUS_M, GeoPoint, segments};
use dv_wkt::parse_wkt;

use crate::distance::segment_distance_m;

const METRES_PER_DEGREE: f64 = EARTH_RADIUS_M * PI / 180.0;

/// Safety factor over the tight haversine bound (π/2 for longitude).
const WINDOW_PAD: f64 = 2.0;

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// One segment with its `[lat, lon]` bounding box.
#[derive(Clone)]
struct SegmentEntry {
    a:        GeoPoint,
    b:        GeoPoint,
    envelope: AABB<[f64; 2]>,
}

impl RTreeObject for SegmentEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

// ── ShapeIndex ────────────────────────────────────────────────────────────────

/// Spatial index over the segments of a single polyline.
///
/// Segments with a non-finite endpoint are left out; the full scan can never
/// pick them either, since their distance is `NaN`.
pub struct ShapeIndex {
    tree:          RTree<SegmentEntry>,
    segment_count: usize,
}

impl ShapeIndex {
    /// Bulk-load the index.  O(N log N) in the number of segments.
    pub fn new(line: &[GeoPoint]) -> Self {
        let entries: Vec<SegmentEntry> = segments(line)
            .filter(|(_, a, b)| a.is_finite() && b.is_finite())
            .map(|(_, a, b)| SegmentEntry {
                a,
                b,
                envelope: AABB::from_corners(a.to_xy(), b.to_xy()),
            })
            .collect();

        Self {
            segment_count: line.len().saturating_sub(1),
            tree:          RTree::bulk_load(entries),
        }
    }

    /// Parse `wkt` leniently and index it.
    pub fn from_wkt(wkt: &str) -> Self {
        Self::new(&parse_wkt(wkt))
    }

    /// Segments in the source polyline, indexed or not.
    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    /// `true` if nothing could be indexed.
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// The distance from `pos` to the shape if it is at most `radius_m`.
    pub fn min_distance_within(&self, pos: GeoPoint, radius_m: f64) -> Option<f64> {
        if !pos.is_finite() {
            return None;
        }

        let best = self
            .candidates(pos, radius_m)
            .map(|e| segment_distance_m(pos, e.a, e.b))
            .fold(f64::INFINITY, min_f64);

        (best <= radius_m).then_some(best)
    }

    /// Every segment whose box meets the search window around `pos`.
    fn candidates<'a>(
        &'a self,
        pos: GeoPoint,
        radius_m: f64,
    ) -> Box<dyn Iterator<Item = &'a SegmentEntry> + 'a> {
        match search_window(pos, radius_m) {
            Some(window) => Box::new(self.tree.locate_in_envelope_intersecting(&window)),
            None => Box::new(self.tree.iter()),
        }
    }

    /// `true` when no segment comes within `threshold_m` of `pos`.
    #[inline]
    pub fn is_farther_than(&self, pos: GeoPoint, threshold_m: f64) -> bool {
        self.min_distance_within(pos, threshold_m).is_none()
    }
}

#[inline]
fn min_f64(best: f64, d: f64) -> f64 {
    if d < best { d } else { best }
}

/// Padded `[lat, lon]` box around `pos`, or `None` when the box would be
/// unbounded or wrap the antimeridian (the caller then scans everything).
fn search_window(pos: GeoPoint, radius_m: f64) -> Option<AABB<[f64; 2]>> {
    if !pos.is_finite() || !radius_m.is_finite() || radius_m < 0.0 {
        return None;
    }

    let d_lat = WINDOW_PAD * radius_m / METRES_PER_DEGREE;
    let max_lat = (pos.lat.abs() + d_lat).min(90.0);
    let cos = max_lat.to_radians().cos();
    if cos <= 1e-9 {
        return None;
    }
    let d_lon = WINDOW_PAD * radius_m / (METRES_PER_DEGREE * cos);
    if pos.lon - d_lon < -180.0 || pos.lon + d_lon > 180.0 {
        return None;
    }

    Some(AABB::from_corners(
        [pos.lat - d_lat, pos.lon - d_lon],
        [pos.lat + d_lat, pos.lon + d_lon],
    ))
}
