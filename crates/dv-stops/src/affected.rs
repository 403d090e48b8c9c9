//! Which stops does a shape leave behind?
//!
//! A stop is *affected* when the shape passes more than the threshold away
//! from it: the (diverted) route no longer serves that stop.  A shape with
//! fewer than two points is infinitely far from everything, so every stop is
//! affected by it.

use tracing::debug;

use dv_core::{AFFECTED_STOP_DISTANCE_THRESHOLD_M, GeoPoint, ShapeConfig};
use dv_spatial::{ShapeIndex, min_distance_to_polyline_wkt};
use dv_wkt::parse_wkt;

use crate::Stop;

/// `true` if `stop` is more than 20 m from `shape_wkt`.
pub fn is_affected_stop(stop: &Stop, shape_wkt: &str) -> bool {
    min_distance_to_polyline_wkt(stop.position(), shape_wkt) > AFFECTED_STOP_DISTANCE_THRESHOLD_M
}

/// [`is_affected_stop`] with the configured threshold.
pub fn is_affected_stop_with(stop: &Stop, shape_wkt: &str, config: &ShapeConfig) -> bool {
    min_distance_to_polyline_wkt(stop.position(), shape_wkt)
        > config.affected_stop_distance_threshold_m
}

/// Every stop in `stops` affected by `shape`, in input order.
///
/// Same answer as calling [`is_affected_stop_with`] on each stop, but the
/// shape is indexed once.  With the `parallel` feature the stops are
/// classified on Rayon's thread pool.
pub fn affected_stops(stops: &[Stop], shape: &[GeoPoint], config: &ShapeConfig) -> Vec<Stop> {
    let threshold = config.affected_stop_distance_threshold_m;
    if threshold.is_nan() {
        // Nothing compares greater than NaN.
        return Vec::new();
    }

    let index = ShapeIndex::new(shape);
    let affected = classify(stops, &index, threshold);
    debug!(
        stops = stops.len(),
        affected = affected.len(),
        segments = index.segment_count(),
        "classified stops against shape"
    );
    affected
}

/// [`affected_stops`] on a WKT shape (parsed leniently).
pub fn affected_stops_wkt(stops: &[Stop], shape_wkt: &str, config: &ShapeConfig) -> Vec<Stop> {
    affected_stops(stops, &parse_wkt(shape_wkt), config)
}

#[cfg(not(feature = "parallel"))]
fn classify(stops: &[Stop], index: &ShapeIndex, threshold: f64) -> Vec<Stop> {
    stops
        .iter()
        .filter(|s| index.is_farther_than(s.position(), threshold))
        .cloned()
        .collect()
}

#[cfg(feature = "parallel")]
fn classify(stops: &[Stop], index: &ShapeIndex, threshold: f64) -> Vec<Stop> {
    use rayon::prelude::*;

    stops
        .par_iter()
        .filter(|s| index.is_farther_than(s.position(), threshold))
        .cloned()
        .collect()
}
