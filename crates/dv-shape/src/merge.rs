//! Splicing a diversion into a base route shape.

use tracing::{debug, trace};

use dv_core::{GeoPoint, MERGE_DISTANCE_THRESHOLD_M, Polyline, ShapeConfig};
use dv_spatial::find_projection_on_polyline;
use dv_wkt::parse_wkt;

/// Replace the part of `base` between the diversion's endpoints with
/// `insert`.
///
/// With `s` the segment of `base` nearest `insert`'s first point and `e` the
/// segment nearest its last point:
///
/// ```text
/// base[..= s]  ++  insert  ++  base[e + 2 ..]
/// ```
///
/// i.e. keep `base` up to the start vertex of segment `s`, then all of
/// `insert`, then `base` after the end vertex of segment `e`.  The indices
/// are used as found; `s > e` is not reordered.
///
/// `base` must have at least two points and `insert` at least one.
/// Otherwise `base` is returned unchanged.
pub fn merge_coordinates(base: &[GeoPoint], insert: &[GeoPoint]) -> Polyline {
    let (Some(&first), Some(&last)) = (insert.first(), insert.last()) else {
        debug!("merge skipped: empty diversion");
        return Polyline::from(base);
    };
    let (Some(start), Some(end)) = (
        find_projection_on_polyline(first, base),
        find_projection_on_polyline(last, base),
    ) else {
        debug!(base_len = base.len(), "merge skipped: base shape has no segments");
        return Polyline::from(base);
    };

    let head_end = (start.segment.index() + 1).min(base.len());
    let tail_start = (end.segment.index() + 2).min(base.len());
    trace!(
        start_segment = start.segment.index(),
        end_segment = end.segment.index(),
        "splicing diversion into base shape"
    );

    base[..head_end]
        .iter()
        .chain(insert)
        .chain(&base[tail_start..])
        .copied()
        .collect()
}

/// `true` when both ends of `diversion` lie within `threshold_m` of
/// `original`.
pub fn can_merge_polylines(original: &[GeoPoint], diversion: &[GeoPoint], threshold_m: f64) -> bool {
    let (Some(&first), Some(&last)) = (diversion.first(), diversion.last()) else {
        return false;
    };
    let within = |p: GeoPoint| {
        find_projection_on_polyline(p, original).is_some_and(|proj| proj.distance_m <= threshold_m)
    };

    let start_ok = within(first);
    let end_ok = within(last);
    if !(start_ok && end_ok) {
        debug!(start_ok, end_ok, threshold_m, "diversion endpoints too far from base shape");
    }
    start_ok && end_ok
}

/// [`can_merge_polylines`] on WKT text with the configured threshold.
pub fn can_merge_with(original_wkt: &str, diversion_wkt: &str, config: &ShapeConfig) -> bool {
    can_merge_polylines(
        &parse_wkt(original_wkt),
        &parse_wkt(diversion_wkt),
        config.merge_distance_threshold_m,
    )
}

/// [`can_merge_with`] using the default 20 m threshold.
pub fn can_merge(original_wkt: &str, diversion_wkt: &str) -> bool {
    can_merge_polylines(
        &parse_wkt(original_wkt),
        &parse_wkt(diversion_wkt),
        MERGE_DISTANCE_THRESHOLD_M,
    )
}
