//! Windowed removal of short loops in a WKT shape.
//!
//! An editor drag-handle is useless when a vertex reappears a few steps
//! later: the loop between the two copies collapses to a point.  For each
//! surviving vertex `x` the next `n` vertices are checked for an exact
//! coordinate match; at the first match at offset `k`, vertices
//! `x + 1 ..= x + k` are dropped.  Dropped vertices never start a scan of
//! their own.  Repeats more than `n` apart are kept.

use tracing::debug;

use dv_core::ShapeConfig;
use dv_wkt::{coordinate_tokens, parse_token, tokens_to_wkt};

/// Drop vertices that loop back to an earlier vertex within `n` steps.
///
/// `n` must be a positive whole number; anything else (`0`, `-1`, `1.5`,
/// `NaN`) returns `wkt` unchanged.  Otherwise the result is always rebuilt
/// as `LINESTRING(lon lat,...)` from the surviving vertices, whose number
/// text is kept as written.
pub fn remove_duplicate_points(wkt: &str, n: f64) -> String {
    let Some(window) = window_size(n) else {
        return wkt.to_string();
    };

    let tokens: Vec<&str> = coordinate_tokens(wkt).collect();
    let points: Vec<_> = tokens.iter().map(|t| parse_token(t)).collect();
    let len = points.len();
    let mut removed = vec![false; len];

    for x in 0..len {
        if removed[x] {
            continue;
        }
        let reach = window.min(len - 1 - x);
        if let Some(k) = (1..=reach).find(|&k| points[x + k] == points[x]) {
            removed[x + 1..=x + k].fill(true);
        }
    }

    let removed_count = removed.iter().filter(|&&r| r).count();
    if removed_count > 0 {
        debug!(removed = removed_count, kept = len - removed_count, window, "removed looping vertices");
    }

    tokens_to_wkt(
        tokens
            .iter()
            .zip(&removed)
            .filter(|(_, r)| !**r)
            .map(|(t, _)| *t),
    )
}

/// [`remove_duplicate_points`] with the configured window.
pub fn remove_duplicate_points_with(wkt: &str, config: &ShapeConfig) -> String {
    remove_duplicate_points(wkt, config.duplicate_window as f64)
}

fn window_size(n: f64) -> Option<usize> {
    (n.is_finite() && n >= 1.0 && n.fract() == 0.0).then_some(n as usize)
}
