//! Changed-range extraction between two versions of a shape.
//!
//! # Algorithm
//!
//! ```text
//! min_len = min(|original|, |updated|)
//! start   = first i < min_len with original[i] != updated[i]
//!           (none → no change, return [])
//! end     = |updated| - 1 - k, where k counts equal points walking back
//!           from both tails (at most min_len of them)
//! pad     : start -= 1 if start > 1;  end += 1 if end < |updated| - 1
//! result  = updated[start ..= end]    (start > end → [])
//! ```
//!
//! Equality is exact.  The padding gives the extracted diversion a vertex
//! shared with the original route on each side, which is what
//! [`merge_coordinates`](crate::merge_coordinates) splices against.
//!
//! An insertion past the end of the shorter shape is not seen by the
//! forward scan and reports no change.  Callers diff equal-length windows.

use dv_core::{GeoPoint, Polyline};

/// The contiguous run of `updated` that differs from `original`, padded by
/// one vertex on each side where available.  Empty when nothing differs.
pub fn find_differences(original: &[GeoPoint], updated: &[GeoPoint]) -> Polyline {
    let min_len = original.len().min(updated.len());

    let Some(start) = (0..min_len).find(|&i| original[i] != updated[i]) else {
        return Polyline::empty();
    };

    let common_tail = original
        .iter()
        .rev()
        .zip(updated.iter().rev())
        .take(min_len)
        .take_while(|(a, b)| a == b)
        .count();

    // `updated.len() >= min_len > start >= 0`, so this is at least -1.
    let mut end = updated.len() as isize - 1 - common_tail as isize;
    let mut start = start as isize;

    if start > 1 {
        start -= 1;
    }
    if end < updated.len() as isize - 1 {
        end += 1;
    }

    if start > end {
        return Polyline::empty();
    }
    Polyline::from(&updated[start as usize..=end as usize])
}
