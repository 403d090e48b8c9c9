//! `dv-shape` — comparing, merging and tidying route shapes.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`diff`]    | `find_differences`                                              |
//! | [`merge`]   | `merge_coordinates`, `can_merge`, `can_merge_with`, `can_merge_polylines` |
//! | [`cleanup`] | `remove_duplicate_points`, `remove_duplicate_points_with`       |
//!
//! # Typical flow
//!
//! ```text
//! base, edited        (Polyline)
//!   │ find_differences(base, edited)      → diversion
//!   │ can_merge_polylines(base, diversion) → endpoints within 20 m?
//!   │ merge_coordinates(base, diversion)   → merged
//!   └ remove_duplicate_points(to_wkt(merged), 3)
//! ```
//!
//! `dv-diversion` runs exactly this sequence.

pub mod cleanup;
pub mod diff;
pub mod merge;

#[cfg(test)]
mod tests;

pub use cleanup::{remove_duplicate_points, remove_duplicate_points_with};
pub use diff::find_differences;
pub use merge::{can_merge, can_merge_polylines, can_merge_with, merge_coordinates};
