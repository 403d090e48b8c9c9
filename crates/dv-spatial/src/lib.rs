//! `dv-spatial` — projection, nearest-point search, and stop-to-shape distance.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                         |
//! |----------------|------------------------------------------------------------------|
//! | [`projection`] | `project_point_on_segment`, `find_projection_on_polyline`, `Projection` |
//! | [`distance`]   | `min_distance_to_polyline` (Mercator-corrected), `segment_distance_m` |
//! | [`index`]      | `ShapeIndex` (R-tree over segments)                              |
//!
//! Every function here is total.  A polyline with fewer than two points has
//! no segments, which shows up as `None` or `f64::INFINITY`, never as a panic.

pub mod distance;
pub mod index;
pub mod projection;


pub use distance::{min_distance_to_polyline, min_distance_to_polyline_wkt, segment_distance_m};
pub use index::ShapeIndex;
pub use projection::{
    Projection, calculate_distance, find_projection_on_polyline, project_point_on_segment,
    project_xy,
};
