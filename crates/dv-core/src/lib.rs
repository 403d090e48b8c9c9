//! `dv-core` — foundational types for the `rust_dv` diversion geometry engine.
//!
//! This crate is a dependency of every other `dv-*` crate.  It has no `dv-*`
//! dependencies and a single external one (`thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`geo`]       | `GeoPoint`, haversine distance, Mercator transform    |
//! | [`polyline`]  | `Polyline`, segment iteration                         |
//! | [`ids`]       | `SegmentIndex`, `DirectionId`                         |
//! | [`config`]    | `ShapeConfig` and the default thresholds              |
//! | [`error`]     | `DvError`, `DvResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod polyline;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{
    AFFECTED_STOP_DISTANCE_THRESHOLD_M, DUPLICATE_WINDOW, MERGE_DISTANCE_THRESHOLD_M, ShapeConfig,
};
pub use error::{DvError, DvResult};
pub use geo::{EARTH_RADIUS_M, GeoPoint};
pub use ids::{DirectionId, SegmentIndex};
pub use polyline::{Polyline, segments};
