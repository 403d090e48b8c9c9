//! `dv-diversion` — from an edited shape to a complete diversion.
//!
//! # Pipeline
//!
//! ```text
//! base WKT ──┐
//!            ├─ parse (strict) ─ find_differences ─ can_merge ─┐
//! edited WKT ┘                                                 │
//!                      merge_coordinates ◄─────────────────────┘
//!                             │
//!                 remove_duplicate_points
//!                             │
//! stops ─ get_unique_stops ─ affected_stops ─► Diversion
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Stop classification runs on Rayon's thread pool.       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use dv_diversion::DiversionBuilder;
//!
//! let diversion = DiversionBuilder::new(base_wkt)
//!     .edited_shape(edited_wkt)
//!     .stops(stops)
//!     .build()?;
//! ```

pub mod builder;
pub mod diversion;
pub mod error;


pub use builder::DiversionBuilder;
pub use diversion::Diversion;
pub use error::{DiversionError, DiversionResult};
