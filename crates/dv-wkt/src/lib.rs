//! `dv-wkt` — the WKT `LINESTRING` codec.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                      |
//! |------------|---------------------------------------------------------------|
//! | [`codec`]  | `parse_wkt`, `to_wkt`, `parse_wkt_strict`, `Wkt`, tokenizer    |
//! | [`error`]  | `WktError`, `WktResult<T>`                                    |
//!
//! # Coordinate order
//!
//! ```text
//! WKT text      LINESTRING(174.76 -36.84,174.77 -36.85)    lon lat
//! Polyline      [(-36.84, 174.76), (-36.85, 174.77)]       lat lon
//! ```
//!
//! The flip happens here and nowhere else.

pub mod codec;
pub mod error;


pub use codec::{
    Wkt, coordinate_tokens, parse_token, parse_wkt, parse_wkt_strict, to_wkt, tokens_to_wkt,
};
pub use error::{WktError, WktResult};
