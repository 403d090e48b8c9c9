//! `dv-stops` — stops, deduplication, and affected-stop classification.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`stop`]     | `Stop`, `StopKey`, `get_unique_stops`                        |
//! | [`affected`] | `is_affected_stop`, `affected_stops` (indexed batch)         |
//! | [`loader`]   | `load_stops_csv`, `load_stops_reader`                        |
//! | [`error`]    | `StopError`, `StopResult<T>`                                 |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | `affected_stops` classifies on Rayon's thread pool.      |
//! | `fx-hash`  | `get_unique_stops` hashes keys with FxHash.              |

pub mod affected;
pub mod error;
pub mod loader;
pub mod stop;

#[cfg(test)]
mod tests;

pub use affected::{affected_stops, affected_stops_wkt, is_affected_stop, is_affected_stop_with};
pub use error::{StopError, StopResult};
pub use loader::{load_stops_csv, load_stops_reader};
pub use stop::{Stop, StopKey, get_unique_stops};
