//! CSV stop loader.
//!
//! # CSV format
//!
//! One row per stop per route variant.  Headers may be the backend's
//! camelCase names or GTFS snake_case; `stopCode`, `stopName`, `routeId` and
//! `directionId` are optional.
//!
//! ```csv
//! stopId,stopCode,stopName,stopLat,stopLon,routeId,directionId
//! 7001,7001,Britomart Train Station,-36.8441,174.7676,NX1,0
//! 7002,7002,Customs St,-36.8449,174.7662,NX1,0
//! ```
//!
//! Surrounding whitespace in every field is trimmed.  An unparseable
//! `directionId` is read as "not given" rather than rejected.

use std::io::Read;
use std::path::Path;

use crate::{Stop, StopError, StopResult};

/// Load stops from a CSV file.
pub fn load_stops_csv(path: &Path) -> StopResult<Vec<Stop>> {
    let file = std::fs::File::open(path)?;
    load_stops_reader(file)
}

/// Like [`load_stops_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from network
/// streams.
pub fn load_stops_reader<R: Read>(reader: R) -> StopResult<Vec<Stop>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize::<Stop>()
        .map(|row| row.map_err(|e| StopError::Parse(e.to_string())))
        .collect()
}
