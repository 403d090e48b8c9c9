//! Stop records and first-occurrence deduplication.

use serde::{Deserialize, Serialize};

use dv_core::{DirectionId, GeoPoint};

/// A stop served by a route variant, as returned by the disruption backend.
///
/// Field names follow the backend's camelCase JSON; CSV files may use the
/// GTFS snake_case spelling instead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    #[serde(alias = "stop_id")]
    pub stop_id: String,

    #[serde(default, alias = "stop_code")]
    pub stop_code: String,

    #[serde(default, alias = "stop_name")]
    pub stop_name: String,

    #[serde(alias = "stop_lat")]
    pub stop_lat: f64,

    #[serde(alias = "stop_lon")]
    pub stop_lon: f64,

    /// Route the stop was listed under.  Empty when not known.
    #[serde(default, alias = "route_id")]
    pub route_id: String,

    #[serde(
        default,
        alias = "direction_id",
        deserialize_with = "csv::invalid_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub direction_id: Option<DirectionId>,
}

impl Stop {
    pub fn new(stop_id: impl Into<String>, stop_lat: f64, stop_lon: f64) -> Self {
        Self {
            stop_id: stop_id.into(),
            stop_code: String::new(),
            stop_name: String::new(),
            stop_lat,
            stop_lon,
            route_id: String::new(),
            direction_id: None,
        }
    }

    /// Attach the route variant the stop belongs to.
    pub fn on_route(mut self, route_id: impl Into<String>, direction: Option<u8>) -> Self {
        self.route_id = route_id.into();
        self.direction_id = direction.map(DirectionId);
        self
    }

    #[inline]
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.stop_lat, self.stop_lon)
    }

    /// The `route - direction - stop` identity used for deduplication.
    #[inline]
    pub fn key(&self) -> StopKey<'_> {
        StopKey {
            route_id:     &self.route_id,
            direction_id: self.direction_id,
            stop_id:      &self.stop_id,
        }
    }
}

/// Borrowed composite key: one stop on one direction of one route.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct StopKey<'a> {
    pub route_id:     &'a str,
    pub direction_id: Option<DirectionId>,
    pub stop_id:      &'a str,
}

#[cfg(feature = "fx-hash")]
type KeySet<'a> = rustc_hash::FxHashSet<StopKey<'a>>;
#[cfg(not(feature = "fx-hash"))]
type KeySet<'a> = std::collections::HashSet<StopKey<'a>>;

/// Keep the first stop for each [`StopKey`], in input order.
pub fn get_unique_stops(stops: &[Stop]) -> Vec<Stop> {
    let mut seen = KeySet::default();
    let mut unique = Vec::with_capacity(stops.len());
    for stop in stops {
        if seen.insert(stop.key()) {
            unique.push(stop.clone());
        }
    }
    unique
}
