//! The computed result of a diversion edit.

use dv_core::Polyline;
use dv_stops::Stop;
use dv_wkt::to_wkt;

/// What a diversion does to a route variant.
#[derive(Clone, Debug, PartialEq)]
pub struct Diversion {
    /// The changed run of the edited shape, including one connecting vertex
    /// on each side that lies on the base shape.
    pub diversion: Polyline,

    /// The base shape with `diversion` spliced in and short loops removed.
    pub merged: Polyline,

    /// Stops (deduplicated per route variant) that `merged` no longer passes.
    pub affected_stops: Vec<Stop>,
}

impl Diversion {
    pub fn diversion_wkt(&self) -> String {
        to_wkt(&self.diversion)
    }

    pub fn merged_wkt(&self) -> String {
        to_wkt(&self.merged)
    }

    /// `true` when every stop is still served.
    pub fn is_stop_neutral(&self) -> bool {
        self.affected_stops.is_empty()
    }
}
