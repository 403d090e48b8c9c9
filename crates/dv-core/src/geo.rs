//! Geographic coordinate type and spherical helpers.
//!
//! `GeoPoint` is always `(lat, lon)`.  The WKT `lon lat` order never leaks
//! past the `dv-wkt` codec, so any `GeoPoint` seen elsewhere can be trusted
//! to carry latitude first.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

/// Mean Earth radius used for every great-circle distance, in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Symmetric, and exactly `0.0` for identical points.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// `true` if both components are finite (no `NaN` from a lenient parse).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// Planar `[x, y]` view with `x = lat`, `y = lon`.
    ///
    /// Planar projection operates on whatever space it is handed; this is
    /// the identity space.
    #[inline]
    pub fn to_xy(self) -> [f64; 2] {
        [self.lat, self.lon]
    }

    #[inline]
    pub fn from_xy([lat, lon]: [f64; 2]) -> Self {
        Self { lat, lon }
    }

    /// Mercator `[x, y]` with `x = lon` (degrees, unchanged) and
    /// `y = ln(tan(π/4 + φ/2))`.
    #[inline]
    pub fn to_mercator(self) -> [f64; 2] {
        let phi = self.lat.to_radians();
        [self.lon, (FRAC_PI_4 + phi * 0.5).tan().ln()]
    }

    /// Inverse of [`to_mercator`](Self::to_mercator).
    #[inline]
    pub fn from_mercator([x, y]: [f64; 2]) -> Self {
        let lat = (2.0 * y.exp().atan() - FRAC_PI_2).to_degrees();
        Self { lat, lon: x }
    }
}

impl From<(f64, f64)> for GeoPoint {
    /// `(lat, lon)` tuple.
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
