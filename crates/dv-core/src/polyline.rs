//! Ordered coordinate sequence for route and diversion shapes.

use std::ops::Deref;

use crate::{GeoPoint, SegmentIndex};

/// An ordered list of [`GeoPoint`]s.  Order is the direction of travel.
///
/// Consecutive duplicates are allowed; nothing here deduplicates.  Derefs to
/// `[GeoPoint]` so slicing and iteration read like a plain `Vec`.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polyline(Vec<GeoPoint>);

impl Polyline {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Build from `(lat, lon)` pairs.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        pairs.iter().copied().map(GeoPoint::from).collect()
    }
}

/// `(index, start, end)` for every consecutive pair of `line`.
///
/// Segment `i` runs from vertex `i` to vertex `i + 1`; fewer than two points
/// yield nothing.
pub fn segments(line: &[GeoPoint]) -> impl Iterator<Item = (SegmentIndex, GeoPoint, GeoPoint)> + '_ {
    line.windows(2)
        .enumerate()
        .map(|(i, w)| (SegmentIndex(i as u32), w[0], w[1]))
}

impl Deref for Polyline {
    type Target = [GeoPoint];

    #[inline]
    fn deref(&self) -> &[GeoPoint] {
        &self.0
    }
}

impl From<Vec<GeoPoint>> for Polyline {
    fn from(points: Vec<GeoPoint>) -> Self {
        Self(points)
    }
}

impl From<&[GeoPoint]> for Polyline {
    fn from(points: &[GeoPoint]) -> Self {
        Self(points.to_vec())
    }
}

impl FromIterator<GeoPoint> for Polyline {
    fn from_iter<I: IntoIterator<Item = GeoPoint>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Polyline {
    type Item = GeoPoint;
    type IntoIter = std::vec::IntoIter<GeoPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Polyline {
    type Item = &'a GeoPoint;
    type IntoIter = std::slice::Iter<'a, GeoPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
