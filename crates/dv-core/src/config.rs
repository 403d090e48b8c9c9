//! Distance thresholds and window sizes shared by the shape and stop crates.

use crate::{DvError, DvResult};

/// Distance within which a diversion endpoint counts as "on" the base shape.
pub const MERGE_DISTANCE_THRESHOLD_M: f64 = 20.0;

/// A stop farther than this from a shape is affected by it.
pub const AFFECTED_STOP_DISTANCE_THRESHOLD_M: f64 = 20.0;

/// Look-ahead window for duplicate-vertex removal.
pub const DUPLICATE_WINDOW: usize = 3;

/// Tunables for diversion geometry.
///
/// Typically left at [`Default`]; applications loading overrides from a
/// file should call [`validate`](Self::validate) before use.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ShapeConfig {
    /// Max distance (metres) between each diversion endpoint and the base
    /// shape for the two to be mergeable.  Default: 20.
    pub merge_distance_threshold_m: f64,

    /// A stop is affected when its distance (metres) to the shape is
    /// strictly greater than this.  Default: 20.
    pub affected_stop_distance_threshold_m: f64,

    /// How many vertices ahead to look for a repeated coordinate.  Default: 3.
    pub duplicate_window: usize,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            merge_distance_threshold_m:         MERGE_DISTANCE_THRESHOLD_M,
            affected_stop_distance_threshold_m: AFFECTED_STOP_DISTANCE_THRESHOLD_M,
            duplicate_window:                   DUPLICATE_WINDOW,
        }
    }
}

impl ShapeConfig {
    pub fn with_merge_distance(mut self, metres: f64) -> Self {
        self.merge_distance_threshold_m = metres;
        self
    }

    pub fn with_affected_stop_distance(mut self, metres: f64) -> Self {
        self.affected_stop_distance_threshold_m = metres;
        self
    }

    pub fn with_duplicate_window(mut self, window: usize) -> Self {
        self.duplicate_window = window;
        self
    }

    /// Reject non-finite or negative thresholds and a zero window.
    pub fn validate(&self) -> DvResult<()> {
        check_threshold("merge_distance_threshold_m", self.merge_distance_threshold_m)?;
        check_threshold(
            "affected_stop_distance_threshold_m",
            self.affected_stop_distance_threshold_m,
        )?;
        if self.duplicate_window == 0 {
            return Err(DvError::Config("duplicate_window must be at least 1".into()));
        }
        Ok(())
    }
}

fn check_threshold(name: &'static str, value: f64) -> DvResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(DvError::InvalidThreshold { name, value })
    }
}
