//! Fluent builder that turns a base shape and an edited shape into a
//! [`Diversion`].

use tracing::debug;

use dv_core::ShapeConfig;
use dv_shape::{can_merge_polylines, find_differences, merge_coordinates, remove_duplicate_points_with};
use dv_stops::{Stop, affected_stops, get_unique_stops};
use dv_wkt::{parse_wkt, parse_wkt_strict, to_wkt};

use crate::{Diversion, DiversionError, DiversionResult};

/// Fluent builder for a [`Diversion`].
///
/// # Required inputs
///
/// - the base route shape (WKT), given to [`new`](Self::new)
/// - the user-edited shape (WKT), via [`edited_shape`](Self::edited_shape)
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                  |
/// |-----------------|--------------------------|
/// | `.stops(v)`     | No stops                 |
/// | `.config(c)`    | `ShapeConfig::default()` |
///
/// # Example
///
/// ```rust,ignore
/// let diversion = DiversionBuilder::new(base_wkt)
///     .edited_shape(edited_wkt)
///     .stops(stops)
///     .build()?;
/// println!("{}", diversion.merged_wkt());
/// ```
pub struct DiversionBuilder {
    base:   String,
    edited: Option<String>,
    stops:  Vec<Stop>,
    config: ShapeConfig,
}

impl DiversionBuilder {
    /// Start from the route variant's current shape.
    pub fn new(base_wkt: impl Into<String>) -> Self {
        Self {
            base:   base_wkt.into(),
            edited: None,
            stops:  Vec::new(),
            config: ShapeConfig::default(),
        }
    }

    /// The shape as the user left it in the editor.
    pub fn edited_shape(mut self, wkt: impl Into<String>) -> Self {
        self.edited = Some(wkt.into());
        self
    }

    /// Stops of the route variant(s) to classify.  Duplicates per
    /// `route - direction - stop` are dropped, first one wins.
    pub fn stops(mut self, stops: Vec<Stop>) -> Self {
        self.stops = stops;
        self
    }

    pub fn config(mut self, config: ShapeConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate inputs and compute the diversion.
    ///
    /// 1. Both shapes are parsed strictly.
    /// 2. The changed run of the edited shape becomes the diversion
    ///    (`NoChange` if there is none).
    /// 3. Both its ends must lie on the base shape (`CannotMerge`).
    /// 4. It is spliced into the base shape and short loops are removed.
    /// 5. Stops are deduplicated and classified against the merged shape.
    pub fn build(self) -> DiversionResult<Diversion> {
        self.config.validate()?;

        let base = parse_wkt_strict(&self.base)
            .map_err(|source| DiversionError::Wkt { shape: "base", source })?;
        let edited_wkt = self.edited.ok_or(DiversionError::MissingEditedShape)?;
        let edited = parse_wkt_strict(&edited_wkt)
            .map_err(|source| DiversionError::Wkt { shape: "edited", source })?;

        let diversion = find_differences(&base, &edited);
        if diversion.is_empty() {
            return Err(DiversionError::NoChange);
        }

        let threshold_m = self.config.merge_distance_threshold_m;
        if !can_merge_polylines(&base, &diversion, threshold_m) {
            return Err(DiversionError::CannotMerge { threshold_m });
        }

        let spliced = merge_coordinates(&base, &diversion);
        // Re-read our own output: every token came from `to_wkt`.
        let merged = parse_wkt(&remove_duplicate_points_with(&to_wkt(&spliced), &self.config));

        let unique = get_unique_stops(&self.stops);
        let affected = affected_stops(&unique, &merged, &self.config);

        debug!(
            base_len = base.len(),
            diversion_len = diversion.len(),
            merged_len = merged.len(),
            loops_removed = spliced.len() - merged.len(),
            stops = unique.len(),
            affected = affected.len(),
            "diversion built"
        );

        Ok(Diversion { diversion, merged, affected_stops: affected })
    }
}
