//! Core error type.
//!
//! The geometry operations themselves never fail: degenerate input yields a
//! neutral result (`None`, `f64::INFINITY`, an empty polyline).  Errors only
//! come from configuration and, in the other crates, from I/O boundaries.

use thiserror::Error;

/// The error type for `dv-core`.
#[derive(Debug, Error, PartialEq)]
pub enum DvError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{name} must be a finite, non-negative distance in metres (got {value})")]
    InvalidThreshold { name: &'static str, value: f64 },
}

/// Shorthand result type for `dv-core`.
pub type DvResult<T> = Result<T, DvError>;
