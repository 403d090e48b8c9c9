use thiserror::Error;

use dv_core::DvError;
use dv_wkt::WktError;

#[derive(Debug, Error)]
pub enum DiversionError {
    #[error("diversion configuration error: {0}")]
    Config(#[from] DvError),

    #[error("{shape} shape is not a valid LINESTRING: {source}")]
    Wkt {
        shape:  &'static str,
        #[source]
        source: WktError,
    },

    #[error("no edited shape was supplied")]
    MissingEditedShape,

    #[error("edited shape does not differ from the base shape")]
    NoChange,

    #[error("diversion endpoints are not within {threshold_m} m of the base shape")]
    CannotMerge { threshold_m: f64 },
}

pub type DiversionResult<T> = Result<T, DiversionError>;
