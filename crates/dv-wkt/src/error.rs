use thiserror::Error;

/// Errors from [`parse_wkt_strict`](crate::parse_wkt_strict).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WktError {
    #[error("expected a LINESTRING keyword")]
    MissingKeyword,

    #[error("expected '(' after LINESTRING")]
    MissingOpenParen,

    #[error("expected ')' at end of LINESTRING")]
    MissingCloseParen,

    #[error("vertex {index} {token:?} is not a 'lon lat' pair")]
    BadVertex { index: usize, token: String },

    #[error("vertex {index} has a non-numeric or non-finite coordinate {text:?}")]
    BadNumber { index: usize, text: String },
}

pub type WktResult<T> = Result<T, WktError>;
