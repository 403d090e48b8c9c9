use thiserror::Error;

#[derive(Debug, Error)]
pub enum StopError {
    #[error("stop parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StopResult<T> = Result<T, StopError>;
