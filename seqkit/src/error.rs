use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A parallel sequence of flags must line up with the sequence it sorts.
    #[error("Expected {len} flags, got {flags}")]
    LengthMismatch { len: usize, flags: usize },
    /// Chunks need at least one element each.
    #[error("Chunk size must be at least 1")]
    ZeroChunkSize,
    #[error("Invalid JSON")]
    InvalidJson,
    /// JSON records must be given as an array.
    #[error("Expected a JSON array")]
    NotAnArray,
    #[error("Invalid hex color: {0}")]
    InvalidHexColor(String),
}

impl From<seqkit_value::Error> for Error {
    fn from(e: seqkit_value::Error) -> Self {
        match e {
            seqkit_value::Error::InvalidJson => Error::InvalidJson,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
