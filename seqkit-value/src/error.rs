use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The text could not be parsed as JSON.
    #[error("Invalid JSON")]
    InvalidJson,
}

pub type Result<T> = std::result::Result<T, Error>;
