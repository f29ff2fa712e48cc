//! Entity source error types.

use thiserror::Error;

/// Errors that can occur while listing directory entities.
#[derive(Debug, Error)]
pub enum EntitySourceError {
    /// The underlying storage could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored entities could not be decoded.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The source is unavailable for another reason.
    #[error("Unavailable: {0}")]
    Unavailable(String),
}

impl EntitySourceError {
    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an unavailable error.
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}

impl From<serde_json::Error> for EntitySourceError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string())
    }
}
