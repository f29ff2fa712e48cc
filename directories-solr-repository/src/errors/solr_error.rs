//! Solr error types.
//!
//! This module defines the error types that can occur while writing to Solr.

use thiserror::Error;

/// Errors that can occur during Solr operations.
#[derive(Error, Debug)]
pub enum SolrError {
    /// Failed to reach the Solr server.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The configured Solr URL cannot be used.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Failed to serialize items for Solr.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Solr rejected the update.
    #[error("Write error: {0}")]
    WriteError(String),
}

impl SolrError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create an invalid URL error.
    pub fn invalid_url(msg: impl Into<String>) -> Self {
        Self::InvalidUrl(msg.into())
    }

    /// Create a write error.
    pub fn write(msg: impl Into<String>) -> Self {
        Self::WriteError(msg.into())
    }
}

impl From<serde_json::Error> for SolrError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
