//! Error types for the directories indexer pipeline.

use directories_solr_repository::{EntitySourceError, SolrError};
use thiserror::Error;

/// Errors raised while turning HTML into indexable text.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The HTML parser rejected the content.
    #[error("HTML parse error: {0}")]
    Parse(String),
}

impl ExtractionError {
    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

/// Errors raised while building the Solr item of a single entity.
#[derive(Error, Debug)]
pub enum DocumentBuildError {
    /// Content extraction failed.
    #[error("Error during document parsing.")]
    Parsing(#[from] ExtractionError),
}

/// Errors reported by an indexing run.
///
/// The `Display` form of each variant is the message handed back to the
/// caller of `index_documents`.
#[derive(Error, Debug)]
pub enum IndexerError {
    /// One entity could not be turned into a Solr item.
    #[error("[SolrDirectoriesIndexer] An error occured during the indexation of the document number {entity_id}: {source}")]
    DocumentBuild {
        entity_id: i32,
        source: DocumentBuildError,
    },

    /// The batch write was rejected.
    #[error("[SolrDirectoriesIndexer] An error occured while writing the documents: {0}")]
    BatchWrite(#[from] SolrError),

    /// The entities could not be listed.
    #[error("[SolrDirectoriesIndexer] Unable to list the directory entities: {0}")]
    EntitySource(#[from] EntitySourceError),

    /// Missing or invalid configuration property.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl IndexerError {
    /// Create a document build error for the given entity.
    pub fn document_build(entity_id: i32, source: DocumentBuildError) -> Self {
        Self::DocumentBuild { entity_id, source }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Identifier of the entity the error is about, if any.
    pub fn entity_id(&self) -> Option<i32> {
        match self {
            Self::DocumentBuild { entity_id, .. } => Some(*entity_id),
            _ => None,
        }
    }
}
