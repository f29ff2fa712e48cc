//! # Directories Solr
//!
//! Main library for the directories Solr indexer.
//!
//! This crate provides the entry point, configuration and logging setup for
//! running one indexing pass over the directory entities.

pub mod config;
pub mod logging;
pub mod runner;

pub use config::{AppSettings, Dependencies};
pub use runner::{run_indexer, RunOutcome};

use thiserror::Error;

/// Errors that can occur during indexer initialization or execution.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Indexer error.
    #[error("Indexer error: {0}")]
    IndexerError(#[from] directories_solr_pipeline::IndexerError),

    /// Solr error.
    #[error("Solr error: {0}")]
    SolrError(#[from] directories_solr_repository::SolrError),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
