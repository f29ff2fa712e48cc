//! # Directories Solr Pipeline
//!
//! This crate provides the indexer that turns directory entities into Solr
//! items and writes them in one batch.
//!
//! ## Architecture
//!
//! The pipeline follows the Source-Processor-Loader pattern:
//!
//! 1. **Source**: Lists the directory entities to index
//! 2. **Processor**: Builds one Solr item per entity, extracting text from HTML
//! 3. **Loader**: Accumulates items and writes them to Solr in a single call
//! 4. **Orchestrator**: Runs the flow and collects per-entity and per-run errors

pub mod config;
pub mod errors;
pub mod indexer;
pub mod loader;
pub mod orchestrator;
pub mod processor;

pub use config::{EnvProperties, IndexerConfig, MapProperties, PropertiesService};
pub use errors::{DocumentBuildError, ExtractionError, IndexerError};
pub use indexer::{IndexerDescription, SolrIndexer};
pub use orchestrator::{DirectoriesSolrIndexer, IndexingReport};
