//! # Directories Solr Repository
//!
//! This crate provides the collaborators of the directories indexer: where
//! directory entities come from and where Solr items go. It includes the
//! error types, the abstract interfaces, a JSON export file entity source and
//! an HTTP client for Solr.

pub mod errors;
pub mod file;
pub mod interfaces;
pub mod solr;

pub use errors::{EntitySourceError, SolrError};
pub use file::JsonFileEntitySource;
pub use interfaces::{DirectoryEntitySource, SolrIndexWriter};
pub use solr::{SolrClient, SolrCoreConfig};
