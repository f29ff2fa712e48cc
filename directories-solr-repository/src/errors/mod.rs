//! Error types for the directories Solr repository.

mod entity_source_error;
mod solr_error;

pub use entity_source_error::EntitySourceError;
pub use solr_error::SolrError;
