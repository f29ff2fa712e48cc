//! Interface definitions for the indexer collaborators.
//!
//! These traits allow for dependency injection: the indexer only sees the
//! traits, so sources and writers can be swapped (or mocked in tests).

mod entity_source;
mod solr_index_writer;

pub use entity_source::DirectoryEntitySource;
pub use solr_index_writer::SolrIndexWriter;
