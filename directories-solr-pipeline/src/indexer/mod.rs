//! The indexer capability set exposed to the host.

use async_trait::async_trait;

use directories_solr_shared::{AdditionalField, SolrItem};

/// Resource type of directory entities.
pub const RESOURCE_TYPE_DIRECTORY_ENTITY: &str = "DIRECTORIES_ENTITY";

/// Name, version and description of an indexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexerDescription {
    pub name: String,
    pub version: String,
    pub description: String,
}

/// A Solr indexer as seen by the host scheduler.
///
/// The host only calls [`SolrIndexer::index_documents`] when
/// [`SolrIndexer::is_enabled`] returns `true`.
#[async_trait]
pub trait SolrIndexer: Send + Sync {
    /// Whether the indexer should be run.
    fn is_enabled(&self) -> bool;

    /// Index every document and return the error messages of the run.
    ///
    /// An empty list means the run fully succeeded. This never fails: errors
    /// are reported in the returned list.
    async fn index_documents(&self) -> Vec<String>;

    fn describe(&self) -> IndexerDescription;

    fn name(&self) -> String {
        self.describe().name
    }

    fn version(&self) -> String {
        self.describe().version
    }

    fn description(&self) -> String {
        self.describe().description
    }

    /// Schema fields the indexer adds; none by default.
    fn additional_fields(&self) -> Vec<AdditionalField> {
        Vec::new()
    }

    /// Items of a single document, for incremental indexing.
    ///
    /// Indexers that only support full runs return nothing.
    fn documents_by_id(&self, _document_id: &str) -> Vec<SolrItem> {
        Vec::new()
    }

    /// Resource types whose documents this indexer produces.
    fn resource_type_names(&self) -> &'static [&'static str];

    /// Uid of the document built for a resource.
    fn resource_uid(&self, resource_id: &str, resource_type: &str) -> String;
}
