//! Solr index writer trait definition.
//!
//! This module defines the abstract interface for writing items into Solr,
//! allowing for different backend implementations (HTTP, mock, etc.).

use async_trait::async_trait;

use crate::errors::SolrError;
use directories_solr_shared::SolrItem;

/// Abstract interface for writing Solr items.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` to allow use across async tasks.
#[async_trait]
pub trait SolrIndexWriter: Send + Sync {
    /// Write a batch of items in a single operation.
    ///
    /// Items with a uid already present in the index replace the stored
    /// document. An empty batch is not an error.
    ///
    /// # Arguments
    ///
    /// * `items` - The items to write
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the whole batch was accepted
    /// * `Err(SolrError)` - If the write fails
    async fn write(&self, items: &[SolrItem]) -> Result<(), SolrError>;
}
