//! Directory entity source trait definition.

use async_trait::async_trait;

use crate::errors::EntitySourceError;
use directories_solr_shared::DirectoryEntity;

/// Supplies the directory entities to index.
///
/// Entities are read fresh on every call; implementations must not include
/// binary attachments, only the textual responses.
#[async_trait]
pub trait DirectoryEntitySource: Send + Sync {
    /// List every directory entity, responses included, without binaries.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<DirectoryEntity>)` - The entities in source order
    /// * `Err(EntitySourceError)` - If the entities cannot be read
    async fn list_entities_without_binaries(&self)
        -> Result<Vec<DirectoryEntity>, EntitySourceError>;
}
