//! Directory entities read from a JSON export.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::errors::EntitySourceError;
use crate::interfaces::DirectoryEntitySource;
use directories_solr_shared::DirectoryEntity;

/// Reads directory entities from a JSON file holding an array of entities.
///
/// The file is read again on every call, so each indexing run sees the
/// current export.
#[derive(Debug, Clone)]
pub struct JsonFileEntitySource {
    path: PathBuf,
}

impl JsonFileEntitySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DirectoryEntitySource for JsonFileEntitySource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn list_entities_without_binaries(
        &self,
    ) -> Result<Vec<DirectoryEntity>, EntitySourceError> {
        let bytes = tokio::fs::read(&self.path).await?;
        let entities: Vec<DirectoryEntity> = serde_json::from_slice(&bytes)?;

        debug!(count = entities.len(), "Loaded directory entities");
        Ok(entities)
    }
}
