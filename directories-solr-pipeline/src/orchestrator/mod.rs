//! Orchestrator module for the directories indexer pipeline.
//!
//! Coordinates the entity source, item builder and loader for one run.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, instrument, warn};

use crate::config::IndexerConfig;
use crate::errors::IndexerError;
use crate::indexer::{IndexerDescription, SolrIndexer, RESOURCE_TYPE_DIRECTORY_ENTITY};
use crate::loader::BatchLoader;
use crate::processor::{resource_uid, ItemBuilder};
use directories_solr_repository::{DirectoryEntitySource, SolrIndexWriter};

const RESOURCE_TYPE_NAMES: &[&str] = &[RESOURCE_TYPE_DIRECTORY_ENTITY];

/// Outcome of one indexing run.
#[derive(Debug, Default)]
pub struct IndexingReport {
    /// Number of items written to Solr.
    pub indexed: usize,
    /// Entities skipped because their id was already indexed in the run.
    pub skipped_duplicates: usize,
    /// Per-entity and per-run errors, in the order they occurred.
    pub errors: Vec<IndexerError>,
}

impl IndexingReport {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error messages as reported to the host.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Indexer for directory entities.
///
/// A run:
/// - Lists every entity from the source
/// - Builds one item per entity id, recording build failures and moving on
/// - Writes the items to Solr in a single call
pub struct DirectoriesSolrIndexer {
    source: Arc<dyn DirectoryEntitySource>,
    writer: Arc<dyn SolrIndexWriter>,
    builder: ItemBuilder,
    config: IndexerConfig,
}

impl DirectoriesSolrIndexer {
    /// Create a new indexer using the HTML item builder from the config.
    pub fn new(
        source: Arc<dyn DirectoryEntitySource>,
        writer: Arc<dyn SolrIndexWriter>,
        config: IndexerConfig,
    ) -> Self {
        let builder = ItemBuilder::from_config(&config);
        Self::with_builder(source, writer, builder, config)
    }

    /// Create a new indexer with a custom item builder.
    pub fn with_builder(
        source: Arc<dyn DirectoryEntitySource>,
        writer: Arc<dyn SolrIndexWriter>,
        builder: ItemBuilder,
        config: IndexerConfig,
    ) -> Self {
        Self {
            source,
            writer,
            builder,
            config,
        }
    }

    /// Run a full indexing pass.
    #[instrument(skip(self))]
    pub async fn run(&self) -> IndexingReport {
        let mut report = IndexingReport::default();

        info!("Starting directories indexing");

        let entities = match self.source.list_entities_without_binaries().await {
            Ok(entities) => entities,
            Err(e) => {
                let err = IndexerError::from(e);
                error!(error = %err, "Failed to list directory entities");
                report.errors.push(err);
                return report;
            }
        };

        let mut indexed_ids = HashSet::new();
        let mut loader = BatchLoader::new(self.writer.clone());

        for entity in &entities {
            if indexed_ids.contains(&entity.id) {
                warn!(entity_id = entity.id, "Skipping duplicate entity");
                report.skipped_duplicates += 1;
                continue;
            }

            match self.builder.build(entity) {
                Ok(item) => {
                    loader.add(item);
                    indexed_ids.insert(entity.id);
                }
                Err(source) => {
                    let err = IndexerError::document_build(entity.id, source);
                    error!(entity_id = entity.id, error = %err, "Failed to build Solr item");
                    report.errors.push(err);
                }
            }
        }

        match loader.flush().await {
            Ok(count) => report.indexed = count,
            Err(err) => report.errors.push(err),
        }

        info!(
            entities = entities.len(),
            indexed = report.indexed,
            duplicates = report.skipped_duplicates,
            errors = report.errors.len(),
            "Directories indexing complete"
        );
        report
    }
}

#[async_trait]
impl SolrIndexer for DirectoriesSolrIndexer {
    fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    async fn index_documents(&self) -> Vec<String> {
        self.run().await.error_messages()
    }

    fn describe(&self) -> IndexerDescription {
        IndexerDescription {
            name: self.config.name.clone(),
            version: self.config.version.clone(),
            description: self.config.description.clone(),
        }
    }

    fn resource_type_names(&self) -> &'static [&'static str] {
        RESOURCE_TYPE_NAMES
    }

    fn resource_uid(&self, resource_id: &str, _resource_type: &str) -> String {
        resource_uid(resource_id)
    }
}
