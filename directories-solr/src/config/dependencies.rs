//! Dependency initialization and wiring for the directories indexer.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::AppError;
use directories_solr_pipeline::{
    DirectoriesSolrIndexer, EnvProperties, IndexerConfig, PropertiesService,
};
use directories_solr_repository::{JsonFileEntitySource, SolrClient, SolrCoreConfig};

/// Default Solr server URL.
const DEFAULT_SOLR_URL: &str = "http://localhost:8983/solr";

/// Default Solr core.
const DEFAULT_SOLR_CORE: &str = "lutece";

/// Process-level settings that are not indexer properties.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub solr_url: String,
    pub solr_core: String,
    /// JSON export of the directory entities.
    pub export_path: PathBuf,
}

impl AppSettings {
    /// Read the settings from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SOLR_URL`: Solr server URL (default: http://localhost:8983/solr)
    /// - `SOLR_CORE`: Solr core name (default: lutece)
    /// - `DIRECTORIES_EXPORT_PATH`: JSON export of the directory entities (required)
    pub fn from_env() -> Result<Self, AppError> {
        let solr_url = env::var("SOLR_URL").unwrap_or_else(|_| DEFAULT_SOLR_URL.to_string());
        let solr_core = env::var("SOLR_CORE").unwrap_or_else(|_| DEFAULT_SOLR_CORE.to_string());
        let export_path = env::var("DIRECTORIES_EXPORT_PATH")
            .map(PathBuf::from)
            .map_err(|_| AppError::config("DIRECTORIES_EXPORT_PATH is not set"))?;

        Ok(Self {
            solr_url,
            solr_core,
            export_path,
        })
    }
}

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured indexer ready to run.
    pub indexer: DirectoriesSolrIndexer,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    ///
    /// Indexer properties are read through [`EnvProperties`].
    pub fn from_env() -> Result<Self, AppError> {
        let settings = AppSettings::from_env()?;
        Self::build(&settings, &EnvProperties)
    }

    /// Wire the indexer from explicit settings and properties.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(AppError)` - If a property is missing or the Solr URL is invalid
    pub fn build(
        settings: &AppSettings,
        properties: &dyn PropertiesService,
    ) -> Result<Self, AppError> {
        info!(
            solr_url = %settings.solr_url,
            solr_core = %settings.solr_core,
            export_path = %settings.export_path.display(),
            "Initializing dependencies"
        );

        let config = IndexerConfig::from_properties(properties)?;

        let writer = SolrClient::new(SolrCoreConfig::new(
            settings.solr_url.as_str(),
            settings.solr_core.as_str(),
        ))?;

        let source = JsonFileEntitySource::new(settings.export_path.clone());

        let indexer = DirectoriesSolrIndexer::new(Arc::new(source), Arc::new(writer), config);

        Ok(Self { indexer })
    }
}
