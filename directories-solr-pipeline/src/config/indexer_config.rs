//! Indexer settings resolved from properties.

use url::Url;

use crate::config::PropertiesService;
use crate::errors::IndexerError;

/// Enables the document indexers of the portal.
pub const PROPERTY_INDEXER_ENABLE: &str = "solr.indexer.document.enable";
/// Optional cap on the extracted content length, in characters.
pub const PROPERTY_DOCUMENT_MAX_CHARS: &str = "directories-solr.indexer.document.characters.limit";
pub const PROPERTY_NAME: &str = "directories-solr.indexer.name";
pub const PROPERTY_DESCRIPTION: &str = "directories-solr.indexer.description";
pub const PROPERTY_VERSION: &str = "directories-solr.indexer.version";
/// Portal URL the entity links are built on.
pub const PROPERTY_BASE_URL: &str = "solr.indexer.base.url";
/// Site tag stamped on every item.
pub const PROPERTY_WEBAPP_NAME: &str = "solr.indexer.webapp.name";

/// Validated indexer settings.
#[derive(Debug, Clone)]
pub struct IndexerConfig {
    pub enabled: bool,
    pub max_chars: Option<usize>,
    pub name: String,
    pub description: String,
    pub version: String,
    pub base_url: Url,
    pub site: String,
}

impl IndexerConfig {
    /// Resolve and validate the indexer settings.
    ///
    /// The enable flag defaults to disabled and the character limit to none;
    /// every other property is required.
    ///
    /// # Returns
    ///
    /// * `Ok(IndexerConfig)` - The validated settings
    /// * `Err(IndexerError::ConfigError)` - If a property is missing or invalid
    pub fn from_properties(properties: &dyn PropertiesService) -> Result<Self, IndexerError> {
        let enabled = properties
            .get_property(PROPERTY_INDEXER_ENABLE)
            .map(|v| v.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let max_chars = match properties.get_property(PROPERTY_DOCUMENT_MAX_CHARS) {
            Some(v) if !v.trim().is_empty() => Some(v.trim().parse::<usize>().map_err(|e| {
                IndexerError::config(format!(
                    "{} must be a positive integer, got {:?}: {}",
                    PROPERTY_DOCUMENT_MAX_CHARS, v, e
                ))
            })?),
            _ => None,
        };

        let base_url = required(properties, PROPERTY_BASE_URL)?;
        let base_url = Url::parse(&base_url).map_err(|e| {
            IndexerError::config(format!("{} is not a valid URL: {}", PROPERTY_BASE_URL, e))
        })?;

        Ok(Self {
            enabled,
            max_chars,
            name: required(properties, PROPERTY_NAME)?,
            description: required(properties, PROPERTY_DESCRIPTION)?,
            version: required(properties, PROPERTY_VERSION)?,
            base_url,
            site: required(properties, PROPERTY_WEBAPP_NAME)?,
        })
    }
}

fn required(properties: &dyn PropertiesService, key: &str) -> Result<String, IndexerError> {
    properties
        .get_property(key)
        .ok_or_else(|| IndexerError::config(format!("missing property {}", key)))
}
