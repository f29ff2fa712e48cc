//! Configuration for the directories indexer.
//!
//! Settings are string-keyed properties, the way the portal stores them. A
//! [`PropertiesService`] resolves keys; [`IndexerConfig`] validates the ones
//! the indexer needs.

mod indexer_config;
mod properties;

pub use indexer_config::{
    IndexerConfig, PROPERTY_BASE_URL, PROPERTY_DESCRIPTION, PROPERTY_DOCUMENT_MAX_CHARS,
    PROPERTY_INDEXER_ENABLE, PROPERTY_NAME, PROPERTY_VERSION, PROPERTY_WEBAPP_NAME,
};
pub use properties::{EnvProperties, MapProperties, PropertiesService};
