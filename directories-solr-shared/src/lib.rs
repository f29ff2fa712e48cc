//! # Directories Solr Shared
//!
//! Shared types for the directories Solr indexer: the directory entities read
//! from the CMS and the Solr items produced from them.

mod entity;
mod item;

pub use entity::{DirectoryEntity, Entry, Response};
pub use item::{AdditionalField, SolrItem, DYNAMIC_TEXT_FIELD_SUFFIX};
