//! Processor module for the directories indexer pipeline.
//!
//! Transforms directory entities into Solr items.

mod content_extractor;
mod item_builder;

pub use content_extractor::{concatenate_responses, ContentExtractor, HtmlContentExtractor};
pub use item_builder::{
    hierarchy_date, resource_uid, ItemBuilder, DOCUMENT_TYPE, ROLE_NONE, SHORT_NAME,
};
