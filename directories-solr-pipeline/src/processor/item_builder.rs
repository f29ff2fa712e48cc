//! Item builder implementation.
//!
//! Transforms directory entities into SolrItem structures for indexing.

use chrono::{DateTime, Datelike, Utc};
use tracing::{debug, instrument};
use url::Url;

use crate::config::IndexerConfig;
use crate::errors::DocumentBuildError;
use crate::processor::content_extractor::{
    concatenate_responses, ContentExtractor, HtmlContentExtractor,
};
use directories_solr_shared::{DirectoryEntity, SolrItem};

/// Type tag of the items produced by this indexer.
pub const DOCUMENT_TYPE: &str = "directories";
/// Short type name appended to resource ids to build uids.
pub const SHORT_NAME: &str = "entity";
/// Items are public.
pub const ROLE_NONE: &str = "none";

const PARAMETER_XPAGE: &str = "page";
const XPAGE_DIRECTORIES: &str = "directories";
const PARAMETER_VIEW: &str = "view";
const VIEW_ENTITY: &str = "viewDirectoryEntity";
const PARAMETER_ENTITY_ID: &str = "entity_id";

/// Prefix of the dynamic field holding the responses to one attribute.
const DYNAMIC_FIELD_PREFIX: &str = "attribute";

/// Uid of an indexed resource: `<resource id>_entity`.
pub fn resource_uid(resource_id: &str) -> String {
    format!("{}_{}", resource_id, SHORT_NAME)
}

/// Date hierarchy `year/month/day`, month counted from 1, no padding.
pub fn hierarchy_date(date: &DateTime<Utc>) -> String {
    format!("{}/{}/{}", date.year(), date.month(), date.day())
}

/// Builder that turns one directory entity into one Solr item.
///
/// The builder is responsible for:
/// - Filling the fixed fields (uid, type, site, role, title, url, dates)
/// - Adding one text dynamic field per answered attribute
/// - Extracting the indexable content from the responses
pub struct ItemBuilder {
    base_url: Url,
    site: String,
    extractor: Box<dyn ContentExtractor>,
}

impl ItemBuilder {
    /// Create a new item builder.
    pub fn new(base_url: Url, site: impl Into<String>, extractor: Box<dyn ContentExtractor>) -> Self {
        Self {
            base_url,
            site: site.into(),
            extractor,
        }
    }

    /// Create a builder using the HTML extractor and the configured limits.
    pub fn from_config(config: &IndexerConfig) -> Self {
        Self::new(
            config.base_url.clone(),
            config.site.clone(),
            Box::new(HtmlContentExtractor::new(config.max_chars)),
        )
    }

    /// Build the Solr item of an entity.
    ///
    /// # Returns
    ///
    /// * `Ok(SolrItem)` - The item ready to be written
    /// * `Err(DocumentBuildError)` - If the content cannot be extracted
    #[instrument(skip(self, entity), fields(entity_id = entity.id))]
    pub fn build(&self, entity: &DirectoryEntity) -> Result<SolrItem, DocumentBuildError> {
        let mut item = SolrItem::new(resource_uid(&entity.id.to_string()), entity.creation);
        item.item_type = DOCUMENT_TYPE.to_string();
        item.site = self.site.clone();
        item.role = ROLE_NONE.to_string();
        item.title = entity.title.clone();
        item.url = self.entity_url(entity.id);
        item.hie_date = hierarchy_date(&entity.creation);

        for response in &entity.responses {
            if let Some(value) = response.present_value() {
                let field_name = format!("{}{}", DYNAMIC_FIELD_PREFIX, response.entry.id_entry);
                let merged = merge_dynamic_value(&item, &field_name, value);
                item.add_dynamic_field(&field_name, merged);
            }
        }

        let raw = concatenate_responses(&entity.responses);
        item.content = self.extractor.extract(&raw)?;

        debug!(
            uid = %item.uid,
            dynamic_fields = item.dynamic_fields().len(),
            content_chars = item.content.chars().count(),
            "Built Solr item"
        );
        Ok(item)
    }

    /// Portal link to the entity's page.
    fn entity_url(&self, entity_id: i32) -> String {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair(PARAMETER_XPAGE, XPAGE_DIRECTORIES)
            .append_pair(PARAMETER_VIEW, VIEW_ENTITY)
            .append_pair(PARAMETER_ENTITY_ID, &entity_id.to_string());
        url.into()
    }
}

/// Value to store for `field_name`: the new value, followed by the text
/// already stored under the same field, space separated.
fn merge_dynamic_value(item: &SolrItem, field_name: &str, value: &str) -> String {
    match item.dynamic_field(field_name) {
        Some(existing) => format!("{} {}", value, existing),
        None => value.to_string(),
    }
}
