//! Solr item types.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Suffix the Solr schema maps to analysed text dynamic fields.
pub const DYNAMIC_TEXT_FIELD_SUFFIX: &str = "_text";

/// A document ready to be written to the Solr index.
///
/// The fixed fields follow the portal's Solr schema. Dynamic fields are
/// flattened next to them when serialized, so a field added as `attribute3`
/// is sent as `"attribute3_text": "..."`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolrItem {
    /// Unique key, `<resource id>_<short type name>`.
    pub uid: String,
    /// Indexer type tag.
    #[serde(rename = "type")]
    pub item_type: String,
    /// Name of the web application the document belongs to.
    pub site: String,
    /// Role required to see the document.
    pub role: String,
    pub title: String,
    /// Link back to the document in the portal.
    pub url: String,
    pub date: DateTime<Utc>,
    /// Date hierarchy, `year/month/day`.
    pub hie_date: String,
    /// Plain text content.
    pub content: String,
    #[serde(flatten)]
    dynamic_fields: BTreeMap<String, String>,
}

impl SolrItem {
    /// Create an item with the given uid and empty fields.
    pub fn new(uid: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            uid: uid.into(),
            item_type: String::new(),
            site: String::new(),
            role: String::new(),
            title: String::new(),
            url: String::new(),
            date,
            hie_date: String::new(),
            content: String::new(),
            dynamic_fields: BTreeMap::new(),
        }
    }

    /// Add (or replace) a text dynamic field.
    ///
    /// The value is stored under `name` + [`DYNAMIC_TEXT_FIELD_SUFFIX`].
    pub fn add_dynamic_field(&mut self, name: &str, value: impl Into<String>) {
        self.dynamic_fields
            .insert(format!("{}{}", name, DYNAMIC_TEXT_FIELD_SUFFIX), value.into());
    }

    /// Dynamic fields keyed by their full (suffixed) name.
    pub fn dynamic_fields(&self) -> &BTreeMap<String, String> {
        &self.dynamic_fields
    }

    /// Look up a text dynamic field by its base name.
    pub fn dynamic_field(&self, name: &str) -> Option<&str> {
        self.dynamic_fields
            .get(&format!("{}{}", name, DYNAMIC_TEXT_FIELD_SUFFIX))
            .map(String::as_str)
    }
}

/// Extra field an indexer declares for the Solr schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalField {
    pub name: String,
    pub field_type: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_dynamic_field_suffix() {
        let mut item = SolrItem::new("1_entity", Utc::now());
        item.add_dynamic_field("attribute3", "Paris");

        assert_eq!(item.dynamic_field("attribute3"), Some("Paris"));
        assert!(item.dynamic_fields().contains_key("attribute3_text"));

        item.add_dynamic_field("attribute3", "Lyon");
        assert_eq!(item.dynamic_fields().len(), 1);
        assert_eq!(item.dynamic_field("attribute3"), Some("Lyon"));
    }

    #[test]
    fn test_serialize_flattens_dynamic_fields() {
        let date = Utc.with_ymd_and_hms(2021, 3, 5, 10, 0, 0).unwrap();
        let mut item = SolrItem::new("7_entity", date);
        item.item_type = "directories".to_string();
        item.add_dynamic_field("attribute3", "Open");

        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(value["uid"], "7_entity");
        assert_eq!(value["type"], "directories");
        assert_eq!(value["attribute3_text"], "Open");
        assert!(value.get("dynamic_fields").is_none());
    }
}
