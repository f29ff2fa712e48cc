//! Property lookup backends.

use std::collections::HashMap;
use std::env;

/// String-keyed property lookup.
pub trait PropertiesService: Send + Sync {
    /// Value of the property, or `None` when it is not set.
    fn get_property(&self, key: &str) -> Option<String>;
}

/// Properties read from environment variables.
///
/// A key such as `directories-solr.indexer.name` is read from
/// `DIRECTORIES_SOLR_INDEXER_NAME`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvProperties;

impl EnvProperties {
    /// Environment variable name for a property key.
    pub fn env_key(key: &str) -> String {
        key.chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect()
    }
}

impl PropertiesService for EnvProperties {
    fn get_property(&self, key: &str) -> Option<String> {
        env::var(Self::env_key(key)).ok()
    }
}

/// In-memory properties.
#[derive(Debug, Clone, Default)]
pub struct MapProperties {
    values: HashMap<String, String>,
}

impl MapProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Remove a property.
    pub fn without(mut self, key: &str) -> Self {
        self.values.remove(key);
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapProperties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl PropertiesService for MapProperties {
    fn get_property(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_key() {
        assert_eq!(
            EnvProperties::env_key("directories-solr.indexer.document.characters.limit"),
            "DIRECTORIES_SOLR_INDEXER_DOCUMENT_CHARACTERS_LIMIT"
        );
        assert_eq!(
            EnvProperties::env_key("solr.indexer.document.enable"),
            "SOLR_INDEXER_DOCUMENT_ENABLE"
        );
    }

    #[test]
    fn test_map_properties() {
        let props: MapProperties = [("a.b", "1")].into_iter().collect();
        assert_eq!(props.get_property("a.b"), Some("1".to_string()));
        assert_eq!(props.get_property("a.c"), None);

        let props = props.with("a.c", "2").without("a.b");
        assert_eq!(props.get_property("a.b"), None);
        assert_eq!(props.get_property("a.c"), Some("2".to_string()));
    }
}
