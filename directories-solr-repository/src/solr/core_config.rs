//! Solr core configuration.

use url::Url;

use crate::errors::SolrError;

/// Location of the Solr core to write into.
#[derive(Debug, Clone)]
pub struct SolrCoreConfig {
    /// Base URL of the Solr server, e.g. `http://localhost:8983/solr`.
    pub url: String,
    /// Core or collection name.
    pub core: String,
    /// Whether updates are committed immediately.
    pub commit: bool,
}

impl SolrCoreConfig {
    /// Create a config for the given server and core, committing every write.
    pub fn new(url: impl Into<String>, core: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            core: core.into(),
            commit: true,
        }
    }

    /// URL of the core's JSON update handler.
    pub fn update_url(&self) -> Result<Url, SolrError> {
        let mut url = Url::parse(&self.url).map_err(|e| SolrError::invalid_url(e.to_string()))?;

        url.path_segments_mut()
            .map_err(|_| SolrError::invalid_url(format!("{} cannot be a base URL", self.url)))?
            .pop_if_empty()
            .push(&self.core)
            .push("update");

        if self.commit {
            url.query_pairs_mut().append_pair("commit", "true");
        }

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_url() {
        let config = SolrCoreConfig::new("http://localhost:8983/solr", "lutece");
        let url = config.update_url().unwrap();
        assert_eq!(url.as_str(), "http://localhost:8983/solr/lutece/update?commit=true");
    }

    #[test]
    fn test_update_url_trailing_slash_without_commit() {
        let mut config = SolrCoreConfig::new("http://solr:8983/solr/", "portal");
        config.commit = false;
        let url = config.update_url().unwrap();
        assert_eq!(url.as_str(), "http://solr:8983/solr/portal/update");
    }

    #[test]
    fn test_update_url_invalid() {
        let config = SolrCoreConfig::new("not a url", "lutece");
        assert!(matches!(config.update_url(), Err(SolrError::InvalidUrl(_))));

        let config = SolrCoreConfig::new("mailto:solr@example.com", "lutece");
        assert!(matches!(config.update_url(), Err(SolrError::InvalidUrl(_))));
    }
}
