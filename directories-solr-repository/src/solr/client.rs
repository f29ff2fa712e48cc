//! Solr HTTP client implementation.
//!
//! This module provides the concrete implementation of `SolrIndexWriter`
//! posting JSON documents to the core's update handler.

use async_trait::async_trait;
use tracing::{debug, error, info, instrument};
use url::Url;

use crate::errors::SolrError;
use crate::interfaces::SolrIndexWriter;
use crate::solr::core_config::SolrCoreConfig;
use directories_solr_shared::SolrItem;

/// Solr client implementation.
///
/// # Example
///
/// ```ignore
/// let client = SolrClient::new(SolrCoreConfig::new("http://localhost:8983/solr", "lutece"))?;
/// client.write(&items).await?;
/// ```
pub struct SolrClient {
    http: reqwest::Client,
    update_url: Url,
}

impl SolrClient {
    /// Create a new Solr client for the configured core.
    ///
    /// # Returns
    ///
    /// * `Ok(SolrClient)` - A new client instance
    /// * `Err(SolrError)` - If the URL is invalid or the HTTP client cannot be built
    pub fn new(config: SolrCoreConfig) -> Result<Self, SolrError> {
        let update_url = config.update_url()?;
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| SolrError::connection(e.to_string()))?;

        info!(url = %config.url, core = %config.core, "Created Solr client");

        Ok(Self { http, update_url })
    }

    /// URL the client posts updates to.
    pub fn update_url(&self) -> &Url {
        &self.update_url
    }
}

#[async_trait]
impl SolrIndexWriter for SolrClient {
    /// Post the items as a JSON array to the update handler.
    #[instrument(skip(self, items), fields(item_count = items.len()))]
    async fn write(&self, items: &[SolrItem]) -> Result<(), SolrError> {
        if items.is_empty() {
            debug!("No items to write");
            return Ok(());
        }

        let body = serde_json::to_vec(items)?;

        let response = self
            .http
            .post(self.update_url.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| SolrError::connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Update request failed");
            return Err(SolrError::write(format!(
                "Update failed with status {}: {}",
                status, error_body
            )));
        }

        debug!(count = items.len(), "Items written to Solr");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_client_resolves_update_url() {
        let client = SolrClient::new(SolrCoreConfig::new("http://localhost:8983/solr", "lutece")).unwrap();
        assert_eq!(
            client.update_url().as_str(),
            "http://localhost:8983/solr/lutece/update?commit=true"
        );
    }

    #[test]
    fn test_new_client_rejects_bad_url() {
        let result = SolrClient::new(SolrCoreConfig::new("::", "lutece"));
        assert!(matches!(result, Err(SolrError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_write_empty_batch_sends_nothing() {
        // Port 9 (discard) is never contacted for an empty batch.
        let client = SolrClient::new(SolrCoreConfig::new("http://127.0.0.1:9/solr", "lutece")).unwrap();
        assert!(client.write(&[]).await.is_ok());
    }
}
