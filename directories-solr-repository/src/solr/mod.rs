//! Solr implementation of the index writer.
//!
//! This module provides a concrete implementation of `SolrIndexWriter`
//! using the Solr JSON update handler over HTTP.

mod client;
mod core_config;

pub use client::SolrClient;
pub use core_config::SolrCoreConfig;
