//! Loader module for the directories indexer pipeline.
//!
//! Accumulates built items and writes them to Solr.

use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::errors::IndexerError;
use directories_solr_repository::SolrIndexWriter;
use directories_solr_shared::SolrItem;

/// Loader that writes the items of a run to Solr.
///
/// Items are kept in memory until [`BatchLoader::flush`], which hands the
/// whole batch to the writer in one call. Failed writes are not retried.
pub struct BatchLoader {
    writer: Arc<dyn SolrIndexWriter>,
    pending: Vec<SolrItem>,
}

impl BatchLoader {
    /// Create a new loader writing through the given writer.
    pub fn new(writer: Arc<dyn SolrIndexWriter>) -> Self {
        Self {
            writer,
            pending: Vec::new(),
        }
    }

    /// Queue an item for the next flush.
    pub fn add(&mut self, item: SolrItem) {
        self.pending.push(item);
    }

    /// Number of queued items.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Write all queued items and return how many were written.
    ///
    /// The queue is emptied whether or not the write succeeds.
    #[instrument(skip(self), fields(count = self.pending.len()))]
    pub async fn flush(&mut self) -> Result<usize, IndexerError> {
        let items: Vec<SolrItem> = self.pending.drain(..).collect();
        let count = items.len();

        info!(count = count, "Writing items to Solr");

        match self.writer.write(&items).await {
            Ok(()) => Ok(count),
            Err(e) => {
                error!(error = %e, count = count, "Failed to write items");
                Err(IndexerError::BatchWrite(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use directories_solr_repository::SolrError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock writer counting calls and items.
    struct MockWriter {
        calls: AtomicUsize,
        written: AtomicUsize,
        fail: bool,
    }

    impl MockWriter {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                written: AtomicUsize::new(0),
                fail,
            }
        }
    }

    #[async_trait]
    impl SolrIndexWriter for MockWriter {
        async fn write(&self, items: &[SolrItem]) -> Result<(), SolrError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(SolrError::write("status 503"));
            }
            self.written.fetch_add(items.len(), Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_flush_writes_once() {
        let writer = Arc::new(MockWriter::new(false));
        let mut loader = BatchLoader::new(writer.clone());

        loader.add(SolrItem::new("1_entity", Utc::now()));
        loader.add(SolrItem::new("2_entity", Utc::now()));
        assert_eq!(loader.len(), 2);

        let written = loader.flush().await.unwrap();

        assert_eq!(written, 2);
        assert!(loader.is_empty());
        assert_eq!(writer.calls.load(Ordering::SeqCst), 1);
        assert_eq!(writer.written.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_flush_failure() {
        let writer = Arc::new(MockWriter::new(true));
        let mut loader = BatchLoader::new(writer.clone());
        loader.add(SolrItem::new("1_entity", Utc::now()));

        let result = loader.flush().await;

        assert!(matches!(result, Err(IndexerError::BatchWrite(_))));
        assert!(loader.is_empty());
        assert_eq!(writer.calls.load(Ordering::SeqCst), 1);
    }
}
