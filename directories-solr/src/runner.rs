//! One scheduled pass of an indexer.

use tracing::{error, info};

use directories_solr_pipeline::SolrIndexer;

/// Result of a scheduled pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The indexer is disabled and was not run.
    Disabled,
    /// The indexer ran; the list holds its error messages.
    Completed { errors: Vec<String> },
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        match self {
            Self::Disabled => true,
            Self::Completed { errors } => errors.is_empty(),
        }
    }
}

/// Run the indexer if it is enabled, logging every reported error.
pub async fn run_indexer(indexer: &dyn SolrIndexer) -> RunOutcome {
    let description = indexer.describe();

    if !indexer.is_enabled() {
        info!(indexer = %description.name, "Indexer disabled, skipping run");
        return RunOutcome::Disabled;
    }

    info!(
        indexer = %description.name,
        version = %description.version,
        resource_types = ?indexer.resource_type_names(),
        "Running indexer"
    );

    let errors = indexer.index_documents().await;
    for message in &errors {
        error!(indexer = %description.name, "{}", message);
    }

    info!(
        indexer = %description.name,
        errors = errors.len(),
        "Indexer run finished"
    );
    RunOutcome::Completed { errors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use directories_solr_pipeline::IndexerDescription;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock indexer counting runs.
    struct MockIndexer {
        enabled: bool,
        runs: AtomicUsize,
        errors: Vec<String>,
    }

    impl MockIndexer {
        fn new(enabled: bool, errors: Vec<String>) -> Self {
            Self {
                enabled,
                runs: AtomicUsize::new(0),
                errors,
            }
        }
    }

    #[async_trait]
    impl SolrIndexer for MockIndexer {
        fn is_enabled(&self) -> bool {
            self.enabled
        }

        async fn index_documents(&self) -> Vec<String> {
            self.runs.fetch_add(1, Ordering::SeqCst);
            self.errors.clone()
        }

        fn describe(&self) -> IndexerDescription {
            IndexerDescription {
                name: "MockIndexer".to_string(),
                version: "0.0.1".to_string(),
                description: "mock".to_string(),
            }
        }

        fn resource_type_names(&self) -> &'static [&'static str] {
            &["MOCK"]
        }

        fn resource_uid(&self, resource_id: &str, _resource_type: &str) -> String {
            resource_id.to_string()
        }
    }

    #[tokio::test]
    async fn test_disabled_indexer_not_run() {
        let indexer = MockIndexer::new(false, Vec::new());

        let outcome = run_indexer(&indexer).await;

        assert_eq!(outcome, RunOutcome::Disabled);
        assert_eq!(indexer.runs.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_enabled_indexer_run_once() {
        let indexer = MockIndexer::new(true, vec!["boom".to_string()]);

        let outcome = run_indexer(&indexer).await;

        assert_eq!(indexer.runs.load(Ordering::SeqCst), 1);
        assert!(!outcome.is_success());
        assert_eq!(
            outcome,
            RunOutcome::Completed {
                errors: vec!["boom".to_string()]
            }
        );
    }
}
