use std::process::ExitCode;

use directories_solr::logging::init_tracing;
use directories_solr::{run_indexer, AppError, Dependencies};

#[tokio::main]
async fn main() -> Result<ExitCode, AppError> {
    dotenv::dotenv().ok();
    init_tracing();

    let deps = Dependencies::from_env()?;
    let outcome = run_indexer(&deps.indexer).await;

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
