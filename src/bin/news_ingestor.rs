//! One ingestion pass, configured from the environment.
//!
//! Prints `{"ok":true,"batches":N}` on success. Exits non-zero on a configuration or
//! catalog failure.

use std::process::ExitCode;

use news_sentiment_ingest::{IngestClientBuilder, IngestError, IngestReport, Ingestor};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt().with_env_filter(filter).with_target(false).with_writer(std::io::stderr).init();

    match run().await {
        Ok(report) => match serde_json::to_string(&report) {
            Ok(body) => {
                println!("{body}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to encode report");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            tracing::error!(error = %e, "ingestion aborted");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<IngestReport, IngestError> {
    let client = IngestClientBuilder::from_env()?.build()?;
    Ingestor::new(client).run().await
}
