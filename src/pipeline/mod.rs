//! The ingestion driver: catalog, batches, articles, sentiment.

mod report;

pub use report::{IngestReport, IngestStats};

use crate::{
    articles::{self, ArticleId, ArticleUpsert},
    batch::{BATCH_SIZE, chunk},
    catalog::{self, StockUniverse},
    core::{IngestClient, IngestError},
    feed::{self, ArticleRecord},
};

/// What to do when the provider request for a batch fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BatchFailurePolicy {
    /// Log the failure, count it, and continue with the next batch. (Default)
    #[default]
    Isolate,
    /// Abort the run with the error.
    Abort,
}

/// Runs one ingestion pass.
///
/// Batches, the articles in a batch, and the sentiment entries of an article are all
/// processed one at a time. Article and sentiment failures are logged and skipped; only a
/// catalog failure (or a batch failure under [`BatchFailurePolicy::Abort`]) ends the run early.
#[derive(Debug, Clone)]
pub struct Ingestor {
    client: IngestClient,
    on_batch_failure: BatchFailurePolicy,
}

impl Ingestor {
    pub fn new(client: IngestClient) -> Self {
        Self {
            client,
            on_batch_failure: BatchFailurePolicy::default(),
        }
    }

    /// Choose how a failed batch fetch is handled.
    #[must_use]
    pub const fn on_batch_failure(mut self, policy: BatchFailurePolicy) -> Self {
        self.on_batch_failure = policy;
        self
    }

    /// Discover symbols, then fetch and persist every batch.
    ///
    /// # Errors
    ///
    /// Returns `IngestError::Upstream` if the ticker catalog cannot be read, or if a batch
    /// fetch fails while the policy is [`BatchFailurePolicy::Abort`].
    pub async fn run(&self) -> Result<IngestReport, IngestError> {
        let universe = catalog::load_stock_universe(&self.client).await?;
        let batches = chunk(universe.symbols(), BATCH_SIZE);
        tracing::info!(
            symbols = universe.len(),
            batches = batches.len(),
            "starting news sentiment ingestion"
        );

        let mut stats = IngestStats::default();
        for (index, batch) in batches.iter().enumerate() {
            if let Err(e) = self.ingest_batch(batch, &universe, &mut stats).await {
                match self.on_batch_failure {
                    BatchFailurePolicy::Abort => return Err(e),
                    BatchFailurePolicy::Isolate => {
                        tracing::warn!(
                            batch = index,
                            tickers = %batch.join(","),
                            error = %e,
                            "batch fetch failed; continuing"
                        );
                        stats.batches_failed += 1;
                    }
                }
            }
        }

        tracing::info!(batches = batches.len(), ?stats, "news sentiment ingestion finished");
        Ok(IngestReport {
            ok: true,
            batches: batches.len(),
            stats,
        })
    }

    /// Fetch one batch and persist its articles and their known-ticker sentiment.
    ///
    /// # Errors
    ///
    /// Returns `IngestError::Upstream` only if the batch's feed cannot be fetched. Failures
    /// while writing articles or sentiment are logged and counted in `stats`.
    pub async fn ingest_batch(
        &self,
        symbols: &[String],
        universe: &StockUniverse,
        stats: &mut IngestStats,
    ) -> Result<(), IngestError> {
        let articles = feed::fetch_batch(&self.client, symbols).await?;
        tracing::debug!(tickers = %symbols.join(","), articles = articles.len(), "fetched batch");

        for article in &articles {
            self.ingest_article(article, universe, stats).await;
        }
        Ok(())
    }

    async fn ingest_article(
        &self,
        article: &ArticleRecord,
        universe: &StockUniverse,
        stats: &mut IngestStats,
    ) {
        stats.articles_seen += 1;

        let upsert = match articles::upsert_article(&self.client, article).await {
            Ok(upsert) => upsert,
            Err(e) => {
                tracing::warn!(
                    url = %article.url,
                    error = %e,
                    "failed to upsert article; skipping"
                );
                stats.articles_failed += 1;
                return;
            }
        };

        let article_id = match &upsert {
            ArticleUpsert::Created(id) => {
                stats.articles_created += 1;
                id
            }
            ArticleUpsert::Existing(id) => {
                stats.articles_existing += 1;
                id
            }
            ArticleUpsert::Unidentified => {
                stats.articles_unidentified += 1;
                return;
            }
        };

        self.attach_sentiment(article, article_id, universe, stats).await;
    }

    async fn attach_sentiment(
        &self,
        article: &ArticleRecord,
        article_id: &ArticleId,
        universe: &StockUniverse,
        stats: &mut IngestStats,
    ) {
        for entry in &article.ticker_sentiment {
            if !universe.contains(&entry.ticker) {
                stats.sentiments_skipped += 1;
                continue;
            }

            match articles::upsert_ticker_sentiment(&self.client, article_id, entry).await {
                Ok(()) => stats.sentiments_written += 1,
                Err(e) => {
                    tracing::warn!(
                        url = %article.url,
                        %article_id,
                        ticker = %entry.ticker,
                        error = %e,
                        "failed to upsert ticker sentiment; skipping"
                    );
                    stats.sentiments_failed += 1;
                }
            }
        }
    }
}
