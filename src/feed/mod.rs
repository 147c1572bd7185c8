//! The provider's news-sentiment feed.

mod api;
mod model;
mod wire;

pub use model::{ArticleRecord, TickerSentimentEntry};

use crate::core::{IngestClient, IngestError};

/// Query the provider for news on one batch of symbols.
///
/// All symbols go into a single request as a comma-joined `tickers` parameter. The feed is
/// read from the `feed` key, or from `articles` when `feed` is absent or empty. A response
/// without either (for example a rate-limit notice) yields an empty list, as do items that
/// cannot be decoded or carry no URL.
///
/// # Errors
///
/// Returns `IngestError::Upstream` on transport failure, timeout, a non-2xx status, or a
/// body that is not JSON at all.
#[tracing::instrument(level = "debug", skip_all, fields(symbols = symbols.len()))]
pub async fn fetch_batch(
    client: &IngestClient,
    symbols: &[String],
) -> Result<Vec<ArticleRecord>, IngestError> {
    api::fetch_batch(client, symbols).await
}
