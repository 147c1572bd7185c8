//! Idempotent article writes and per-ticker sentiment writes against the store.

mod api;
mod identity;
mod wire;

pub use identity::ArticleId;

use crate::{
    core::{IngestClient, IngestError},
    feed::{ArticleRecord, TickerSentimentEntry},
};

/// How an article write resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleUpsert {
    /// The store created the article and assigned this id.
    Created(ArticleId),
    /// The store already had an article with this URL (409); the id is derived from the URL.
    Existing(ArticleId),
    /// The store accepted the article but returned no usable id.
    Unidentified,
}

impl ArticleUpsert {
    /// The id sentiment can be attached to, if any.
    pub fn article_id(&self) -> Option<&ArticleId> {
        match self {
            Self::Created(id) | Self::Existing(id) => Some(id),
            Self::Unidentified => None,
        }
    }
}

/// Create `article` in the store, or resolve its id if it already exists.
///
/// POSTs `{title, url, summary, publishedAt}` to `{base}/articles`. On 2xx the store's
/// `articleId` is used. On 409 the response is ignored and the id is computed with
/// [`ArticleId::from_url`], so repeated runs never fail or double-create.
///
/// # Errors
///
/// Returns `IngestError::Upsert` for any other non-2xx status, a transport failure, or a
/// 2xx body that is not JSON.
#[tracing::instrument(level = "debug", skip_all, fields(url = %article.url))]
pub async fn upsert_article(
    client: &IngestClient,
    article: &ArticleRecord,
) -> Result<ArticleUpsert, IngestError> {
    api::upsert_article(client, article).await
}

/// Attach one ticker's sentiment to an article.
///
/// POSTs `{tickerSymbol, tickerSentimentScore, tickerSentimentLabel, relevanceScore}` to
/// `{base}/articles/{articleId}/tickers`.
///
/// # Errors
///
/// Returns `IngestError::Upsert` on any non-2xx status (409 included) or transport failure.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(article_id = %article_id, ticker = %entry.ticker)
)]
pub async fn upsert_ticker_sentiment(
    client: &IngestClient,
    article_id: &ArticleId,
    entry: &TickerSentimentEntry,
) -> Result<(), IngestError> {
    api::upsert_ticker_sentiment(client, article_id, entry).await
}
