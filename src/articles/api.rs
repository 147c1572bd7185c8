use crate::{
    articles::{
        ArticleUpsert,
        identity::ArticleId,
        wire::{CreatedArticle, NewArticle, NewTickerSentiment},
    },
    core::{IngestClient, IngestError, RequestError, net, net::PostOutcome},
    feed::{ArticleRecord, TickerSentimentEntry},
};

pub(super) async fn upsert_article(
    client: &IngestClient,
    article: &ArticleRecord,
) -> Result<ArticleUpsert, IngestError> {
    let context = || format!("article {}", article.url);

    let url = client
        .store_url(&["articles"])
        .map_err(|e| IngestError::upsert(context(), e))?;
    let payload = NewArticle {
        title: article.title.as_deref(),
        url: &article.url,
        summary: article.summary.as_deref(),
        published_at: article.published(),
    };

    match net::post_json(client, url, &payload).await {
        Ok(PostOutcome::Created(body)) => {
            let created: CreatedArticle =
                serde_json::from_str(&body).map_err(|e| IngestError::upsert(context(), e))?;
            Ok(created
                .article_id
                .filter(|id| !id.is_empty())
                .map_or(ArticleUpsert::Unidentified, |id| {
                    ArticleUpsert::Created(ArticleId::new(id))
                }))
        }
        Ok(PostOutcome::Conflict) => {
            Ok(ArticleUpsert::Existing(ArticleId::from_url(&article.url)))
        }
        Err(e) => Err(IngestError::upsert(context(), e)),
    }
}

pub(super) async fn upsert_ticker_sentiment(
    client: &IngestClient,
    article_id: &ArticleId,
    entry: &TickerSentimentEntry,
) -> Result<(), IngestError> {
    let context = || format!("sentiment {} on article {article_id}", entry.ticker);

    let url = client
        .store_url(&["articles", article_id.as_str(), "tickers"])
        .map_err(|e| IngestError::upsert(context(), e))?;
    let payload = NewTickerSentiment {
        ticker_symbol: &entry.ticker,
        ticker_sentiment_score: entry.sentiment_score,
        ticker_sentiment_label: entry.sentiment_label.as_deref(),
        relevance_score: entry.relevance_score,
    };

    match net::post_json(client, url.clone(), &payload).await {
        Ok(PostOutcome::Created(_)) => Ok(()),
        // Each sentiment write is a fresh create; a conflict is an ordinary failure here.
        Ok(PostOutcome::Conflict) => Err(IngestError::upsert(
            context(),
            RequestError::Status {
                status: 409,
                url: url.to_string(),
            },
        )),
        Err(e) => Err(IngestError::upsert(context(), e)),
    }
}
