use serde_json::Value;

use crate::{
    core::{IngestClient, IngestError, net},
    feed::{
        model::{ArticleRecord, TickerSentimentEntry},
        wire::{self, RawArticle, RawTickerSentiment},
    },
};

pub(super) async fn fetch_batch(
    client: &IngestClient,
    symbols: &[String],
) -> Result<Vec<ArticleRecord>, IngestError> {
    let tickers = symbols.join(",");
    let context = format!("news feed for {tickers}");

    let mut url = client.provider_endpoint().clone();
    url.query_pairs_mut()
        .append_pair("tickers", &tickers)
        .append_pair("apikey", client.api_key());

    let body = net::get_text(client, url)
        .await
        .map_err(|e| IngestError::upstream(&*context, e))?;
    let envelope: Value =
        serde_json::from_str(&body).map_err(|e| IngestError::upstream(&*context, e))?;

    Ok(parse_feed(envelope, &tickers))
}

fn parse_feed(envelope: Value, tickers: &str) -> Vec<ArticleRecord> {
    let Value::Object(mut top) = envelope else {
        tracing::warn!(tickers, "provider response is not an object; treating as empty feed");
        return Vec::new();
    };

    let items = match (top.remove("feed"), top.remove("articles")) {
        (Some(Value::Array(feed)), _) if !feed.is_empty() => feed,
        (_, Some(Value::Array(articles))) => articles,
        _ => {
            if let Some((key, note)) = wire::NOTICE_KEYS
                .iter()
                .find_map(|k| top.get(*k).map(|v| (*k, v)))
            {
                tracing::warn!(tickers, key, note = %note, "provider returned a notice instead of a feed");
            }
            Vec::new()
        }
    };

    items.into_iter().filter_map(article_from_wire).collect()
}

fn article_from_wire(item: Value) -> Option<ArticleRecord> {
    let raw: RawArticle = match serde_json::from_value(item) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::debug!(error = %e, "dropping undecodable feed item");
            return None;
        }
    };

    let url = raw.url.filter(|u| !u.trim().is_empty());
    let Some(url) = url else {
        tracing::debug!(title = ?raw.title, "dropping feed item without url");
        return None;
    };

    let ticker_sentiment = raw
        .ticker_sentiment
        .unwrap_or_default()
        .into_iter()
        .filter_map(sentiment_from_wire)
        .collect();

    Some(ArticleRecord {
        title: raw.title,
        url,
        summary: raw.summary,
        time_published: raw.time_published,
        published_at: raw.published_at,
        ticker_sentiment,
    })
}

fn sentiment_from_wire(entry: Value) -> Option<TickerSentimentEntry> {
    let raw: RawTickerSentiment = match serde_json::from_value(entry) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::debug!(error = %e, "dropping undecodable ticker sentiment entry");
            return None;
        }
    };
    let Some(ticker) = raw.ticker.filter(|t| !t.is_empty()) else {
        tracing::debug!("dropping ticker sentiment entry without ticker");
        return None;
    };
    Some(TickerSentimentEntry {
        ticker,
        sentiment_score: raw.ticker_sentiment_score.as_ref().and_then(wire::Score::value),
        sentiment_label: raw.ticker_sentiment_label.and_then(wire::Label::into_text),
        relevance_score: raw.relevance_score.as_ref().and_then(wire::Score::value),
    })
}
