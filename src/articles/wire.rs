use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub(crate) struct NewArticle<'a> {
    pub(crate) title: Option<&'a str>,
    pub(crate) url: &'a str,
    pub(crate) summary: Option<&'a str>,
    #[serde(rename = "publishedAt")]
    pub(crate) published_at: Option<&'a str>,
}

#[derive(Deserialize)]
pub(crate) struct CreatedArticle {
    #[serde(rename = "articleId")]
    pub(crate) article_id: Option<String>,
}

#[derive(Serialize)]
pub(crate) struct NewTickerSentiment<'a> {
    #[serde(rename = "tickerSymbol")]
    pub(crate) ticker_symbol: &'a str,
    #[serde(rename = "tickerSentimentScore")]
    pub(crate) ticker_sentiment_score: Option<f64>,
    #[serde(rename = "tickerSentimentLabel")]
    pub(crate) ticker_sentiment_label: Option<&'a str>,
    #[serde(rename = "relevanceScore")]
    pub(crate) relevance_score: Option<f64>,
}
