use serde::Serialize;

/// One article from the provider's news-sentiment feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleRecord {
    /// The headline.
    pub title: Option<String>,
    /// The canonical link; this is what identifies the article. Never blank.
    pub url: String,
    /// The provider's summary of the article.
    pub summary: Option<String>,
    /// Publication time in the provider's compact form (`20240105T143000`).
    pub time_published: Option<String>,
    /// Alternate publication field some feed shapes use.
    pub published_at: Option<String>,
    /// Per-ticker sentiment attached to the article.
    pub ticker_sentiment: Vec<TickerSentimentEntry>,
}

impl ArticleRecord {
    /// A record with just a URL; handy for building feeds by hand.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            title: None,
            url: url.into(),
            summary: None,
            time_published: None,
            published_at: None,
            ticker_sentiment: Vec::new(),
        }
    }

    /// The publication timestamp, preferring `time_published` over `published_at`.
    pub fn published(&self) -> Option<&str> {
        [&self.time_published, &self.published_at]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|s| !s.trim().is_empty())
    }
}

/// The provider's sentiment assessment of one ticker within one article.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickerSentimentEntry {
    pub ticker: String,
    pub sentiment_score: Option<f64>,
    /// e.g. `Bullish`, `Somewhat-Bearish`, `Neutral`.
    pub sentiment_label: Option<String>,
    /// How relevant the article is to this ticker, in `0..=1`.
    pub relevance_score: Option<f64>,
}

impl TickerSentimentEntry {
    pub fn new(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            sentiment_score: None,
            sentiment_label: None,
            relevance_score: None,
        }
    }
}
