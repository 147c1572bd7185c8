use serde::Deserialize;
use serde_json::Value;

/// Top-level keys the provider uses instead of a feed when it refuses a query.
pub(crate) const NOTICE_KEYS: [&str; 3] = ["Information", "Note", "Error Message"];

#[derive(Deserialize)]
pub(crate) struct RawArticle {
    pub(crate) title: Option<String>,
    pub(crate) url: Option<String>,
    pub(crate) summary: Option<String>,
    pub(crate) time_published: Option<String>,
    pub(crate) published_at: Option<String>,
    // Entries are decoded one by one so a bad entry does not drop the article.
    pub(crate) ticker_sentiment: Option<Vec<Value>>,
}

#[derive(Deserialize)]
pub(crate) struct RawTickerSentiment {
    pub(crate) ticker: Option<String>,
    pub(crate) ticker_sentiment_score: Option<Score>,
    pub(crate) ticker_sentiment_label: Option<Label>,
    pub(crate) relevance_score: Option<Score>,
}

/// Scores arrive as decimal strings (`"0.231"`) or plain numbers.
/// Anything else decodes to `Other` and is read as absent.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum Score {
    Number(f64),
    Text(String),
    Other(Value),
}

impl Score {
    pub(crate) fn value(&self) -> Option<f64> {
        let v = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse().ok()?,
            Self::Other(_) => return None,
        };
        v.is_finite().then_some(v)
    }
}

/// Labels are strings; a bare number is kept in its JSON rendering.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum Label {
    Text(String),
    Other(Value),
}

impl Label {
    pub(crate) fn into_text(self) -> Option<String> {
        match self {
            Self::Text(s) => Some(s),
            Self::Other(Value::Number(n)) => Some(n.to_string()),
            Self::Other(_) => None,
        }
    }
}
