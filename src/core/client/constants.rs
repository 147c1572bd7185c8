//! Centralized constants for default endpoints, timeouts and UA.

use std::time::Duration;

pub(crate) const USER_AGENT: &str = concat!("news-sentiment-ingest/", env!("CARGO_PKG_VERSION"));

/// Provider news-sentiment query; `tickers` and `apikey` are appended per batch.
pub(crate) const DEFAULT_PROVIDER_ENDPOINT: &str =
    "https://www.alphavantage.co/query?function=NEWS_SENTIMENT";

/// Per-request timeout applied to every provider and store call.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

pub(crate) const ENV_API_KEY: &str = "ALPHAVANTAGE_API_KEY";
pub(crate) const ENV_STORE_BASE_URL: &str = "API_BASE_URL";
pub(crate) const ENV_PROVIDER_ENDPOINT: &str = "ALPHAVANTAGE_ENDPOINT";
pub(crate) const ENV_TIMEOUT_SECS: &str = "INGEST_TIMEOUT_SECS";
