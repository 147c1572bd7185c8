//! Public client surface + builder.
//! Internals are split into `send` (retrying dispatch) and `constants` (UA + defaults).

mod constants;
pub mod retry;
mod send;

use std::fmt;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::core::{IngestError, RequestError};
use constants::{
    DEFAULT_PROVIDER_ENDPOINT, DEFAULT_TIMEOUT, ENV_API_KEY, ENV_PROVIDER_ENDPOINT,
    ENV_STORE_BASE_URL, ENV_TIMEOUT_SECS, USER_AGENT,
};
pub use retry::{Backoff, RetryConfig};

/// A configured HTTP client bound to one provider account and one store.
///
/// Built once per run from an explicit [`IngestClientBuilder`] and shared by every
/// pipeline stage. It is cheap to clone.
#[derive(Clone)]
pub struct IngestClient {
    http: Client,
    store_base: Url,
    provider_endpoint: Url,
    api_key: String,
    retry: RetryConfig,
}

impl fmt::Debug for IngestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestClient")
            .field("store_base", &self.store_base.as_str())
            .field("provider_endpoint", &self.provider_endpoint.as_str())
            .field("api_key", &"<redacted>")
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

impl IngestClient {
    /// Create a new builder.
    pub fn builder() -> IngestClientBuilder {
        IngestClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn provider_endpoint(&self) -> &Url {
        &self.provider_endpoint
    }
    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }
    pub(crate) fn retry(&self) -> &RetryConfig {
        &self.retry
    }

    /// The store base URL this client writes to.
    pub fn store_base(&self) -> &Url {
        &self.store_base
    }

    /// `{base}/seg1/seg2/...`, keeping any path prefix on the base.
    pub(crate) fn store_url(&self, segments: &[&str]) -> Result<Url, RequestError> {
        let mut url = self.store_base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default, Clone)]
pub struct IngestClientBuilder {
    api_key: Option<String>,
    store_base_url: Option<String>,
    provider_endpoint: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    retry: Option<RetryConfig>,
}

impl fmt::Debug for IngestClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestClientBuilder")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("store_base_url", &self.store_base_url)
            .field("provider_endpoint", &self.provider_endpoint)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl IngestClientBuilder {
    /// Seed a builder from the process environment.
    ///
    /// # Errors
    /// Returns `IngestError::Config` if `INGEST_TIMEOUT_SECS` is set but not a whole number.
    pub fn from_env() -> Result<Self, IngestError> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Seed a builder from an arbitrary variable lookup.
    ///
    /// Reads `ALPHAVANTAGE_API_KEY` and `API_BASE_URL`, plus the optional
    /// `ALPHAVANTAGE_ENDPOINT` and `INGEST_TIMEOUT_SECS` overrides. Missing required
    /// values are reported by [`build`](Self::build), not here.
    ///
    /// # Errors
    /// Returns `IngestError::Config` if the timeout override is not a whole number of seconds.
    pub fn from_env_with<F>(lookup: F) -> Result<Self, IngestError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self {
            api_key: lookup(ENV_API_KEY),
            store_base_url: lookup(ENV_STORE_BASE_URL),
            provider_endpoint: lookup(ENV_PROVIDER_ENDPOINT),
            ..Self::default()
        };

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                IngestError::Config(format!("{ENV_TIMEOUT_SECS} must be whole seconds, got {raw:?}"))
            })?;
            builder.timeout = Some(Duration::from_secs(secs));
        }

        Ok(builder)
    }

    /// The provider API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// The store base URL (e.g. `https://store.example.com/api`).
    pub fn store_base_url(mut self, url: impl Into<String>) -> Self {
        self.store_base_url = Some(url.into());
        self
    }

    /// Override the provider news-sentiment endpoint.
    pub fn provider_endpoint(mut self, url: impl Into<String>) -> Self {
        self.provider_endpoint = Some(url.into());
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set the per-request timeout. Default: 20 seconds.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set the retry policy. Default: disabled.
    pub fn retry_config(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Validate the configuration and build the client.
    ///
    /// # Errors
    /// Returns `IngestError::Config` if the API key or store base URL is missing or blank,
    /// if either URL is unusable, or if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<IngestClient, IngestError> {
        let api_key = required(self.api_key, ENV_API_KEY)?;
        let store_base = required(self.store_base_url, ENV_STORE_BASE_URL)?;
        let store_base = parse_http_url(&store_base, ENV_STORE_BASE_URL)?;
        let provider_endpoint = parse_http_url(
            self.provider_endpoint
                .as_deref()
                .unwrap_or(DEFAULT_PROVIDER_ENDPOINT),
            ENV_PROVIDER_ENDPOINT,
        )?;

        let http = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(|e| IngestError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(IngestClient {
            http,
            store_base,
            provider_endpoint,
            api_key,
            retry: self.retry.unwrap_or_default(),
        })
    }
}

fn required(value: Option<String>, name: &str) -> Result<String, IngestError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(IngestError::Config(format!("missing required setting {name}"))),
    }
}

fn parse_http_url(raw: &str, name: &str) -> Result<Url, IngestError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| IngestError::Config(format!("{name} is not a valid URL ({e}): {raw}")))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(IngestError::Config(format!(
            "{name} must be an http(s) URL: {raw}"
        )));
    }
    Ok(url)
}
