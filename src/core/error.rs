use thiserror::Error;

/// A failure of a single HTTP exchange with the provider or the store.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The request could not be sent or the response could not be read (includes timeouts).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A request URL could not be built.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server answered with a status this call does not accept.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The response body was not the JSON this call expects.
    #[error("JSON decoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The primary error type for the ingestion pipeline.
///
/// Only `Config` and catalog `Upstream` failures end a run. `Upsert` failures are
/// caught by the driver per article or per sentiment entry and logged.
#[derive(Debug, Error)]
pub enum IngestError {
    /// A required setting is missing or unusable. Raised before any network call.
    #[error("configuration error: {0}")]
    Config(String),

    /// Reading from the symbol catalog or the news provider failed.
    #[error("upstream request failed ({context}): {source}")]
    Upstream {
        /// What was being fetched.
        context: String,
        /// The underlying request failure.
        #[source]
        source: RequestError,
    },

    /// Writing an article or a ticker sentiment to the store failed.
    #[error("upsert failed ({context}): {source}")]
    Upsert {
        /// What was being written.
        context: String,
        /// The underlying request failure.
        #[source]
        source: RequestError,
    },
}

impl IngestError {
    pub(crate) fn upstream(context: impl Into<String>, source: impl Into<RequestError>) -> Self {
        Self::Upstream {
            context: context.into(),
            source: source.into(),
        }
    }

    pub(crate) fn upsert(context: impl Into<String>, source: impl Into<RequestError>) -> Self {
        Self::Upsert {
            context: context.into(),
            source: source.into(),
        }
    }

    fn request(&self) -> Option<&RequestError> {
        match self {
            Self::Config(_) => None,
            Self::Upstream { source, .. } | Self::Upsert { source, .. } => Some(source),
        }
    }

    /// The HTTP status behind this error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self.request()? {
            RequestError::Status { status, .. } => Some(*status),
            RequestError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the call was cut off by the request timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self.request(), Some(RequestError::Http(e)) if e.is_timeout())
    }
}
