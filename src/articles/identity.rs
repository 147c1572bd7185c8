use std::fmt;

use serde::Serialize;
use sha2::{Digest, Sha256};

/// The store's key for an article.
///
/// The store derives it as the lowercase hex SHA-256 of the trimmed article URL, so an
/// existing article's key can be computed here without asking the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ArticleId(String);

impl ArticleId {
    /// Wrap a key the store assigned.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive the key the store uses for `url`.
    pub fn from_url(url: &str) -> Self {
        let digest = Sha256::digest(url.trim().as_bytes());
        Self(format!("{digest:x}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ArticleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
