use reqwest::StatusCode;
use serde::Serialize;
use url::Url;

use crate::core::{IngestClient, RequestError};

/// Result of a JSON POST the store may reject as a duplicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PostOutcome {
    /// 2xx; carries the response body.
    Created(String),
    /// 409; the resource already exists. The body is not inspected.
    Conflict,
}

/// GET `url` and return the body of a 2xx response.
pub(crate) async fn get_text(client: &IngestClient, url: Url) -> Result<String, RequestError> {
    let secret = carries_key(&url);
    let scrub = |e: reqwest::Error| if secret { e.without_url() } else { e };

    let resp = client
        .send_with_retry(client.http().get(url))
        .await
        .map_err(scrub)?;
    let status = resp.status();
    if !status.is_success() {
        return Err(RequestError::Status {
            status: status.as_u16(),
            url: redact(resp.url()),
        });
    }
    Ok(resp.text().await.map_err(scrub)?)
}

/// POST `body` as JSON. Any status other than 2xx or 409 is an error.
pub(crate) async fn post_json<B: Serialize + ?Sized>(
    client: &IngestClient,
    url: Url,
    body: &B,
) -> Result<PostOutcome, RequestError> {
    let resp = client
        .send_with_retry(client.http().post(url).json(body))
        .await?;
    let status = resp.status();

    if status == StatusCode::CONFLICT {
        return Ok(PostOutcome::Conflict);
    }
    if !status.is_success() {
        return Err(RequestError::Status {
            status: status.as_u16(),
            url: redact(resp.url()),
        });
    }
    Ok(PostOutcome::Created(resp.text().await?))
}

/// Render a URL for error messages with the provider key masked.
pub(crate) fn redact(url: &Url) -> String {
    if !carries_key(url) {
        return url.to_string();
    }
    let mut masked = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "apikey" { "***".into() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked.to_string()
}

fn carries_key(url: &Url) -> bool {
    url.query_pairs().any(|(k, _)| k == "apikey")
}
