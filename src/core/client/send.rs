//! Request dispatch with the client's retry policy applied.

use reqwest::{RequestBuilder, Response};

use crate::core::net::redact;

impl super::IngestClient {
    /// Send `req`, retrying per the configured [`RetryConfig`](super::RetryConfig).
    ///
    /// Returns the final response whatever its status; status handling is the caller's.
    pub(crate) async fn send_with_retry(
        &self,
        req: RequestBuilder,
    ) -> Result<Response, reqwest::Error> {
        let cfg = self.retry();
        if !cfg.enabled {
            return req.send().await;
        }

        let mut attempt: u32 = 0;
        loop {
            // Bodies built from `.json()` are always cloneable; a streaming body is sent once.
            let Some(this) = req.try_clone() else {
                return req.send().await;
            };

            match this.send().await {
                Ok(resp) => {
                    let status = resp.status().as_u16();
                    if attempt >= cfg.max_retries || !cfg.should_retry_status(status) {
                        return Ok(resp);
                    }
                    tracing::debug!(
                        status,
                        attempt,
                        url = %redact(resp.url()),
                        "retrying after status"
                    );
                }
                Err(e) => {
                    if attempt >= cfg.max_retries || !cfg.should_retry_error(&e) {
                        return Err(e);
                    }
                    let url = e.url().map(redact);
                    tracing::debug!(
                        attempt,
                        url = url.as_deref().unwrap_or_default(),
                        error = %e.without_url(),
                        "retrying after transport error"
                    );
                }
            }

            tokio::time::sleep(cfg.backoff.delay(attempt)).await;
            attempt += 1;
        }
    }
}
