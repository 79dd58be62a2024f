//! Asynchronous JSON fetching over HTTP
//!
//! Two entry points share one fetch primitive:
//! - [`HttpManager`] resolves relative paths against a stored base URL
//! - [`fetch_json_at_url`] fetches a fully qualified URL string directly
//!
//! Every fetch issues a single GET, reads the full body and decodes it as
//! JSON. The returned future resolves exactly once with either the decoded
//! value or an error, never both. Futures resolve on whichever tokio runtime
//! polls them; callers that need a particular thread re-dispatch themselves.
//! There is no retry, no caching and no ordering guarantee between
//! concurrent fetches.

mod manager;

pub use manager::HttpManager;

use crate::{Error, Result};
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Per-request timeout applied by every fetch
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetch and decode JSON from a fully qualified URL string.
///
/// A string that does not parse as an absolute URL fails with
/// [`Error::MalformedUrl`] before any network activity.
pub async fn fetch_json_at_url(url_str: &str) -> Result<Value> {
    let url = Url::parse(url_str).map_err(|e| Error::malformed_url(format!("{url_str}: {e}")))?;
    let client = build_client()?;
    fetch_json(&client, url).await
}

/// Build an HTTP client with the standard request timeout
pub(crate) fn build_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| Error::transport(e.to_string()))
}

/// Shared fetch primitive: GET the URL and decode the body as JSON.
///
/// Non-2xx responses fail with [`Error::Status`] and the body is not
/// decoded.
pub(crate) async fn fetch_json(client: &reqwest::Client, url: Url) -> Result<Value> {
    tracing::debug!("GET {}", url);

    let resp = client.get(url).send().await?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(Error::status(status.as_u16(), body));
    }

    let bytes = resp.bytes().await?;
    let value = serde_json::from_slice(&bytes)?;
    Ok(value)
}
