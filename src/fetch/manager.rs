//! Base-URL-bound JSON fetching

use crate::fetch::{build_client, fetch_json};
use crate::{Error, Result};
use serde_json::Value;
use url::Url;

/// JSON fetcher bound to a base URL.
///
/// The base URL is fixed at construction; build a new manager to point at a
/// different host. It is normalized to directory form (trailing slash) so
/// relative paths append to it instead of replacing its final segment:
/// a base of `https://api.example.com/data/2.5` with path `weather` resolves
/// to `https://api.example.com/data/2.5/weather`.
#[derive(Debug, Clone)]
pub struct HttpManager {
    base_url: Url,
    client: reqwest::Client,
}

impl HttpManager {
    /// Create a manager from an absolute base URL
    pub fn new(base_url: Url) -> Result<Self> {
        let base_url = into_directory_url(base_url)?;
        let client = build_client()?;
        Ok(HttpManager { base_url, client })
    }

    /// Create a manager by parsing a base URL string
    pub fn from_str(base_url: &str) -> Result<Self> {
        let url =
            Url::parse(base_url).map_err(|e| Error::malformed_url(format!("{base_url}: {e}")))?;
        Self::new(url)
    }

    /// The normalized base URL requests are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve `path` against the base URL.
    ///
    /// `None` yields the base URL itself. The path may carry a query string.
    pub fn resolve(&self, path: Option<&str>) -> Result<Url> {
        match path {
            Some(path) => self
                .base_url
                .join(path)
                .map_err(|e| Error::malformed_url(format!("{path}: {e}"))),
            None => Ok(self.base_url.clone()),
        }
    }

    /// Fetch and decode JSON at `path` relative to the base URL.
    ///
    /// Issues one GET per call; the future resolves exactly once with either
    /// the decoded value or an error.
    pub async fn fetch_json(&self, path: Option<&str>) -> Result<Value> {
        let url = self.resolve(path)?;
        fetch_json(&self.client, url).await
    }
}

/// Normalize an absolute URL to directory form
fn into_directory_url(mut url: Url) -> Result<Url> {
    if url.cannot_be_a_base() {
        return Err(Error::malformed_url(format!(
            "{url}: cannot be used as a base URL"
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
