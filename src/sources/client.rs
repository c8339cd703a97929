//! Configured HTTP client issuing JSON GET requests against one base URL.

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::{debug, warn};

use super::{ApiError, Result};

/// Thin wrapper over a shared `reqwest::Client` bound to a base URL.
///
/// Cloning is cheap; the inner client pools connections.
#[derive(Clone, Debug)]
pub struct ApiClient {
    /// Base URL without a trailing slash.
    base_url: String,
    /// Shared client with default headers applied.
    http: reqwest::Client,
}

impl ApiClient {
    /// What: Build a client for `base_url` with JSON request headers.
    ///
    /// Inputs:
    /// - `base_url`: Absolute `http(s)` URL; a trailing `/` is dropped.
    ///
    /// Output:
    /// - `Ok(ApiClient)` ready for [`ApiClient::get_json`].
    ///
    /// # Errors
    /// - `ApiError::InvalidBaseUrl` when `base_url` does not parse or is not `http(s)`.
    /// - `ApiError::Transport` when the underlying client cannot be built.
    ///
    /// Details:
    /// - Sends `Content-Type: application/json` and `Accept: application/json` on every
    ///   request. No auth header, no retry, no timeout beyond reqwest defaults.
    pub fn new(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let parsed = reqwest::Url::parse(trimmed)
            .map_err(|_| ApiError::InvalidBaseUrl(base_url.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let http = reqwest::Client::builder()
            .user_agent(format!("countrydir/{}", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .map_err(|source| ApiError::Transport {
                url: trimmed.to_string(),
                source,
            })?;
        Ok(Self {
            base_url: trimmed.to_string(),
            http,
        })
    }

    /// Base URL requests are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// What: Resolve `path` against the base URL.
    ///
    /// Details:
    /// - Inserts exactly one `/` between base and path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// What: Issue `GET {base}{path}` and parse the body as JSON.
    ///
    /// Inputs:
    /// - `path`: Endpoint path such as `/all`.
    ///
    /// Output:
    /// - Parsed JSON body.
    ///
    /// # Errors
    /// - `ApiError::Transport` on connection or body read failures.
    /// - `ApiError::Status` for any non-2xx status.
    /// - `ApiError::Decode` when the body is not valid JSON.
    pub async fn get_json(&self, path: &str) -> Result<Value> {
        self.fetch_json(self.url_for(path)).await
    }

    /// What: Issue a GET for the base URL extended by `segments` and parse the body.
    ///
    /// Inputs:
    /// - `segments`: Raw path segments; each is percent-encoded, so user text such as
    ///   `"south africa"` or `"a/b"` stays a single segment.
    ///
    /// # Errors
    /// - Same as [`ApiClient::get_json`]; `ApiError::InvalidBaseUrl` if the base cannot
    ///   take path segments.
    pub async fn get_json_segments(&self, segments: &[&str]) -> Result<Value> {
        let url = self.segments_url(segments)?;
        self.fetch_json(url).await
    }

    /// Build the percent-encoded URL for `segments` below the base URL.
    fn segments_url(&self, segments: &[&str]) -> Result<String> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.clone()))?;
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidBaseUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url.to_string())
    }

    /// Shared GET + status check + JSON decode.
    async fn fetch_json(&self, url: String) -> Result<Value> {
        debug!(url = %url, "GET");
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;
        let status = resp.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "non-success status");
            return Err(ApiError::Status {
                url,
                status: status.as_u16(),
            });
        }
        let body = resp.bytes().await.map_err(|source| ApiError::Transport {
            url: url.clone(),
            source,
        })?;
        debug!(url = %url, bytes = body.len(), "response received");
        serde_json::from_slice(&body).map_err(|source| ApiError::Decode { url, source })
    }
}
