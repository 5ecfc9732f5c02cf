//! HTTP transport for the photo API.
//!
//! [`PhotoTransport`] is the seam between the fetch orchestrator and the
//! network: it turns an [`Endpoint`] into a response body. [`UnsplashClient`]
//! is the reqwest-backed implementation; tests substitute scripted mocks.

use crate::domain::FetchError;
use crate::infrastructure::AccessKey;
use crate::Config;
use async_trait::async_trait;
use std::time::Duration;

/// Longest body excerpt carried in an [`FetchError::Upstream`] message.
const ERROR_EXCERPT_CHARS: usize = 200;

/// Requested slice of the photo collection.
///
/// An empty `term` means "default feed".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub term: String,
    pub page: u32,
    pub per_page: u32,
}

/// Concrete API endpoint for a [`FetchRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `GET /search/photos?query&page&per_page`
    Search { query: String, page: u32, per_page: u32 },
    /// `GET /photos?page&per_page`
    Feed { page: u32, per_page: u32 },
}

impl Endpoint {
    /// Chooses the keyword-search endpoint for a non-empty term, the feed otherwise.
    ///
    /// ```
    /// use pixgrid::api::{Endpoint, FetchRequest};
    ///
    /// let feed = Endpoint::for_request(&FetchRequest { term: "  ".into(), page: 2, per_page: 12 });
    /// assert_eq!(feed, Endpoint::Feed { page: 2, per_page: 12 });
    /// ```
    #[must_use]
    pub fn for_request(request: &FetchRequest) -> Self {
        let term = request.term.trim();
        if term.is_empty() {
            Self::Feed {
                page: request.page,
                per_page: request.per_page,
            }
        } else {
            Self::Search {
                query: term.to_string(),
                page: request.page,
                per_page: request.per_page,
            }
        }
    }

    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Search { .. } => "/search/photos",
            Self::Feed { .. } => "/photos",
        }
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        match self {
            Self::Search { page, .. } | Self::Feed { page, .. } => *page,
        }
    }

    #[must_use]
    pub const fn per_page(&self) -> u32 {
        match self {
            Self::Search { per_page, .. } | Self::Feed { per_page, .. } => *per_page,
        }
    }

    /// Query parameters, without the access key.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(3);
        if let Self::Search { query, .. } = self {
            pairs.push(("query", query.clone()));
        }
        pairs.push(("page", self.page().to_string()));
        pairs.push(("per_page", self.per_page().to_string()));
        pairs
    }
}

/// Transport abstraction over the photo API.
///
/// Implementations return the raw response body of a successful request.
/// Every failure is reported as a [`FetchError`]; the caller never sees a
/// transport-specific error type.
#[async_trait]
pub trait PhotoTransport: Send + Sync {
    /// Performs the request for `endpoint` and returns the body text.
    ///
    /// # Errors
    ///
    /// Missing access key, network failure or a non-success status.
    async fn get(&self, endpoint: &Endpoint) -> Result<String, FetchError>;
}

/// reqwest-backed client for the Unsplash API.
///
/// The access key is resolved on every request, so exporting the variable
/// after startup takes effect without a restart.
pub struct UnsplashClient {
    http: reqwest::Client,
    base_url: String,
    access_key: AccessKey,
}

impl UnsplashClient {
    /// Builds a client from configuration.
    ///
    /// Falls back to a default reqwest client if the builder rejects the
    /// timeout or user agent.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(concat!("pixgrid/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                tracing::debug!(error = %e, "failed to build http client, using defaults");
                reqwest::Client::new()
            });

        Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            access_key: AccessKey::from_config(config),
        }
    }

    /// Full URL for an endpoint, without query parameters.
    #[must_use]
    pub fn url_for(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

impl std::fmt::Debug for UnsplashClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnsplashClient")
            .field("base_url", &self.base_url)
            .field("access_key", &self.access_key)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl PhotoTransport for UnsplashClient {
    async fn get(&self, endpoint: &Endpoint) -> Result<String, FetchError> {
        let key = self.access_key.resolve()?;

        let mut query = endpoint.query_pairs();
        query.push(("client_id", key));

        let url = self.url_for(endpoint);
        tracing::debug!(url = %url, page = endpoint.page(), "sending photo request");

        let response = self
            .http
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let excerpt: String = body.chars().take(ERROR_EXCERPT_CHARS).collect();
            let message = if excerpt.trim().is_empty() {
                status.canonical_reason().unwrap_or("unknown status").to_string()
            } else {
                excerpt
            };
            tracing::debug!(status = status.as_u16(), "photo api returned error status");
            return Err(FetchError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.without_url().to_string()))
    }
}
