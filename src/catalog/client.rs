use super::types::{Category, CategoryEnvelope, CategoryWindow};
use futures::StreamExt;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Category listing endpoint, relative to the configured base URL.
pub const CATEGORY_ENDPOINT: &str = "api/category/fetch/all";

const MAX_RESPONSE_SIZE: usize = 1024 * 1024; // 1MB

/// Errors that can occur while loading the category list.
///
/// Every variant ends up as a failed load in the menu; none of them are shown
/// to the user. They exist so tests and logs can tell "the catalog is empty"
/// apart from "the request went wrong".
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level error (DNS, connection refused, TLS, ...)
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// The request did not complete within the configured timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
    /// HTTP response with non-2xx status code
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    /// Response body exceeded the 1MB size limit
    #[error("Response too large")]
    ResponseTooLarge,
    /// Body was not valid JSON or did not match the envelope shape
    #[error("Malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),
    /// Body was empty or the JSON literal `null`
    #[error("Empty payload")]
    EmptyPayload,
    /// Envelope decoded but carried no `categories` field (or `null`)
    #[error("Payload has no categories field")]
    MissingCategories,
    /// The endpoint path could not be joined onto the base URL
    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
    /// The background task running the fetch panicked
    #[error("Fetch task panicked: {0}")]
    Panicked(String),
}

/// HTTP client for the storefront category endpoint.
///
/// Cheap to clone: `reqwest::Client` is reference-counted internally, and the
/// endpoint URL is resolved once at construction.
#[derive(Debug, Clone)]
pub struct CategoryClient {
    http: reqwest::Client,
    endpoint: Url,
    timeout: Duration,
}

impl CategoryClient {
    /// Creates a client for the backend rooted at `base_url`.
    ///
    /// `base_url` is expected to come from
    /// [`validate_base_url`](crate::util::validate_base_url), which guarantees
    /// a trailing slash so the endpoint path is appended, not substituted.
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .pool_max_idle_per_host(1)
            .pool_idle_timeout(Duration::from_secs(30))
            .connect_timeout(timeout)
            .build()?;
        Self::with_http_client(http, base_url, timeout)
    }

    /// Creates a client around an existing `reqwest::Client`.
    pub fn with_http_client(
        http: reqwest::Client,
        base_url: &Url,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let endpoint = base_url.join(CATEGORY_ENDPOINT)?;
        Ok(Self {
            http,
            endpoint,
            timeout,
        })
    }

    /// Full request URL for a page window, e.g.
    /// `http://localhost:8080/api/category/fetch/all?start=0&count=12`.
    pub fn request_url(&self, window: CategoryWindow) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("start", &window.start.to_string())
            .append_pair("count", &window.count.to_string());
        url
    }

    /// Fetches one page of categories.
    ///
    /// Issues exactly one GET. There is no retry: the navigation header asks
    /// once per display and settles for an empty menu otherwise.
    ///
    /// # Returns
    ///
    /// The categories in the order the backend returned them. An empty
    /// `categories` array is a success with zero entries.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Network`] - connection or TLS failure
    /// - [`FetchError::Timeout`] - no complete response within the timeout
    /// - [`FetchError::HttpStatus`] - non-2xx response
    /// - [`FetchError::ResponseTooLarge`] - body over 1MB
    /// - [`FetchError::EmptyPayload`] - empty body or `null`
    /// - [`FetchError::Malformed`] - invalid JSON or wrong shape
    /// - [`FetchError::MissingCategories`] - envelope without `categories`
    pub async fn fetch_categories(
        &self,
        window: CategoryWindow,
    ) -> Result<Vec<Category>, FetchError> {
        let url = self.request_url(window);
        tracing::debug!(url = %url, "Fetching categories");

        let bytes = tokio::time::timeout(self.timeout, async {
            let response = self.http.get(url.clone()).send().await?;
            if !response.status().is_success() {
                return Err(FetchError::HttpStatus(response.status().as_u16()));
            }
            read_limited_bytes(response, MAX_RESPONSE_SIZE).await
        })
        .await
        .map_err(|_| FetchError::Timeout(self.timeout))??;

        let categories = decode_categories(&bytes)?;
        tracing::debug!(url = %url, count = categories.len(), "Categories fetched");
        Ok(categories)
    }
}

/// Decodes a response body into the category list.
///
/// Separated from the HTTP path so the payload rules are testable on their own:
/// blank or `null` bodies are [`FetchError::EmptyPayload`], an envelope whose
/// `categories` is absent or `null` is [`FetchError::MissingCategories`].
pub(crate) fn decode_categories(bytes: &[u8]) -> Result<Vec<Category>, FetchError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(FetchError::EmptyPayload);
    }

    let envelope: CategoryEnvelope =
        serde_json::from_slice::<Option<CategoryEnvelope>>(bytes)?.ok_or(FetchError::EmptyPayload)?;

    if envelope.success == Some(false) {
        tracing::debug!(
            message = envelope.response_message.as_deref().unwrap_or(""),
            "Backend flagged category response as unsuccessful"
        );
    }

    envelope.categories.ok_or(FetchError::MissingCategories)
}

async fn read_limited_bytes(
    response: reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, FetchError> {
    if let Some(len) = response.content_length() {
        if len > limit as u64 {
            return Err(FetchError::ResponseTooLarge);
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            return Err(FetchError::ResponseTooLarge);
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}
