//! Client for the pizza backend's REST API.
//!
//! # Architecture
//!
//! - One [`PizzaApiClient`] per process, cheap to clone (`Arc` inside)
//! - The backend is the source of truth for the catalog - no local caching
//! - Every request has an explicit timeout and at most one retry
//!
//! # Endpoints
//!
//! - `GET /api/featured` - featured pizzas
//! - `GET /api/pizzas` - full menu
//! - `GET /api/pizzas/{id}` - one pizza with description and sizes
//! - `POST /api/orders` - place an order
//!
//! # Example
//!
//! ```rust,ignore
//! use blaze_pizza_storefront::api::PizzaApiClient;
//!
//! let client = PizzaApiClient::new(&config)?;
//! let menu = client.menu_or_empty().await;
//! let pizza = client.get_by_id(&menu[0].id).await?;
//! ```

mod catalog;
mod orders;
pub mod types;

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response};
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;
use url::Url;

use crate::config::StorefrontConfig;

pub use reqwest::StatusCode;
pub use types::{PizzaDetail, PizzaSummary};

/// Shown to the user when the backend gives no usable reason for a failed order.
pub const GENERIC_ORDER_FAILURE: &str = "Failed to place order";

/// Pause before the single retry.
const RETRY_DELAY: Duration = Duration::from_millis(250);

/// Errors that can occur when talking to the pizza backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status.
    #[error("API error: {status}{}", .detail.as_deref().map(|d| format!(" - {d}")).unwrap_or_default())]
    Api {
        status: StatusCode,
        /// The response's `detail` field, when it was a string.
        detail: Option<String>,
    },

    /// Response body was not the expected JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Endpoint URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    /// Message suitable for showing to a customer.
    ///
    /// The backend's `detail` text is passed through verbatim; anything
    /// else collapses to [`GENERIC_ORDER_FAILURE`].
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Api {
                detail: Some(detail),
                ..
            } => detail,
            _ => GENERIC_ORDER_FAILURE,
        }
    }

    /// Whether the failure is on the backend's side (5xx) or in transport.
    #[must_use]
    pub fn is_server_side(&self) -> bool {
        match self {
            Self::Api { status, .. } => status.is_server_error(),
            Self::Http(_) => true,
            Self::Parse(_) | Self::InvalidUrl(_) => false,
        }
    }
}

/// Which failures a request may be retried after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RetryPolicy {
    /// Any transport failure (reads are idempotent).
    Transport,
    /// Only failures to connect, where the request never reached the server.
    ConnectOnly,
}

impl RetryPolicy {
    fn allows(self, error: &reqwest::Error) -> bool {
        match self {
            Self::Transport => error.is_connect() || error.is_timeout() || error.is_request(),
            Self::ConnectOnly => error.is_connect(),
        }
    }
}

// =============================================================================
// PizzaApiClient
// =============================================================================

/// Client for the pizza backend.
#[derive(Clone)]
pub struct PizzaApiClient {
    inner: Arc<PizzaApiClientInner>,
}

struct PizzaApiClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl std::fmt::Debug for PizzaApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PizzaApiClient")
            .field("base_url", &self.inner.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl PizzaApiClient {
    /// Create a client from storefront configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &StorefrontConfig) -> Result<Self, ApiError> {
        Self::with_timeout(config.backend_url.clone(), config.request_timeout)
    }

    /// Create a client for `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn with_timeout(base_url: Url, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("blaze-pizza/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            inner: Arc::new(PizzaApiClientInner { client, base_url }),
        })
    }

    /// The backend base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Resolve an API path against the base URL.
    ///
    /// The base URL's own path is kept, so a backend mounted under a prefix
    /// (`https://host/shop/`) works the same as one at the root.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl(url::ParseError::RelativeUrlWithoutBase))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request, retrying once if `policy` allows it.
    async fn send(
        &self,
        method: Method,
        url: Url,
        policy: RetryPolicy,
        build: impl Fn(RequestBuilder) -> RequestBuilder,
    ) -> Result<Response, ApiError> {
        let attempt = || build(self.inner.client.request(method.clone(), url.clone())).send();

        match attempt().await {
            Ok(response) => Ok(response),
            Err(e) if policy.allows(&e) => {
                warn!(error = %e, %url, "Request failed, retrying once");
                tokio::time::sleep(RETRY_DELAY).await;
                Ok(attempt().await?)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Error body returned by the backend on failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Pull a human-readable `detail` string out of an error response body.
///
/// Validation errors send `detail` as a list of objects; those are not
/// useful to a customer and are ignored.
fn extract_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
        _ => None,
    }
}

/// Turn a non-success response into an [`ApiError::Api`], logging the body.
async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    warn!(
        status = %status,
        body = %body.chars().take(500).collect::<String>(),
        "Pizza API returned non-success status"
    );
    ApiError::Api {
        status,
        detail: extract_detail(&body),
    }
}
