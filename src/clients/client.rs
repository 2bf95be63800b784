//! The request executor used by resources.
//!
//! Resources never talk to [`HttpClient`] directly; they issue
//! [`RequestExecutor::get`] calls and receive the unwrapped result envelope.
//! [`EtsyClient`] is the production executor.

use std::collections::HashMap;

use crate::clients::{ApiResponse, HttpClient, HttpError, HttpRequest, InvalidHttpRequestError};
use crate::config::EtsyConfig;

/// Issues GET requests and returns the unwrapped result envelope.
///
/// Transport failures, non-2xx statuses and malformed bodies are reported as
/// [`HttpError`]; callers do not inspect status codes themselves.
#[allow(async_fn_in_trait)]
pub trait RequestExecutor {
    /// Sends a GET request to `path` (e.g. `/shops/reagent`) with the given
    /// query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be completed.
    async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<ApiResponse, HttpError>;
}

/// Client for the Etsy API.
///
/// # Example
///
/// ```rust,ignore
/// use etsy_api::{ApiKey, EtsyClient, EtsyConfig};
/// use etsy_api::rest::resources::Shop;
///
/// let config = EtsyConfig::builder()
///     .api_key(ApiKey::new("my-api-key")?)
///     .build()?;
/// let client = EtsyClient::new(&config);
///
/// let shop = Shop::find_one(&client, "reagent").await?;
/// println!("{}", shop.title().unwrap_or_default());
/// ```
#[derive(Debug)]
pub struct EtsyClient {
    http_client: HttpClient,
    tries: u32,
}

// Verify EtsyClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EtsyClient>();
};

impl EtsyClient {
    /// Creates a new client for the given configuration.
    ///
    /// Requests are attempted once; see [`EtsyClient::with_tries`].
    #[must_use]
    pub fn new(config: &EtsyConfig) -> Self {
        Self {
            http_client: HttpClient::new(config),
            tries: 1,
        }
    }

    /// Sets how many times each request is attempted on 429 and 5xx responses.
    #[must_use]
    pub const fn with_tries(mut self, tries: u32) -> Self {
        self.tries = tries;
        self
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }
}

impl RequestExecutor for EtsyClient {
    async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<ApiResponse, HttpError> {
        let mut builder = HttpRequest::builder(normalize_path(path)?).tries(self.tries);
        if let Some(query_params) = query {
            builder = builder.query(query_params);
        }
        let request = builder.build()?;

        let response = self.http_client.request(request).await?;
        ApiResponse::from_http_response(response)
    }
}

/// Strips leading `/` characters so the path can be appended to the base path.
fn normalize_path(path: &str) -> Result<String, InvalidHttpRequestError> {
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        return Err(InvalidHttpRequestError::EmptyPath);
    }
    Ok(path.to_string())
}
