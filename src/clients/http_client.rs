//! HTTP client for Etsy API communication.
//!
//! This module provides the [`HttpClient`] type for making requests to the
//! Etsy API with API key injection and automatic retry handling.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::EtsyConfig;

/// Fixed retry wait time in seconds.
pub const RETRY_WAIT_TIME: u64 = 1;

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default API origin used when no host override is configured.
pub const DEFAULT_API_HOST: &str = "https://openapi.etsy.com";

/// HTTP client for making requests to the Etsy API.
///
/// The client handles:
/// - Base URI construction from the configured host and environment
/// - Default headers including User-Agent
/// - Sending the API key as the `api_key` query parameter
/// - Automatic retry logic for 429 and 5xx responses
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    /// Base URI (e.g., `https://openapi.etsy.com`).
    base_uri: String,
    /// Base path (e.g., "/v2").
    base_path: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    api_key: String,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use etsy_api::{ApiKey, EtsyConfig};
    /// use etsy_api::clients::HttpClient;
    ///
    /// let config = EtsyConfig::builder()
    ///     .api_key(ApiKey::new("key").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = HttpClient::new(&config);
    /// assert_eq!(client.base_uri(), "https://openapi.etsy.com");
    /// assert_eq!(client.base_path(), "/v2");
    /// ```
    #[must_use]
    pub fn new(config: &EtsyConfig) -> Self {
        let base_uri = config
            .host()
            .map_or_else(|| DEFAULT_API_HOST.to_string(), |host| host.origin().to_string());
        let base_path = config.environment().base_path().to_string();

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Etsy API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri,
            base_path,
            default_headers,
            api_key: config.api_key().as_ref().to_string(),
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the Etsy API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    /// - Max retries exceeded (`MaxRetries`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}/{}", self.base_uri, self.base_path, request.path);

        let mut headers = self.default_headers.clone();
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut query = request.query.clone().unwrap_or_default();
        query.insert("api_key".to_string(), self.api_key.clone());

        let mut tries: u32 = 0;
        loop {
            tries += 1;
            tracing::debug!(path = %request.path, attempt = tries, "Sending request to Etsy API");

            let mut req_builder = self.client.get(&url).query(&query);
            for (key, value) in &headers {
                req_builder = req_builder.header(key, value);
            }

            let res = req_builder.send().await?;

            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let body_text = res.text().await?;

            // Etsy reports most errors as plain text, keep it for the error message
            let body = if body_text.is_empty() {
                serde_json::json!({})
            } else {
                serde_json::from_str(&body_text)
                    .unwrap_or_else(|_| serde_json::json!({ "raw_body": body_text }))
            };

            let response = HttpResponse::new(code, res_headers, body);

            if response.is_ok() {
                return Ok(response);
            }

            let error_message = Self::serialize_error(&response);

            let should_retry = code == 429 || code >= 500;
            if !should_retry {
                return Err(HttpError::Response(HttpResponseError {
                    code,
                    message: error_message,
                    error_reference: response.request_id().map(String::from),
                }));
            }

            if tries >= request.tries {
                if request.tries == 1 {
                    return Err(HttpError::Response(HttpResponseError {
                        code,
                        message: error_message,
                        error_reference: response.request_id().map(String::from),
                    }));
                }
                return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                    code,
                    tries: request.tries,
                    message: error_message,
                    error_reference: response.request_id().map(String::from),
                }));
            }

            let delay = Self::calculate_retry_delay(&response, code);
            tracing::warn!(
                "Etsy API returned {} for {}, retrying in {:?} (attempt {} of {})",
                code,
                request.path,
                delay,
                tries,
                request.tries
            );
            tokio::time::sleep(delay).await;
        }
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    fn calculate_retry_delay(response: &HttpResponse, status: u16) -> std::time::Duration {
        // Retry-After is only honored for 429
        if status == 429 {
            if let Some(delay) = response
                .retry_request_after
                .and_then(|retry_after| std::time::Duration::try_from_secs_f64(retry_after).ok())
            {
                return delay;
            }
        }
        std::time::Duration::from_secs(RETRY_WAIT_TIME)
    }

    /// Picks the most specific error description the response offers.
    fn serialize_error(response: &HttpResponse) -> String {
        if let Some(detail) = response.error_detail() {
            return detail.to_string();
        }
        for key in ["error", "raw_body"] {
            if let Some(text) = response.body.get(key).and_then(serde_json::Value::as_str) {
                return text.to_string();
            }
        }
        format!("Request failed with status {}", response.code)
    }
}
