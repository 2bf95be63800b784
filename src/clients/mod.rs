//! HTTP client types for Etsy API communication.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client (API key injection, retries)
//! - [`HttpRequest`]: A GET request to be sent to the API
//! - [`HttpResponse`]: A raw response, with rate limit headers parsed
//! - [`ApiResponse`]: The unwrapped result envelope
//! - [`RequestExecutor`]: The seam resources issue requests through
//! - [`EtsyClient`]: The production [`RequestExecutor`]
//!
//! # Retry Behavior
//!
//! - **429 (Rate Limited)**: Retries using `Retry-After` header value, or 1 second if not present
//! - **5xx (Server Error)**: Retries with fixed 1-second delay
//! - **Other errors (4xx)**: Returns immediately without retry
//!
//! The default `tries` is 1, meaning no automatic retries. Configure via
//! [`EtsyClient::with_tries`] or [`HttpRequestBuilder::tries`].

mod api_response;
mod client;
mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use api_response::ApiResponse;
pub use client::{EtsyClient, RequestExecutor};
pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, DEFAULT_API_HOST, SDK_VERSION};
pub use http_request::{HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, RateLimit};
