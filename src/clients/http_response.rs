//! HTTP response types for the Etsy API client.
//!
//! This module provides the [`HttpResponse`] type and the rate limit data
//! parsed from Etsy's response headers.

use std::collections::HashMap;

/// Rate limit information parsed from the `X-RateLimit-Limit` and
/// `X-RateLimit-Remaining` headers.
///
/// # Example
///
/// ```rust
/// use etsy_api::clients::RateLimit;
///
/// let limit = RateLimit::parse("10000", "9412").unwrap();
/// assert_eq!(limit.limit, 10000);
/// assert_eq!(limit.remaining, 9412);
/// assert_eq!(limit.used(), 588);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// The number of requests allowed in the current window.
    pub limit: u32,
    /// The number of requests left in the current window.
    pub remaining: u32,
}

impl RateLimit {
    /// Parses the two rate limit header values.
    ///
    /// Returns `None` if either value is not an unsigned integer.
    #[must_use]
    pub fn parse(limit: &str, remaining: &str) -> Option<Self> {
        Some(Self {
            limit: limit.trim().parse().ok()?,
            remaining: remaining.trim().parse().ok()?,
        })
    }

    /// Returns the number of requests already made in the current window.
    #[must_use]
    pub const fn used(&self) -> u32 {
        self.limit.saturating_sub(self.remaining)
    }
}

/// An HTTP response from the Etsy API.
///
/// Contains the status code, headers and body, along with values parsed
/// from Etsy's headers.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Rate limit information, if both rate limit headers were present.
    pub rate_limit: Option<RateLimit>,
    /// Seconds to wait before retrying (from `Retry-After` header).
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing rate limit and retry headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let first = |name: &str| {
            headers
                .get(name)
                .and_then(|values| values.first())
                .map(String::as_str)
        };

        let rate_limit = match (first("x-ratelimit-limit"), first("x-ratelimit-remaining")) {
            (Some(limit), Some(remaining)) => RateLimit::parse(limit, remaining),
            _ => None,
        };

        let retry_request_after = first("retry-after")
            .and_then(|value| value.trim().parse::<f64>().ok())
            .filter(|seconds| seconds.is_finite() && *seconds >= 0.0);

        Self {
            code,
            headers,
            body,
            rate_limit,
            retry_request_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the `X-Error-Detail` header value, if present.
    ///
    /// Etsy explains request failures in this header.
    #[must_use]
    pub fn error_detail(&self) -> Option<&str> {
        self.header("x-error-detail")
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
