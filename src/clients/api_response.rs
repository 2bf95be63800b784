//! The Etsy result envelope.
//!
//! Every successful Etsy API response wraps its payload in an envelope:
//!
//! ```json
//! { "count": 2, "results": [ { ... }, { ... } ], "params": { ... }, "type": "Shop" }
//! ```
//!
//! [`ApiResponse`] unwraps it into a single `result` value. When `count` is
//! exactly 1 the result is the lone object rather than a one-element array,
//! so callers must accept either shape.

use serde_json::Value;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_response::{HttpResponse, RateLimit};

/// A parsed response envelope.
///
/// # Example
///
/// ```rust
/// use etsy_api::clients::{ApiResponse, HttpResponse};
/// use serde_json::json;
/// use std::collections::HashMap;
///
/// let http = HttpResponse::new(
///     200,
///     HashMap::new(),
///     json!({ "count": 1, "results": [{ "shop_id": 5500349 }] }),
/// );
///
/// let response = ApiResponse::from_http_response(http).unwrap();
/// assert_eq!(response.result, json!({ "shop_id": 5500349 }));
/// assert_eq!(response.count, Some(1));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    /// The payload: a single JSON object or an array of JSON objects.
    pub result: Value,
    /// The `count` reported by the envelope, if any.
    pub count: Option<u64>,
    /// Rate limit information from the response headers.
    pub rate_limit: Option<RateLimit>,
    /// Request ID from the X-Request-Id header.
    pub request_id: Option<String>,
}

impl ApiResponse {
    /// Creates a response carrying only a result payload.
    #[must_use]
    pub const fn new(result: Value) -> Self {
        Self {
            result,
            count: None,
            rate_limit: None,
            request_id: None,
        }
    }

    /// Unwraps the envelope of a successful HTTP response.
    ///
    /// Accepts Etsy's `results` array (collapsed to its only element when
    /// `count` is 1) or a literal `result` key.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] if the body carries neither key.
    pub fn from_http_response(response: HttpResponse) -> Result<Self, HttpError> {
        let request_id = response.request_id().map(ToString::to_string);
        let rate_limit = response.rate_limit;
        let code = response.code;

        let Value::Object(mut body) = response.body else {
            return Err(malformed(code, request_id));
        };

        let count = body.get("count").and_then(Value::as_u64);

        let result = if let Some(results) = body.remove("results") {
            match results {
                Value::Array(mut items) if count == Some(1) && items.len() == 1 => items.remove(0),
                other => other,
            }
        } else if let Some(result) = body.remove("result") {
            result
        } else {
            return Err(malformed(code, request_id));
        };

        Ok(Self {
            result,
            count,
            rate_limit,
            request_id,
        })
    }
}

fn malformed(code: u16, request_id: Option<String>) -> HttpError {
    HttpError::Response(HttpResponseError {
        code,
        message: "Missing 'results' in response".to_string(),
        error_reference: request_id,
    })
}
