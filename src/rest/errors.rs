//! Resource-specific error types.
//!
//! Transport failures pass through unchanged as [`ResourceError::Http`]; the
//! only status code given a resource meaning is 404, which becomes
//! [`ResourceError::NotFound`].
//!
//! # Example
//!
//! ```rust,ignore
//! use etsy_api::rest::ResourceError;
//! use etsy_api::rest::resources::Shop;
//!
//! match Shop::find_one(&client, "reagent").await {
//!     Ok(shop) => println!("Found: {:?}", shop.name()),
//!     Err(ResourceError::NotFound { resource, id }) => {
//!         println!("{} with id {} not found", resource, id);
//!     }
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for resource operations.
///
/// # Example
///
/// ```rust
/// use etsy_api::rest::ResourceError;
///
/// let error = ResourceError::NotFound {
///     resource: "Shop",
///     id: "reagent".to_string(),
/// };
/// assert_eq!(error.to_string(), "Shop with id reagent not found");
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource was not found (HTTP 404, or an empty result for a single lookup).
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The type name of the resource (e.g., "Shop").
        resource: &'static str,
        /// The identifier that was requested.
        id: String,
    },

    /// A lookup was attempted without any identifier.
    #[error("Cannot find {resource} without at least one identifier")]
    EmptyIdentifiers {
        /// The type name of the resource.
        resource: &'static str,
    },

    /// An attribute needed to build a request is absent from the resource.
    #[error("{resource} has no '{attribute}' attribute")]
    MissingAttribute {
        /// The type name of the resource.
        resource: &'static str,
        /// The local attribute name.
        attribute: &'static str,
    },

    /// The result payload is not an object or an array of objects.
    #[error("Malformed {resource} result: {message}")]
    MalformedResult {
        /// The type name of the resource.
        resource: &'static str,
        /// What was found instead.
        message: String,
    },

    /// Query parameters could not be serialized.
    #[error("Failed to serialize params: {0}")]
    InvalidParams(#[source] serde_json::Error),

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    /// Maps an HTTP error from a lookup, turning a 404 into [`ResourceError::NotFound`].
    #[must_use]
    pub fn from_http_error(error: HttpError, resource: &'static str, id: Option<&str>) -> Self {
        match (error.status(), id) {
            (Some(404), Some(id)) => Self::NotFound {
                resource,
                id: id.to_string(),
            },
            _ => Self::Http(error),
        }
    }
}
