//! # Etsy API Rust Client
//!
//! A read-only Rust client for the Etsy API (v2), covering shops and their
//! active listings.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`EtsyConfig`] and [`EtsyConfigBuilder`]
//! - Validated newtypes for the API key and host override
//! - Production and sandbox [`Environment`]s
//! - Async HTTP client with retry logic and rate limit header parsing
//! - Declarative attribute mapping from API fields to resource attributes
//! - The [`Shop`](rest::resources::Shop) and
//!   [`Listing`](rest::resources::Listing) resources
//!
//! ## Quick Start
//!
//! ```rust
//! use etsy_api::{ApiKey, Environment, EtsyConfig};
//!
//! let config = EtsyConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .environment(Environment::Sandbox)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.environment().base_path(), "/v2/sandbox");
//! ```
//!
//! ## Finding Shops
//!
//! ```rust,ignore
//! use etsy_api::{ApiKey, EtsyClient, EtsyConfig};
//! use etsy_api::rest::resources::{Shop, ShopListParams};
//!
//! let config = EtsyConfig::builder()
//!     .api_key(ApiKey::new("your-api-key")?)
//!     .build()?;
//! let client = EtsyClient::new(&config).with_tries(3);
//!
//! // One shop, by name or id
//! let shop = Shop::find_one(&client, "reagent").await?;
//! println!("{:?} since {:?}", shop.title(), shop.created_at());
//!
//! // Several shops in one request
//! let shops = Shop::find(&client, &["reagent", "littletjane"]).await?;
//!
//! // A page of shops
//! let page = Shop::all(&client, Some(ShopListParams { limit: Some(25), offset: None })).await?;
//!
//! // Listings are fetched once per shop instance
//! for listing in shop.listings(&client).await? {
//!     println!("{:?} {:?}", listing.title(), listing.price());
//! }
//! ```
//!
//! ## Logging
//!
//! Requests, retries and memoized lookups are reported through [`tracing`].
//! No subscriber is installed; applications choose their own.
//!
//! ## Design Principles
//!
//! - **Read-only**: no write operations are exposed
//! - **Verbatim data**: resources keep the raw API object and never coerce or
//!   default attribute values
//! - **Fail-fast validation**: newtypes and attribute declarations are
//!   validated on construction
//! - **Thread-safe**: configuration and client types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiKey, Environment, EtsyConfig, EtsyConfigBuilder, HostUrl};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiResponse, EtsyClient, HttpClient, HttpError, HttpRequest, HttpRequestBuilder,
    HttpResponse, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
    RateLimit, RequestExecutor,
};

// Re-export resource infrastructure
pub use rest::{AttributeMap, Found, Resource, ResourceError};
