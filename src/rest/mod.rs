//! REST resource infrastructure for the Etsy API.
//!
//! This module provides:
//!
//! - **[`AttributeMap`]**: declarative mapping from local attribute names to
//!   fields of the raw API object
//! - **[`Resource`] trait**: a read-only resource backed by one raw JSON object
//! - **[`Found<T>`]**: the result of a lookup by one or several identifiers
//! - **Path building**: `{name}` templates and comma-joined identifier lists
//! - **[`ResourceError`]**: semantic error types for resource operations
//!
//! Individual resources ([`Shop`](resources::Shop),
//! [`Listing`](resources::Listing)) live in the [`resources`] submodule.
//!
//! # Example
//!
//! ```rust,ignore
//! use etsy_api::{ApiKey, EtsyClient, EtsyConfig};
//! use etsy_api::rest::resources::{Shop, ShopListParams};
//!
//! let config = EtsyConfig::builder()
//!     .api_key(ApiKey::new("my-api-key")?)
//!     .build()?;
//! let client = EtsyClient::new(&config);
//!
//! // Several shops in one request
//! let shops = Shop::find(&client, &["reagent", "littletjane"]).await?;
//! for shop in &shops {
//!     println!("{:?} opened {:?}", shop.name(), shop.created_at());
//! }
//!
//! // A page of all shops
//! let params = ShopListParams { limit: Some(25), offset: Some(50) };
//! let page = Shop::all(&client, Some(params)).await?;
//! ```

mod attributes;
mod errors;
mod path;
mod resource;
mod response;

pub mod resources;

pub use attributes::{Attribute, AttributeMap};
pub use errors::ResourceError;
pub use path::{build_path, join_identifiers};
pub use resource::{flatten_result, serialize_to_query, Resource};
pub use response::Found;
