//! Shop resource implementation.
//!
//! This module provides the [`Shop`] resource. Shops are found by name or
//! numeric id, several at a time if needed, or paged through with
//! [`Shop::all`].
//!
//! # Example
//!
//! ```rust,ignore
//! use etsy_api::rest::resources::Shop;
//!
//! let shop = Shop::find_one(&client, "reagent").await?;
//! println!("Shop: {}", shop.name().unwrap_or(""));
//! println!("Open since: {:?}", shop.created_at());
//!
//! // Listings are fetched on first use and kept on the instance
//! let listings = shop.listings(&client).await?;
//! println!("{} active listings", listings.len());
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::sync::OnceCell;

use crate::clients::RequestExecutor;
use crate::rest::resources::Listing;
use crate::rest::{
    build_path, join_identifiers, serialize_to_query, AttributeMap, Found, Resource,
    ResourceError,
};

/// An Etsy shop.
///
/// Wraps the raw shop object as returned by the API. Reads go through the
/// shop's attribute declarations:
///
/// | attribute | field |
/// |---|---|
/// | `title`, `announcement`, `user_id` | same name |
/// | `id` | `shop_id` |
/// | `image_url` | `image_url_760x100` |
/// | `active_listings_count` | `listing_active_count` |
/// | `updated` | `last_updated_tsz` |
/// | `created` | `creation_tsz` |
/// | `name` | `shop_name` |
/// | `message` | `sale_message` |
///
/// Two shops are equal when their raw objects are equal; fetched listings
/// are not compared.
#[derive(Debug, Clone)]
pub struct Shop {
    data: Map<String, Value>,
    listings: OnceCell<Vec<Listing>>,
}

impl PartialEq for Shop {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Resource for Shop {
    const NAME: &'static str = "Shop";

    /// # Panics
    ///
    /// Never in practice: the declarations are static and have no blank names.
    fn attribute_map() -> &'static AttributeMap {
        static MAP: OnceLock<AttributeMap> = OnceLock::new();
        MAP.get_or_init(|| {
            AttributeMap::define(|map| {
                map.declare_attributes(["title", "announcement", "user_id"])?
                    .declare_attribute("id", "shop_id")?
                    .declare_attribute("image_url", "image_url_760x100")?
                    .declare_attribute("active_listings_count", "listing_active_count")?
                    .declare_attribute("updated", "last_updated_tsz")?
                    .declare_attribute("created", "creation_tsz")?
                    .declare_attribute("name", "shop_name")?
                    .declare_attribute("message", "sale_message")?;
                Ok(())
            })
            .expect("Shop attribute declarations are valid")
        })
    }

    fn from_record(data: Map<String, Value>) -> Self {
        Self {
            data,
            listings: OnceCell::new(),
        }
    }

    fn raw(&self) -> &Map<String, Value> {
        &self.data
    }
}

/// Parameters for listing shops.
///
/// Both fields are forwarded to the API as-is; unset fields are not sent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ShopListParams {
    /// Maximum number of shops to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Number of shops to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl Shop {
    /// Retrieves one or more shops by name or numeric id in a single request.
    ///
    /// Sends a GET request to `/shops/{identifiers}` with the identifiers
    /// joined by commas. A single identifier yields [`Found::One`]; several
    /// yield [`Found::Many`] in the order the API returned them.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::EmptyIdentifiers`] if `identifiers` is empty; no
    ///   request is sent.
    /// - [`ResourceError::NotFound`] on a 404, or when a single identifier
    ///   yields no shop.
    /// - [`ResourceError::Http`] for any other request failure.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let shops = Shop::find(&client, &["reagent", "littletjane"]).await?;
    /// assert_eq!(shops.len(), 2);
    /// ```
    pub async fn find<E, S>(executor: &E, identifiers: &[S]) -> Result<Found<Self>, ResourceError>
    where
        E: RequestExecutor,
        S: AsRef<str>,
    {
        if identifiers.is_empty() {
            return Err(ResourceError::EmptyIdentifiers {
                resource: Self::NAME,
            });
        }

        let requested = identifiers
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(",");
        let joined = join_identifiers(identifiers);
        let mut ids = HashMap::new();
        ids.insert("identifiers", joined.as_str());
        let path = build_path("/shops/{identifiers}", &ids);

        let response = executor.get(&path, None).await.map_err(|e| {
            ResourceError::from_http_error(e, Self::NAME, Some(requested.as_str()))
        })?;

        let mut shops = Self::from_result(response.result)?;

        if identifiers.len() == 1 {
            if shops.is_empty() {
                return Err(ResourceError::NotFound {
                    resource: Self::NAME,
                    id: requested,
                });
            }
            return Ok(Found::One(shops.swap_remove(0)));
        }

        Ok(Found::Many(shops))
    }

    /// Retrieves a single shop by name or numeric id.
    ///
    /// # Errors
    ///
    /// Same as [`Shop::find`].
    pub async fn find_one<E: RequestExecutor>(
        executor: &E,
        identifier: &str,
    ) -> Result<Self, ResourceError> {
        Self::find(executor, &[identifier])
            .await?
            .into_one()
            .ok_or_else(|| ResourceError::NotFound {
                resource: Self::NAME,
                id: identifier.to_string(),
            })
    }

    /// Retrieves a page of shops.
    ///
    /// Sends a GET request to `/shops`. Without params the API defaults
    /// apply; nothing is added locally.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request fails.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let params = ShopListParams { limit: Some(10), offset: Some(20) };
    /// let shops = Shop::all(&client, Some(params)).await?;
    /// ```
    pub async fn all<E: RequestExecutor>(
        executor: &E,
        params: Option<ShopListParams>,
    ) -> Result<Vec<Self>, ResourceError> {
        let query = params.map(|p| serialize_to_query(&p)).transpose()?;

        let response = executor.get("/shops", query).await?;
        Self::from_result(response.result)
    }

    /// The shop's active listings.
    ///
    /// The first call sends a GET request to
    /// `/shops/{shop_id}/listings/active`; later calls on the same instance
    /// return the same listings without a request. A failed fetch is not
    /// kept, so the next call tries again.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::MissingAttribute`] if the shop has no numeric `id`.
    /// - [`ResourceError::Http`] if the request fails.
    pub async fn listings<E: RequestExecutor>(
        &self,
        executor: &E,
    ) -> Result<&[Listing], ResourceError> {
        if let Some(listings) = self.listings.get() {
            tracing::debug!(shop_id = ?self.id(), "Using memoized shop listings");
            return Ok(listings.as_slice());
        }

        let shop_id = self.id().ok_or(ResourceError::MissingAttribute {
            resource: Self::NAME,
            attribute: "id",
        })?;

        let listings = self
            .listings
            .get_or_try_init(|| Listing::find_all_by_shop_id(executor, shop_id))
            .await?;
        Ok(listings.as_slice())
    }

    /// When the shop was created, from the `created` epoch seconds.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.time_attribute("created")
    }

    /// When the shop was last updated, from the `updated` epoch seconds.
    #[must_use]
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.time_attribute("updated")
    }

    /// The numeric shop id.
    #[must_use]
    pub fn id(&self) -> Option<u64> {
        self.u64_attribute("id")
    }

    /// The id of the user who owns the shop.
    #[must_use]
    pub fn user_id(&self) -> Option<u64> {
        self.u64_attribute("user_id")
    }

    /// The shop's login name (e.g. "reagent").
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.str_attribute("name")
    }

    /// The shop title shown on the shop page.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.str_attribute("title")
    }

    /// The announcement shown at the top of the shop.
    #[must_use]
    pub fn announcement(&self) -> Option<&str> {
        self.str_attribute("announcement")
    }

    /// The message shown to buyers after a sale.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.str_attribute("message")
    }

    /// The 760x100 banner image URL.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.str_attribute("image_url")
    }

    /// The number of active listings.
    #[must_use]
    pub fn active_listings_count(&self) -> Option<u64> {
        self.u64_attribute("active_listings_count")
    }

    /// Creation time as raw epoch seconds.
    #[must_use]
    pub fn created(&self) -> Option<u64> {
        self.u64_attribute("created")
    }

    /// Last update time as raw epoch seconds.
    #[must_use]
    pub fn updated(&self) -> Option<u64> {
        self.u64_attribute("updated")
    }
}
