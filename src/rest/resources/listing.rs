//! Listing resource implementation.
//!
//! A [`Listing`] is an item offered for sale in a shop. Listings are only
//! reachable through their shop; see [`Shop::listings`](super::Shop::listings).

use std::collections::HashMap;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::clients::RequestExecutor;
use crate::rest::{build_path, AttributeMap, Resource, ResourceError};

const ATTRIBUTES: &[(&str, Option<&str>)] = &[
    ("title", None),
    ("description", None),
    ("state", None),
    ("url", None),
    ("price", None),
    ("quantity", None),
    ("tags", None),
    ("materials", None),
    ("id", Some("listing_id")),
    ("view_count", Some("views")),
    ("created", Some("creation_tsz")),
    ("modified", Some("last_modified_tsz")),
    ("currency", Some("currency_code")),
    ("ending", Some("ending_tsz")),
];

/// An Etsy listing.
///
/// Wraps the raw listing object as returned by the API.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    data: Map<String, Value>,
}

impl Resource for Listing {
    const NAME: &'static str = "Listing";

    /// # Panics
    ///
    /// Never in practice: the declaration table is static and has no blank names.
    fn attribute_map() -> &'static AttributeMap {
        static MAP: OnceLock<AttributeMap> = OnceLock::new();
        MAP.get_or_init(|| {
            AttributeMap::from_declarations(ATTRIBUTES)
                .expect("Listing attribute declarations are valid")
        })
    }

    fn from_record(data: Map<String, Value>) -> Self {
        Self { data }
    }

    fn raw(&self) -> &Map<String, Value> {
        &self.data
    }
}

impl Listing {
    /// Retrieves the active listings of a shop.
    ///
    /// Sends a GET request to `/shops/{shop_id}/listings/active`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request fails and
    /// [`ResourceError::MalformedResult`] if the result holds anything other
    /// than listing objects.
    pub async fn find_all_by_shop_id<E: RequestExecutor>(
        executor: &E,
        shop_id: u64,
    ) -> Result<Vec<Self>, ResourceError> {
        let shop_id = shop_id.to_string();
        let mut ids = HashMap::new();
        ids.insert("shop_id", shop_id.as_str());
        let path = build_path("/shops/{shop_id}/listings/active", &ids);

        let response = executor.get(&path, None).await?;
        Self::from_result(response.result)
    }

    /// The numeric listing id.
    #[must_use]
    pub fn id(&self) -> Option<u64> {
        self.u64_attribute("id")
    }

    /// The listing title.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.str_attribute("title")
    }

    /// The listing description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.str_attribute("description")
    }

    /// The listing state (e.g. "active", "sold_out").
    #[must_use]
    pub fn state(&self) -> Option<&str> {
        self.str_attribute("state")
    }

    /// The listing page URL.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.str_attribute("url")
    }

    /// The price as sent by the API, a decimal string such as "18.00".
    #[must_use]
    pub fn price(&self) -> Option<&str> {
        self.str_attribute("price")
    }

    /// The ISO currency code of the price.
    #[must_use]
    pub fn currency(&self) -> Option<&str> {
        self.str_attribute("currency")
    }

    /// The number of items available.
    #[must_use]
    pub fn quantity(&self) -> Option<u64> {
        self.u64_attribute("quantity")
    }

    /// How many times the listing was viewed.
    #[must_use]
    pub fn view_count(&self) -> Option<u64> {
        self.u64_attribute("view_count")
    }

    /// The listing tags. Non-string elements are skipped.
    #[must_use]
    pub fn tags(&self) -> Option<Vec<&str>> {
        self.str_list("tags")
    }

    /// The listing materials. Non-string elements are skipped.
    #[must_use]
    pub fn materials(&self) -> Option<Vec<&str>> {
        self.str_list("materials")
    }

    /// When the listing was created.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.time_attribute("created")
    }

    /// When the listing was last modified.
    #[must_use]
    pub fn modified_at(&self) -> Option<DateTime<Utc>> {
        self.time_attribute("modified")
    }

    /// When the listing expires.
    #[must_use]
    pub fn ending_at(&self) -> Option<DateTime<Utc>> {
        self.time_attribute("ending")
    }

    fn str_list(&self, local_name: &str) -> Option<Vec<&str>> {
        self.attribute(local_name)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
    }
}
