//! Etsy resources.
//!
//! - [`Shop`] - A shop on Etsy, found by name or numeric id
//! - [`ShopListParams`] - Parameters for listing shops
//! - [`Listing`] - An item for sale in a shop
//!
//! ```rust,ignore
//! use etsy_api::rest::resources::Shop;
//!
//! let shop = Shop::find_one(&client, "reagent").await?;
//! for listing in shop.listings(&client).await? {
//!     println!("{:?}: {:?}", listing.title(), listing.price());
//! }
//! ```

mod listing;
mod shop;

pub use listing::Listing;
pub use shop::{Shop, ShopListParams};
