//! Integration tests for the Shop and Listing resources.
//!
//! These tests run the resources against a mock Etsy API and verify the
//! requests sent, the envelope handling and the mapped attributes.

use chrono::{TimeZone, Utc};
use etsy_api::rest::resources::{Listing, Shop, ShopListParams};
use etsy_api::rest::{Found, Resource, ResourceError};
use etsy_api::{ApiKey, Environment, EtsyClient, EtsyConfig, HostUrl};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test-api-key";

/// Creates a client pointed at the mock server.
fn create_client(server: &MockServer) -> EtsyClient {
    let config = EtsyConfig::builder()
        .api_key(ApiKey::new(API_KEY).unwrap())
        .host(HostUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    EtsyClient::new(&config)
}

/// Wraps results in the Etsy envelope, collapsing a single result.
fn envelope(results: &[Value]) -> Value {
    let payload = if results.len() == 1 {
        results[0].clone()
    } else {
        Value::Array(results.to_vec())
    };
    json!({ "count": results.len(), "results": payload, "type": "Shop" })
}

fn reagent() -> Value {
    json!({
        "shop_id": 5_500_349,
        "shop_name": "reagent",
        "user_id": 5_029_420,
        "creation_tsz": 1_318_470_048,
        "last_updated_tsz": 1_318_480_000,
        "title": "Vintage things",
        "announcement": null,
        "sale_message": "Thanks for your order",
        "image_url_760x100": "https://img.etsystatic.com/banner.jpg",
        "listing_active_count": 2
    })
}

fn littletjane() -> Value {
    json!({ "shop_id": 6_000_001, "shop_name": "littletjane" })
}

// ============================================================================
// Shop::find
// ============================================================================

#[tokio::test]
async fn test_find_one_shop_by_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/shops/reagent"))
        .and(query_param("api_key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(&[reagent()])))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let shop = Shop::find_one(&client, "reagent").await.unwrap();

    assert_eq!(shop.id(), Some(5_500_349));
    assert_eq!(shop.name(), Some("reagent"));
    assert_eq!(shop.user_id(), Some(5_029_420));
    assert_eq!(shop.title(), Some("Vintage things"));
    assert_eq!(shop.message(), Some("Thanks for your order"));
    assert_eq!(shop.image_url(), Some("https://img.etsystatic.com/banner.jpg"));
    assert_eq!(shop.active_listings_count(), Some(2));
    assert_eq!(shop.announcement(), None);
    assert_eq!(shop.attribute("announcement"), Some(&Value::Null));
    assert_eq!(
        shop.created_at(),
        Some(Utc.with_ymd_and_hms(2011, 10, 13, 1, 40, 48).unwrap())
    );
}

#[tokio::test]
async fn test_find_many_shops_in_one_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/shops/reagent,littletjane"))
        .respond_with(
            ResponseTemplate::new(200)
                // The API may answer in a different order than requested
                .set_body_json(envelope(&[littletjane(), reagent()])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let found = Shop::find(&client, &["reagent", "littletjane"]).await.unwrap();

    assert!(matches!(found, Found::Many(_)));
    let names: Vec<Option<&str>> = found.iter().map(Shop::name).collect();
    assert_eq!(names, vec![Some("littletjane"), Some("reagent")]);
}

#[tokio::test]
async fn test_find_numeric_and_named_identifiers_together() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/shops/5500349,littletjane"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(&[reagent(), littletjane()])))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let identifiers = vec!["5500349".to_string(), "littletjane".to_string()];
    let shops = Shop::find(&client, &identifiers).await.unwrap().into_vec();

    assert_eq!(shops.len(), 2);
    assert_eq!(shops[0].id(), Some(5_500_349));
}

#[tokio::test]
async fn test_find_unknown_shop_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/shops/nobody"))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("X-Error-Detail", "Shop with shop_id or name nobody not found")
                .set_body_string("Shop with shop_id or name nobody not found"),
        )
        .mount(&server)
        .await;

    let client = create_client(&server);
    let error = Shop::find_one(&client, "nobody").await.unwrap_err();

    assert!(matches!(
        error,
        ResourceError::NotFound { resource: "Shop", ref id } if id == "nobody"
    ));
}

#[tokio::test]
async fn test_find_empty_identifiers_sends_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(&[])))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let empty: Vec<String> = Vec::new();
    let error = Shop::find(&client, &empty).await.unwrap_err();

    assert!(matches!(error, ResourceError::EmptyIdentifiers { .. }));
}

#[tokio::test]
async fn test_find_in_sandbox_uses_sandbox_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/sandbox/shops/reagent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(&[reagent()])))
        .expect(1)
        .mount(&server)
        .await;

    let config = EtsyConfig::builder()
        .api_key(ApiKey::new(API_KEY).unwrap())
        .environment(Environment::Sandbox)
        .host(HostUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    let client = EtsyClient::new(&config);

    let shop = Shop::find_one(&client, "reagent").await.unwrap();
    assert_eq!(shop.name(), Some("reagent"));
}

// ============================================================================
// Shop::all
// ============================================================================

#[tokio::test]
async fn test_all_forwards_limit_and_offset() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/shops"))
        .and(query_param("limit", "2"))
        .and(query_param("offset", "4"))
        .and(query_param("api_key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(&[reagent(), littletjane()])))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let params = ShopListParams {
        limit: Some(2),
        offset: Some(4),
    };
    let shops = Shop::all(&client, Some(params)).await.unwrap();

    let ids: Vec<Option<u64>> = shops.iter().map(Shop::id).collect();
    assert_eq!(ids, vec![Some(5_500_349), Some(6_000_001)]);
}

#[tokio::test]
async fn test_all_without_params_sends_only_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/shops"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(&[reagent()])))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let shops = Shop::all(&client, None).await.unwrap();
    assert_eq!(shops.len(), 1);

    let requests = server.received_requests().await.unwrap();
    let query: Vec<(String, String)> = requests[0]
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert_eq!(query, vec![("api_key".to_string(), API_KEY.to_string())]);
}

#[tokio::test]
async fn test_all_empty_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/shops"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "count": 0, "results": [] })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    assert!(Shop::all(&client, None).await.unwrap().is_empty());
}

// ============================================================================
// Shop::listings
// ============================================================================

#[tokio::test]
async fn test_listings_are_requested_once_per_shop() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/shops/reagent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(&[reagent()])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/shops/5500349/listings/active"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 2,
            "results": [
                { "listing_id": 11, "title": "Tea towel", "price": "18.00", "currency_code": "USD" },
                { "listing_id": 12, "title": "Apron", "views": 40 }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let shop = Shop::find_one(&client, "reagent").await.unwrap();

    let first = shop.listings(&client).await.unwrap();
    assert_eq!(first.len(), 2);
    assert_eq!(first[0].title(), Some("Tea towel"));
    assert_eq!(first[0].price(), Some("18.00"));
    assert_eq!(first[0].currency(), Some("USD"));
    assert_eq!(first[1].view_count(), Some(40));

    let second = shop.listings(&client).await.unwrap();
    assert!(std::ptr::eq(first, second));
}

#[tokio::test]
async fn test_find_all_by_shop_id_single_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/shops/42/listings/active"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "results": [{ "listing_id": 7, "ending_tsz": 1_318_470_048 }]
        })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let listings = Listing::find_all_by_shop_id(&client, 42).await.unwrap();

    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].id(), Some(7));
    assert_eq!(
        listings[0].ending_at(),
        Some(Utc.with_ymd_and_hms(2011, 10, 13, 1, 40, 48).unwrap())
    );
}
