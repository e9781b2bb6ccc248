//! End-to-end handler tests: wiremock upstream + in-memory cache.
//!
//! Upstream call counts are asserted with wiremock's `expect`, which is
//! verified when the mock server drops.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use placewrap_cache::{Cache, CacheError, MemoryCache};
use placewrap_core::keys;
use placewrap_core::params::{GeocodeParams, PhotoParams, SearchParams};
use placewrap_service::{PlacesService, ServiceError};

const TEST_TTL: Duration = Duration::from_secs(3600);

fn service_with_cache(server_uri: &str, cache: Arc<dyn Cache>) -> PlacesService {
    let client = placewrap_google::GoogleClient::with_base_urls(
        "test-key",
        30,
        server_uri,
        &format!("{server_uri}/geocode/json"),
    )
    .expect("client construction should not fail");
    PlacesService::new(client, cache, TEST_TTL)
}

fn nearby_params() -> SearchParams {
    SearchParams {
        latitude: 40.0,
        longitude: -75.0,
        radius_meters: 1_000,
        included_types: ["restaurant".to_string()].into(),
        excluded_types: [].into(),
    }
}

fn nearby_body() -> serde_json::Value {
    serde_json::json!({
        "places": [
            {
                "id": "ChIJcached",
                "displayName": { "text": "Cached Cafe" },
                "location": { "latitude": 40.001, "longitude": -75.002 },
                "types": ["cafe"],
                "rating": 4.4
            }
        ]
    })
}

/// A cache double that counts writes on top of a real in-memory store.
#[derive(Default)]
struct CountingCache {
    inner: MemoryCache,
    writes: AtomicUsize,
}

#[async_trait]
impl Cache for CountingCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), CacheError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.set(key, value, ttl).await
    }
}

/// A cache double whose store is always unavailable.
struct FailingCache;

#[async_trait]
impl Cache for FailingCache {
    async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Err(CacheError::Unavailable("connection refused".to_string()))
    }

    async fn set(&self, _key: &str, _value: Vec<u8>, _ttl: Duration) -> Result<(), CacheError> {
        Err(CacheError::Unavailable("connection refused".to_string()))
    }
}

#[tokio::test]
async fn nearby_search_calls_upstream_once_and_serves_repeat_from_cache() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/places:searchNearby"))
        .respond_with(ResponseTemplate::new(200).set_body_json(nearby_body()))
        .expect(1)
        .mount(&server)
        .await;

    let cache = Arc::new(MemoryCache::new());
    let service = service_with_cache(&server.uri(), cache);
    let params = nearby_params();

    let cold = service.nearby_search(&params).await.expect("cold request");
    assert_eq!(cold.places.len(), 1);
    assert_eq!(cold.places[0].id, "ChIJcached");

    let warm = service.nearby_search(&params).await.expect("warm request");
    assert_eq!(warm.places, cold.places);
}

#[tokio::test]
async fn nearby_search_writes_exactly_one_cache_entry() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/places:searchNearby"))
        .respond_with(ResponseTemplate::new(200).set_body_json(nearby_body()))
        .mount(&server)
        .await;

    let cache = Arc::new(CountingCache::default());
    let service = service_with_cache(&server.uri(), Arc::clone(&cache) as Arc<dyn Cache>);
    let params = nearby_params();

    service.nearby_search(&params).await.expect("cold request");
    service.nearby_search(&params).await.expect("warm request");

    assert_eq!(cache.writes.load(Ordering::SeqCst), 1);
    let key = keys::nearby_search(&params);
    let stored = cache.get(&key).await.expect("cache get");
    assert!(stored.is_some(), "normalized listing should be cached");
}

#[tokio::test]
async fn overlapping_type_filters_never_reach_upstream() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/places:searchNearby"))
        .respond_with(ResponseTemplate::new(200).set_body_json(nearby_body()))
        .expect(0)
        .mount(&server)
        .await;

    let cache = Arc::new(MemoryCache::new());
    let service = service_with_cache(&server.uri(), cache);
    let params = SearchParams {
        included_types: ["cafe".to_string(), "restaurant".to_string()].into(),
        excluded_types: ["cafe".to_string()].into(),
        ..nearby_params()
    };

    let result = service.nearby_search(&params).await;
    assert!(matches!(result, Err(ServiceError::Validation(_))));
}

#[tokio::test]
async fn page_token_passes_through_fresh_but_not_cached_responses() {
    let server = MockServer::start().await;

    let mut body = nearby_body();
    body["nextPageToken"] = serde_json::json!("tok-next");
    Mock::given(method("POST"))
        .and(path("/places:searchNearby"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let cache = Arc::new(MemoryCache::new());
    let service = service_with_cache(&server.uri(), cache);
    let params = nearby_params();

    let fresh = service.nearby_search(&params).await.expect("fresh request");
    assert_eq!(fresh.next_page_token.as_deref(), Some("tok-next"));

    let cached = service.nearby_search(&params).await.expect("cached request");
    assert_eq!(cached.next_page_token, None);
    assert_eq!(cached.places, fresh.places);
}

#[tokio::test]
async fn upstream_failure_propagates_and_caches_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/places:searchNearby"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let cache = Arc::new(MemoryCache::new());
    let service = service_with_cache(&server.uri(), Arc::clone(&cache) as Arc<dyn Cache>);
    let params = nearby_params();

    let result = service.nearby_search(&params).await;
    assert!(matches!(result, Err(ServiceError::Upstream(_))));

    let key = keys::nearby_search(&params);
    assert_eq!(cache.get(&key).await.expect("cache get"), None);
}

#[tokio::test]
async fn unavailable_cache_degrades_to_upstream_per_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/places:searchNearby"))
        .respond_with(ResponseTemplate::new(200).set_body_json(nearby_body()))
        .expect(2)
        .mount(&server)
        .await;

    let service = service_with_cache(&server.uri(), Arc::new(FailingCache));
    let params = nearby_params();

    let first = service.nearby_search(&params).await.expect("first request");
    let second = service.nearby_search(&params).await.expect("second request");
    assert_eq!(first.places, second.places);
}

#[tokio::test]
async fn place_detail_round_trips_through_the_cache_unchanged() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/places/ChIJdetail"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "ChIJdetail",
            "displayName": { "text": "Detail Diner" },
            "location": { "latitude": 39.95, "longitude": -75.16 },
            "formattedAddress": "100 Market St",
            "priceRange": {
                "startPrice": { "currencyCode": "USD", "units": "80" }
            },
            "reviews": [
                {
                    "authorAttribution": { "displayName": "Alice" },
                    "rating": 5.0,
                    "text": { "text": "Great pancakes." }
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let cache = Arc::new(MemoryCache::new());
    let service = service_with_cache(&server.uri(), cache);

    let fresh = service.place_detail("ChIJdetail").await.expect("fresh detail");
    let cached = service.place_detail("ChIJdetail").await.expect("cached detail");
    assert_eq!(cached, fresh, "cache round trip must preserve the record");

    let range = fresh.price_range.expect("price range");
    assert_eq!(range.currency_code, "USD");
    assert_eq!(range.start_price_units, 80);
    assert_eq!(range.end_price_units, 500);
}

#[tokio::test]
async fn geocode_zero_results_is_not_found_and_caches_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "ZERO_RESULTS",
            "results": []
        })))
        .mount(&server)
        .await;

    let cache = Arc::new(MemoryCache::new());
    let service = service_with_cache(&server.uri(), Arc::clone(&cache) as Arc<dyn Cache>);
    let params = GeocodeParams {
        place_name: "zzzz-nonexistent".to_string(),
    };

    let result = service.geocode(&params).await;
    assert!(
        matches!(result, Err(ServiceError::NotFound { ref query }) if query == "zzzz-nonexistent")
    );

    let key = keys::geocode(&params);
    assert_eq!(cache.get(&key).await.expect("cache get"), None);
}

#[tokio::test]
async fn geocode_caches_the_first_result() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "OK",
            "results": [
                {
                    "geometry": { "location": { "lat": 48.8584, "lng": 2.2945 } },
                    "place_id": "ChIJeiffel"
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let cache = Arc::new(MemoryCache::new());
    let service = service_with_cache(&server.uri(), cache);
    let params = GeocodeParams {
        place_name: "Eiffel Tower".to_string(),
    };

    let fresh = service.geocode(&params).await.expect("fresh geocode");
    let cached = service.geocode(&params).await.expect("cached geocode");
    assert_eq!(cached, fresh);
    assert_eq!(fresh.place_id, "ChIJeiffel");
}

#[tokio::test]
async fn photo_without_uri_is_a_distinguished_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/places/x/photos/y/media"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "name": "places/x/photos/y/media" })),
        )
        .mount(&server)
        .await;

    let cache = Arc::new(MemoryCache::new());
    let service = service_with_cache(&server.uri(), cache);
    let params = PhotoParams {
        photo_reference: "places/x/photos/y".to_string(),
        max_width_px: 300,
        max_height_px: 300,
    };

    let result = service.photo(&params).await;
    assert!(matches!(result, Err(ServiceError::MissingPhotoUri)));
}

#[tokio::test]
async fn photo_resolves_and_caches_the_uri() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/places/x/photos/y/media"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "places/x/photos/y/media",
            "photoUri": "https://lh3.example/img"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let cache = Arc::new(MemoryCache::new());
    let service = service_with_cache(&server.uri(), cache);
    let params = PhotoParams {
        photo_reference: "places/x/photos/y".to_string(),
        max_width_px: 300,
        max_height_px: 300,
    };

    let fresh = service.photo(&params).await.expect("fresh photo");
    assert_eq!(fresh.uri, "https://lh3.example/img");

    let cached = service.photo(&params).await.expect("cached photo");
    assert_eq!(cached, fresh);
}
