//! HTTP client for the Google Places (v1) and legacy Geocoding APIs.
//!
//! Wraps `reqwest` with API-key header management, per-operation field
//! masks, and typed response deserialization. Each operation requests an
//! explicit field list — never `*` — so payload size and billing stay under
//! control; growing a mask is a deliberate change to the constants below.

use std::time::Duration;

use reqwest::{Client, Url};

use placewrap_core::params::{SearchParams, TextSearchParams};

use crate::error::GoogleError;
use crate::types::{AutocompleteResponse, GeocodeResponse, RawPhotoMedia, RawPlace, SearchResponse};

const DEFAULT_PLACES_BASE_URL: &str = "https://places.googleapis.com/v1/";
const DEFAULT_GEOCODE_BASE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Field mask sent with the nearby and text search endpoints. Entries are
/// prefixed `places.` because the listing response nests records under a
/// `places` array.
const SEARCH_FIELD_MASK: &str = "places.id,places.displayName,places.location,places.rating,\
    places.types,places.formattedAddress,places.priceLevel,places.priceRange,\
    places.currentOpeningHours,places.nationalPhoneNumber,\
    places.internationalPhoneNumber,places.photos,places.accessibilityOptions,\
    places.regularOpeningHours,places.allowsDogs,places.goodForChildren,\
    places.goodForGroups,places.userRatingCount";

/// Field list for the place detail endpoint (unprefixed: the response is the
/// place object itself).
const DETAIL_FIELD_MASK: &str = "id,displayName,location,rating,types,formattedAddress,\
    priceLevel,priceRange,currentOpeningHours,nationalPhoneNumber,\
    internationalPhoneNumber,photos,accessibilityOptions,regularOpeningHours,\
    allowsDogs,goodForChildren,goodForGroups,userRatingCount,editorialSummary,reviews";

/// Client for the Google Places and Geocoding APIs.
///
/// Holds the HTTP client, API key, and base URLs. Use [`GoogleClient::new`]
/// for production or [`GoogleClient::with_base_urls`] to point at a mock
/// server in tests.
pub struct GoogleClient {
    client: Client,
    api_key: String,
    places_base_url: String,
    geocode_base_url: String,
}

impl GoogleClient {
    /// Creates a new client pointed at the production Google endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`GoogleError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, GoogleError> {
        Self::with_base_urls(
            api_key,
            timeout_secs,
            DEFAULT_PLACES_BASE_URL,
            DEFAULT_GEOCODE_BASE_URL,
        )
    }

    /// Creates a new client with custom base URLs (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GoogleError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GoogleError::Api`] if a base URL is not
    /// valid.
    pub fn with_base_urls(
        api_key: &str,
        timeout_secs: u64,
        places_base_url: &str,
        geocode_base_url: &str,
    ) -> Result<Self, GoogleError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("placewrap/0.1 (places-proxy)")
            .build()?;

        // Normalise: the places base must end with exactly one slash because
        // endpoint paths (including `places:searchNearby`, whose colon makes
        // Url::join unusable) are appended textually. The geocode base is a
        // complete endpoint and keeps no trailing slash.
        let places_base_url = format!("{}/", places_base_url.trim_end_matches('/'));
        Url::parse(&places_base_url)
            .map_err(|e| GoogleError::Api(format!("invalid places base URL: {e}")))?;
        let geocode_base_url = geocode_base_url.trim_end_matches('/').to_owned();
        Url::parse(&geocode_base_url)
            .map_err(|e| GoogleError::Api(format!("invalid geocode base URL: {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            places_base_url,
            geocode_base_url,
        })
    }

    /// Searches for places near a coordinate, constrained to a radius and
    /// the request's type filters.
    ///
    /// # Errors
    ///
    /// - [`GoogleError::Http`] on network failure or non-2xx HTTP status.
    /// - [`GoogleError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn search_nearby(&self, params: &SearchParams) -> Result<SearchResponse, GoogleError> {
        let url = self.places_endpoint("places:searchNearby")?;
        let payload = serde_json::json!({
            "includedTypes": params.included_types,
            "excludedPrimaryTypes": params.excluded_types,
            "locationRestriction": {
                "circle": {
                    "center": {
                        "latitude": params.latitude,
                        "longitude": params.longitude,
                    },
                    "radius": params.radius_meters,
                }
            }
        });
        let body = self.post_json(&url, Some(SEARCH_FIELD_MASK), &payload).await?;
        Self::decode(body, "places:searchNearby")
    }

    /// Searches for places matching a free-text query, biased toward a
    /// coordinate.
    ///
    /// # Errors
    ///
    /// - [`GoogleError::Http`] on network failure or non-2xx HTTP status.
    /// - [`GoogleError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn search_text(
        &self,
        params: &TextSearchParams,
    ) -> Result<SearchResponse, GoogleError> {
        let url = self.places_endpoint("places:searchText")?;
        let payload = serde_json::json!({
            "textQuery": params.query,
            "locationBias": {
                "circle": {
                    "center": {
                        "latitude": params.latitude,
                        "longitude": params.longitude,
                    },
                    "radius": params.radius_meters,
                }
            }
        });
        let body = self.post_json(&url, Some(SEARCH_FIELD_MASK), &payload).await?;
        Self::decode(body, "places:searchText")
    }

    /// Fetches autocomplete suggestions for a partial input string.
    ///
    /// # Errors
    ///
    /// - [`GoogleError::Http`] on network failure or non-2xx HTTP status.
    /// - [`GoogleError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn autocomplete(&self, input: &str) -> Result<AutocompleteResponse, GoogleError> {
        let url = self.places_endpoint("places:autocomplete")?;
        let payload = serde_json::json!({ "input": input });
        let body = self.post_json(&url, None, &payload).await?;
        Self::decode(body, "places:autocomplete")
    }

    /// Fetches the full detail record for one place by its resource ID.
    ///
    /// # Errors
    ///
    /// - [`GoogleError::Http`] on network failure or non-2xx HTTP status.
    /// - [`GoogleError::Deserialize`] if the response does not match the
    ///   expected shape (including a record missing its identifying fields).
    pub async fn place_detail(&self, place_id: &str) -> Result<RawPlace, GoogleError> {
        let mut url = self.places_endpoint(&format!("places/{place_id}"))?;
        url.query_pairs_mut().append_pair("fields", DETAIL_FIELD_MASK);
        let body = self.get_json(&url).await?;
        Self::decode(body, &format!("places/{place_id}"))
    }

    /// Resolves a photo resource name to a servable URI, scaled to fit the
    /// given dimensions. `skipHttpRedirect` keeps the response as JSON
    /// instead of a redirect to the image bytes.
    ///
    /// # Errors
    ///
    /// - [`GoogleError::Http`] on network failure or non-2xx HTTP status.
    /// - [`GoogleError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn photo_media(
        &self,
        photo_reference: &str,
        max_width_px: u32,
        max_height_px: u32,
    ) -> Result<RawPhotoMedia, GoogleError> {
        let mut url = self.places_endpoint(&format!("{photo_reference}/media"))?;
        url.query_pairs_mut()
            .append_pair("maxWidthPx", &max_width_px.to_string())
            .append_pair("maxHeightPx", &max_height_px.to_string())
            .append_pair("skipHttpRedirect", "true");
        let body = self.get_json(&url).await?;
        Self::decode(body, "photo media")
    }

    /// Geocodes a free-form address or place name via the legacy endpoint.
    ///
    /// The legacy API reports failures inside a 200 body; any status other
    /// than `OK` or `ZERO_RESULTS` is surfaced as [`GoogleError::Api`].
    /// `ZERO_RESULTS` is not an error here — the caller decides what an
    /// empty result set means.
    ///
    /// # Errors
    ///
    /// - [`GoogleError::Api`] if the API reports a failure status.
    /// - [`GoogleError::Http`] on network failure or non-2xx HTTP status.
    /// - [`GoogleError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn geocode(&self, address: &str) -> Result<GeocodeResponse, GoogleError> {
        let mut url = Url::parse(&self.geocode_base_url)
            .map_err(|e| GoogleError::Api(format!("invalid geocode base URL: {e}")))?;
        url.query_pairs_mut()
            .append_pair("address", address)
            .append_pair("key", &self.api_key);

        let body = self.get_json(&url).await?;
        let response: GeocodeResponse = Self::decode(body, "geocode")?;

        match response.status.as_str() {
            "OK" | "ZERO_RESULTS" | "" => Ok(response),
            status => {
                let detail = response
                    .error_message
                    .unwrap_or_else(|| "no error message".to_string());
                Err(GoogleError::Api(format!("geocoding {status}: {detail}")))
            }
        }
    }

    /// Builds a places endpoint URL by appending `path` to the base.
    ///
    /// Textual concatenation, not `Url::join`: endpoint names like
    /// `places:searchNearby` contain a colon and would be treated as an
    /// absolute URL by RFC 3986 reference resolution.
    fn places_endpoint(&self, path: &str) -> Result<Url, GoogleError> {
        Url::parse(&format!("{}{path}", self.places_base_url))
            .map_err(|e| GoogleError::Api(format!("invalid endpoint path '{path}': {e}")))
    }

    /// Sends a POST with the API key header (and field mask when given),
    /// asserts a 2xx status, and parses the body as JSON.
    async fn post_json(
        &self,
        url: &Url,
        field_mask: Option<&str>,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value, GoogleError> {
        let mut request = self
            .client
            .post(url.clone())
            .header("X-Goog-Api-Key", &self.api_key)
            .json(payload);
        if let Some(mask) = field_mask {
            request = request.header("X-Goog-FieldMask", mask);
        }
        let response = request.send().await?.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| GoogleError::Deserialize {
            context: url.path().to_owned(),
            source: e,
        })
    }

    /// Sends a GET with the API key header, asserts a 2xx status, and parses
    /// the body as JSON.
    async fn get_json(&self, url: &Url) -> Result<serde_json::Value, GoogleError> {
        let response = self
            .client
            .get(url.clone())
            .header("X-Goog-Api-Key", &self.api_key)
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| GoogleError::Deserialize {
            context: url.path().to_owned(),
            source: e,
        })
    }

    fn decode<T: serde::de::DeserializeOwned>(
        body: serde_json::Value,
        context: &str,
    ) -> Result<T, GoogleError> {
        serde_json::from_value(body).map_err(|e| GoogleError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}
