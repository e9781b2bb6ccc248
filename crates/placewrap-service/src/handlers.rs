//! Per-operation request handlers.
//!
//! Every handler runs the same pipeline: validate, derive the cache key,
//! check the cache, and on a miss call upstream, normalize, write the cache,
//! and return the fresh result. Validation failures short-circuit before the
//! key is derived; upstream failures propagate and are never cached; cache
//! failures degrade to miss semantics and never fail the request.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use placewrap_cache::Cache;
use placewrap_core::keys;
use placewrap_core::params::{
    AutocompleteParams, GeocodeParams, PhotoParams, SearchParams, TextSearchParams,
};
use placewrap_core::places::{
    AutocompleteSuggestion, GeocodedLocation, PhotoMedia, PlaceDetail, PlaceSummary, PlacesPage,
};
use placewrap_google::{
    normalize_geocode, normalize_photo_media, normalize_place_detail, normalize_search_places,
    normalize_suggestions, GoogleClient,
};

use crate::error::ServiceError;

/// The request handlers, bound to one upstream client and one cache store.
///
/// Constructed once at startup and shared across request tasks; holds no
/// per-request state.
pub struct PlacesService {
    client: GoogleClient,
    cache: Arc<dyn Cache>,
    cache_ttl: Duration,
}

impl PlacesService {
    #[must_use]
    pub fn new(client: GoogleClient, cache: Arc<dyn Cache>, cache_ttl: Duration) -> Self {
        Self {
            client,
            cache,
            cache_ttl,
        }
    }

    /// Searches for places near a coordinate.
    ///
    /// The upstream pagination token is passed through verbatim on fresh
    /// responses; cached pages carry no token (only the listing is cached).
    ///
    /// # Errors
    ///
    /// - [`ServiceError::Validation`] when the type filter sets overlap.
    /// - [`ServiceError::Upstream`] when the upstream call fails.
    pub async fn nearby_search(&self, params: &SearchParams) -> Result<PlacesPage, ServiceError> {
        params.validate()?;
        let key = keys::nearby_search(params);

        if let Some(places) = self.cache_read::<Vec<PlaceSummary>>(&key).await {
            return Ok(PlacesPage {
                places,
                next_page_token: None,
            });
        }

        let response = self.client.search_nearby(params).await?;
        let places = normalize_search_places(response.places);
        self.cache_write(&key, &places).await;

        Ok(PlacesPage {
            places,
            next_page_token: response.next_page_token,
        })
    }

    /// Searches for places matching a free-text query.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Upstream`] when the upstream call fails.
    pub async fn text_search(
        &self,
        params: &TextSearchParams,
    ) -> Result<Vec<PlaceSummary>, ServiceError> {
        let key = keys::text_search(params);

        if let Some(places) = self.cache_read(&key).await {
            return Ok(places);
        }

        let response = self.client.search_text(params).await?;
        let places = normalize_search_places(response.places);
        self.cache_write(&key, &places).await;

        Ok(places)
    }

    /// Fetches autocomplete suggestions for a partial input.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Upstream`] when the upstream call fails.
    pub async fn autocomplete(
        &self,
        params: &AutocompleteParams,
    ) -> Result<Vec<AutocompleteSuggestion>, ServiceError> {
        let key = keys::autocomplete(params);

        if let Some(suggestions) = self.cache_read(&key).await {
            return Ok(suggestions);
        }

        let response = self.client.autocomplete(&params.input).await?;
        let suggestions = normalize_suggestions(response.suggestions);
        self.cache_write(&key, &suggestions).await;

        Ok(suggestions)
    }

    /// Fetches the full detail record for one place.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Upstream`] when the upstream call fails or
    /// the record is missing its identifying fields.
    pub async fn place_detail(&self, place_id: &str) -> Result<PlaceDetail, ServiceError> {
        let key = keys::place_detail(place_id);

        if let Some(detail) = self.cache_read(&key).await {
            return Ok(detail);
        }

        let raw = self.client.place_detail(place_id).await?;
        let detail = normalize_place_detail(raw);
        self.cache_write(&key, &detail).await;

        Ok(detail)
    }

    /// Resolves a photo reference to a servable URI at the requested
    /// dimensions.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::MissingPhotoUri`] when the upstream body carries no
    ///   URI.
    /// - [`ServiceError::Upstream`] when the upstream call fails.
    pub async fn photo(&self, params: &PhotoParams) -> Result<PhotoMedia, ServiceError> {
        let key = keys::photo(params);

        if let Some(media) = self.cache_read(&key).await {
            return Ok(media);
        }

        let raw = self
            .client
            .photo_media(&params.photo_reference, params.max_width_px, params.max_height_px)
            .await?;
        let media = normalize_photo_media(raw).ok_or(ServiceError::MissingPhotoUri)?;
        self.cache_write(&key, &media).await;

        Ok(media)
    }

    /// Geocodes a place name to coordinates.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::NotFound`] when the upstream matched nothing;
    ///   nothing is cached in that case.
    /// - [`ServiceError::Upstream`] when the upstream call fails.
    pub async fn geocode(&self, params: &GeocodeParams) -> Result<GeocodedLocation, ServiceError> {
        let key = keys::geocode(params);

        if let Some(location) = self.cache_read(&key).await {
            return Ok(location);
        }

        let response = self.client.geocode(&params.place_name).await?;
        let location = normalize_geocode(response).ok_or_else(|| ServiceError::NotFound {
            query: params.place_name.clone(),
        })?;
        self.cache_write(&key, &location).await;

        Ok(location)
    }

    /// Reads and decodes a cached entry. Read failures and undecodable
    /// entries degrade to a miss.
    async fn cache_read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.cache.get(key).await {
            Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
                Ok(value) => {
                    tracing::debug!(key, "cache hit");
                    Some(value)
                }
                Err(error) => {
                    tracing::warn!(key, %error, "ignoring undecodable cache entry");
                    None
                }
            },
            Ok(None) => {
                tracing::debug!(key, "cache miss");
                None
            }
            Err(error) => {
                tracing::warn!(key, %error, "cache read failed, treating as miss");
                None
            }
        }
    }

    /// Serializes and stores a fresh result. Write failures are logged and
    /// swallowed; the caller still gets the fresh result.
    async fn cache_write<T: Serialize>(&self, key: &str, value: &T) {
        let bytes = match serde_json::to_vec(value) {
            Ok(bytes) => bytes,
            Err(error) => {
                tracing::error!(key, %error, "failed to serialize cache payload");
                return;
            }
        };
        if let Err(error) = self.cache.set(key, bytes, self.cache_ttl).await {
            tracing::warn!(key, %error, "cache write failed");
        }
    }
}
