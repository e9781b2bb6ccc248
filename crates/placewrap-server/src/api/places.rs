//! Route handlers for the places operations: thin adapters between HTTP
//! bodies and [`PlacesService`] calls.

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Serialize;

use placewrap_core::params::{
    AutocompleteParams, PhotoParams, SearchParams, TextSearchParams,
};
use placewrap_core::places::{
    AutocompleteSuggestion, PhotoMedia, PlaceDetail, PlaceSummary, PlacesPage,
};

use super::{map_service_error, ApiError, AppState};
use crate::middleware::RequestId;

#[derive(Debug, Serialize)]
pub(super) struct TextSearchResponse {
    places: Vec<PlaceSummary>,
}

#[derive(Debug, Serialize)]
pub(super) struct AutocompleteResponse {
    suggestions: Vec<AutocompleteSuggestion>,
}

pub(super) async fn nearby_search(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(params): Json<SearchParams>,
) -> Result<Json<PlacesPage>, ApiError> {
    state
        .service
        .nearby_search(&params)
        .await
        .map(Json)
        .map_err(|e| map_service_error(req_id.0, &e))
}

pub(super) async fn text_search(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(params): Json<TextSearchParams>,
) -> Result<Json<TextSearchResponse>, ApiError> {
    state
        .service
        .text_search(&params)
        .await
        .map(|places| Json(TextSearchResponse { places }))
        .map_err(|e| map_service_error(req_id.0, &e))
}

pub(super) async fn autocomplete(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(params): Json<AutocompleteParams>,
) -> Result<Json<AutocompleteResponse>, ApiError> {
    state
        .service
        .autocomplete(&params)
        .await
        .map(|suggestions| Json(AutocompleteResponse { suggestions }))
        .map_err(|e| map_service_error(req_id.0, &e))
}

pub(super) async fn place_detail(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(place_id): Path<String>,
) -> Result<Json<PlaceDetail>, ApiError> {
    state
        .service
        .place_detail(&place_id)
        .await
        .map(Json)
        .map_err(|e| map_service_error(req_id.0, &e))
}

pub(super) async fn photo(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(params): Json<PhotoParams>,
) -> Result<Json<PhotoMedia>, ApiError> {
    state
        .service
        .photo(&params)
        .await
        .map(Json)
        .map_err(|e| map_service_error(req_id.0, &e))
}
