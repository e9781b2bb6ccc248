//! Route handler for geocoding a place name to coordinates.

use axum::{extract::State, Extension, Json};

use placewrap_core::params::GeocodeParams;
use placewrap_core::places::GeocodedLocation;

use super::{map_service_error, ApiError, AppState};
use crate::middleware::RequestId;

pub(super) async fn geocode(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(params): Json<GeocodeParams>,
) -> Result<Json<GeocodedLocation>, ApiError> {
    state
        .service
        .geocode(&params)
        .await
        .map(Json)
        .map_err(|e| map_service_error(req_id.0, &e))
}
