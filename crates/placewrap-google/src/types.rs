//! Raw Google API response types.
//!
//! These model the wire shapes of the Places API (New, v1) and the legacy
//! Geocoding API. Only the identifying fields of a place (`id`, `location`)
//! are required; everything else is optional with a serde default, so a
//! sparse upstream record still decodes. Listing endpoints keep their
//! entries as raw `Value`s — callers decode each entry individually and drop
//! the ones that fail, rather than letting one malformed record fail the
//! whole batch.

use serde::Deserialize;

/// Response body for `places:searchNearby` and `places:searchText`.
///
/// Both fields are absent when the search matched nothing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub places: Vec<serde_json::Value>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// A single place record, shared by the search and detail endpoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPlace {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<LocalizedText>,
    pub location: RawLatLng,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub photos: Vec<RawPhoto>,
    #[serde(default)]
    pub accessibility_options: Option<RawAccessibilityOptions>,
    #[serde(default)]
    pub current_opening_hours: Option<RawOpeningHours>,
    #[serde(default)]
    pub regular_opening_hours: Option<RawOpeningHours>,
    #[serde(default)]
    pub price_level: Option<String>,
    #[serde(default)]
    pub price_range: Option<RawPriceRange>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_rating_count: Option<i64>,
    #[serde(default)]
    pub national_phone_number: Option<String>,
    #[serde(default)]
    pub international_phone_number: Option<String>,
    #[serde(default)]
    pub allows_dogs: Option<bool>,
    #[serde(default)]
    pub good_for_children: Option<bool>,
    #[serde(default)]
    pub good_for_groups: Option<bool>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub editorial_summary: Option<LocalizedText>,
    #[serde(default)]
    pub reviews: Vec<RawReview>,
}

/// The v1 API wraps display text in `{ "text": ..., "languageCode": ... }`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedText {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLatLng {
    pub latitude: f64,
    pub longitude: f64,
}

/// A photo attachment. `name` defaults to empty so a nameless photo decodes
/// (the normalizer drops it) instead of failing the whole place record.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPhoto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub width_px: u32,
    #[serde(default)]
    pub height_px: u32,
    #[serde(default)]
    pub google_maps_uri: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAccessibilityOptions {
    #[serde(default)]
    pub wheelchair_accessible_parking: Option<bool>,
    #[serde(default)]
    pub wheelchair_accessible_entrance: Option<bool>,
    #[serde(default)]
    pub wheelchair_accessible_restroom: Option<bool>,
    #[serde(default)]
    pub wheelchair_accessible_seating: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOpeningHours {
    #[serde(default)]
    pub open_now: Option<bool>,
    #[serde(default)]
    pub periods: Vec<RawPeriod>,
}

/// A weekly span. Twenty-four-hour places have no `close` point.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPeriod {
    #[serde(default)]
    pub open: Option<RawTimePoint>,
    #[serde(default)]
    pub close: Option<RawTimePoint>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTimePoint {
    #[serde(default)]
    pub day: u8,
    #[serde(default)]
    pub hour: u8,
    #[serde(default)]
    pub minute: u8,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPriceRange {
    #[serde(default)]
    pub start_price: Option<RawMoney>,
    #[serde(default)]
    pub end_price: Option<RawMoney>,
}

/// The API renders `units` as a decimal string (`"80"`); keep it as a raw
/// `Value` and coerce in the normalizer so a numeric rendering also decodes.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMoney {
    #[serde(default)]
    pub currency_code: Option<String>,
    #[serde(default)]
    pub units: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReview {
    #[serde(default)]
    pub author_attribution: Option<RawAuthorAttribution>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub text: Option<RawText>,
    #[serde(default)]
    pub relative_publish_time_description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAuthorAttribution {
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Review text arrives as a localized object in v1 but as a bare string in
/// older payloads; accept both.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawText {
    Localized(LocalizedText),
    Plain(String),
}

impl RawText {
    #[must_use]
    pub fn into_text(self) -> Option<String> {
        match self {
            RawText::Localized(localized) => localized.text,
            RawText::Plain(text) => Some(text),
        }
    }
}

// ---------------------------------------------------------------------------
// places:autocomplete
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteResponse {
    #[serde(default)]
    pub suggestions: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSuggestion {
    #[serde(default)]
    pub place_prediction: Option<RawPlacePrediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPlacePrediction {
    pub place_id: String,
    #[serde(default)]
    pub text: Option<LocalizedText>,
    #[serde(default)]
    pub structured_format: Option<RawStructuredFormat>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStructuredFormat {
    #[serde(default)]
    pub main_text: Option<LocalizedText>,
    #[serde(default)]
    pub secondary_text: Option<LocalizedText>,
}

// ---------------------------------------------------------------------------
// photo media
// ---------------------------------------------------------------------------

/// Response body for `{photo}/media` with `skipHttpRedirect=true`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPhotoMedia {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub photo_uri: Option<String>,
}

// ---------------------------------------------------------------------------
// legacy geocoding
// ---------------------------------------------------------------------------

/// Response envelope for the legacy Geocoding API. Unlike the v1 Places API
/// this endpoint reports failures as a 200 with a non-`OK` status.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<RawGeocodeResult>,
}

#[derive(Debug, Deserialize)]
pub struct RawGeocodeResult {
    pub geometry: RawGeometry,
    pub place_id: String,
}

#[derive(Debug, Deserialize)]
pub struct RawGeometry {
    pub location: RawGeocodeLatLng,
}

/// The legacy API abbreviates coordinate field names.
#[derive(Debug, Deserialize)]
pub struct RawGeocodeLatLng {
    pub lat: f64,
    pub lng: f64,
}
