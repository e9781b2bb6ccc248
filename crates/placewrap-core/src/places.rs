//! Normalized response schema.
//!
//! These are the fixed shapes the service returns to clients and persists in
//! the cache, regardless of how the upstream payload varied. All types are
//! immutable value records: constructed once by the normalizer, serialized
//! for the cache and the HTTP response, compared structurally in tests.
//!
//! Wire names are camelCase throughout.

use serde::{Deserialize, Serialize};

/// End price (in currency units) substituted when the upstream price range is
/// open-ended ("$100+"). A fixed sentinel rather than an absent field, so
/// consumers can treat every range as bounded.
pub const OPEN_ENDED_PRICE_UNITS: i64 = 500;

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

/// Reference to an upstream-hosted photo.
///
/// `name` is the upstream photo resource name, usable with the photo
/// operation to resolve a servable URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoRef {
    pub name: String,
    pub width_px: u32,
    pub height_px: u32,
    pub maps_uri: Option<String>,
}

/// Wheelchair accessibility flags. Each flag is tri-state: the upstream omits
/// flags it has no data for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityFlags {
    pub wheelchair_accessible_parking: Option<bool>,
    pub wheelchair_accessible_entrance: Option<bool>,
    pub wheelchair_accessible_restroom: Option<bool>,
    pub wheelchair_accessible_seating: Option<bool>,
}

/// National and international phone numbers, either of which may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumbers {
    pub national: Option<String>,
    pub international: Option<String>,
}

/// Amenity flags. Listing responses default absent flags to `false`; detail
/// responses keep them `None` — see the normalizer's policy docs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmenityFlags {
    pub allows_dogs: Option<bool>,
    pub good_for_children: Option<bool>,
    pub good_for_groups: Option<bool>,
}

/// One weekly open/close span. Days are 0–6 (Sunday-based), hours 0–23,
/// minutes 0–59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningPeriod {
    pub open_day: u8,
    pub open_hour: u8,
    pub open_minute: u8,
    pub close_day: u8,
    pub close_hour: u8,
    pub close_minute: u8,
}

/// Opening hours for a place. Absent upstream hours normalize to a missing
/// `OpeningHours` value, never to an empty-periods object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHours {
    pub open_now: Option<bool>,
    pub periods: Vec<OpeningPeriod>,
}

/// A bounded price range in whole currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    pub currency_code: String,
    pub start_price_units: i64,
    pub end_price_units: i64,
}

/// A single review on a place detail record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub author_name: Option<String>,
    pub rating: Option<f64>,
    pub text: Option<String>,
    pub relative_time: Option<String>,
}

/// One entry in a nearby or text search listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceSummary {
    pub id: String,
    pub display_name: Option<String>,
    pub location: LatLng,
    pub types: Vec<String>,
    pub photos: Vec<PhotoRef>,
    pub accessibility: Option<AccessibilityFlags>,
    pub opening_hours: Option<OpeningHours>,
    pub price_range: Option<PriceRange>,
    pub price_level: Option<String>,
    pub rating: Option<f64>,
    pub rating_count: Option<i64>,
    pub phone_numbers: PhoneNumbers,
    pub amenities: AmenityFlags,
}

/// Full record for a single place: everything a [`PlaceSummary`] carries plus
/// the detail-only fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDetail {
    pub id: String,
    pub display_name: Option<String>,
    pub location: LatLng,
    pub types: Vec<String>,
    pub photos: Vec<PhotoRef>,
    pub accessibility: Option<AccessibilityFlags>,
    pub opening_hours: Option<OpeningHours>,
    pub price_range: Option<PriceRange>,
    pub price_level: Option<String>,
    pub rating: Option<f64>,
    pub rating_count: Option<i64>,
    pub phone_numbers: PhoneNumbers,
    pub amenities: AmenityFlags,
    pub description: Option<String>,
    pub address: Option<String>,
    pub reviews: Vec<Review>,
}

/// A nearby search page: the normalized listing plus the upstream pagination
/// token when the upstream produced one. Tokens are passed through verbatim
/// and only on fresh responses — cached pages carry no token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacesPage {
    pub places: Vec<PlaceSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

/// One autocomplete suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteSuggestion {
    pub place_id: String,
    pub full_text: String,
    pub main_text: String,
    pub secondary_text: Option<String>,
}

/// A geocoded place name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodedLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub place_id: String,
}

/// A resolved, servable photo URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoMedia {
    pub name: String,
    pub uri: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_summary_serializes_camel_case() {
        let summary = PlaceSummary {
            id: "ChIJtest".to_string(),
            display_name: Some("Test Cafe".to_string()),
            location: LatLng {
                latitude: 40.0,
                longitude: -75.0,
            },
            types: vec!["cafe".to_string()],
            photos: vec![],
            accessibility: None,
            opening_hours: None,
            price_range: None,
            price_level: Some("UNKNOWN".to_string()),
            rating: Some(4.5),
            rating_count: None,
            phone_numbers: PhoneNumbers {
                national: None,
                international: None,
            },
            amenities: AmenityFlags {
                allows_dogs: Some(false),
                good_for_children: Some(false),
                good_for_groups: Some(false),
            },
        };
        let json = serde_json::to_value(&summary).expect("serialize");
        assert_eq!(json["displayName"], "Test Cafe");
        assert_eq!(json["priceLevel"], "UNKNOWN");
        assert_eq!(json["ratingCount"], serde_json::Value::Null);
        assert_eq!(json["amenities"]["allowsDogs"], false);
    }

    #[test]
    fn places_page_omits_absent_token() {
        let page = PlacesPage {
            places: vec![],
            next_page_token: None,
        };
        let json = serde_json::to_value(&page).expect("serialize");
        assert!(json.get("nextPageToken").is_none());
    }

    #[test]
    fn places_page_round_trips_token() {
        let page = PlacesPage {
            places: vec![],
            next_page_token: Some("tok-1".to_string()),
        };
        let json = serde_json::to_string(&page).expect("serialize");
        let back: PlacesPage = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, page);
    }
}
