//! Normalization of raw Google payloads into the stable response schema.
//!
//! Everything here is a pure function: raw upstream shapes in, schema values
//! out, no I/O. Normalization is total — a missing optional field becomes a
//! documented default, never an error. Only the identifying fields (`id`,
//! `location`) are required; a listing entry missing them is dropped from
//! the output rather than failing the batch.
//!
//! Two defaulting policies exist, and they intentionally differ:
//!
//! - **Listing policy** ([`normalize_search_places`]): absent `priceLevel`
//!   becomes the literal `"UNKNOWN"`, absent amenity flags become `false`.
//! - **Detail policy** ([`normalize_place_detail`]): absent `priceLevel` and
//!   absent amenity flags stay absent.
//!
//! Consumers of the two response families have come to rely on each shape,
//! so the divergence is kept explicit here instead of being unified.

use placewrap_core::places::{
    AccessibilityFlags, AmenityFlags, AutocompleteSuggestion, GeocodedLocation, LatLng,
    OpeningHours, OpeningPeriod, PhoneNumbers, PhotoMedia, PhotoRef, PlaceDetail, PlaceSummary,
    PriceRange, Review, OPEN_ENDED_PRICE_UNITS,
};

use crate::types::{
    GeocodeResponse, LocalizedText, RawAccessibilityOptions, RawMoney, RawOpeningHours, RawPhoto,
    RawPhotoMedia, RawPlace, RawPriceRange, RawReview, RawSuggestion, RawText,
};

/// `priceLevel` stand-in for listing entries the upstream priced at nothing.
const UNKNOWN_PRICE_LEVEL: &str = "UNKNOWN";

/// Normalizes a listing of raw place values under the listing policy.
///
/// Each entry is decoded individually; entries that fail to decode (missing
/// `id` or `location`, or otherwise malformed) are dropped.
#[must_use]
pub fn normalize_search_places(values: Vec<serde_json::Value>) -> Vec<PlaceSummary> {
    values
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<RawPlace>(value) {
            Ok(raw) => Some(summary_from_raw(raw)),
            Err(error) => {
                tracing::warn!(%error, "dropping malformed place record from listing");
                None
            }
        })
        .collect()
}

fn summary_from_raw(raw: RawPlace) -> PlaceSummary {
    let RawPlace {
        id,
        display_name,
        location,
        types,
        photos,
        accessibility_options,
        current_opening_hours,
        regular_opening_hours,
        price_level,
        price_range,
        rating,
        user_rating_count,
        national_phone_number,
        international_phone_number,
        allows_dogs,
        good_for_children,
        good_for_groups,
        ..
    } = raw;

    PlaceSummary {
        id,
        display_name: localized(display_name),
        location: LatLng {
            latitude: location.latitude,
            longitude: location.longitude,
        },
        types,
        photos: photos_from_raw(photos),
        accessibility: accessibility_options.map(accessibility_from_raw),
        opening_hours: opening_hours_from_raw(current_opening_hours, regular_opening_hours),
        price_range: price_range.and_then(price_range_from_raw),
        price_level: Some(price_level.unwrap_or_else(|| UNKNOWN_PRICE_LEVEL.to_string())),
        rating,
        rating_count: user_rating_count,
        phone_numbers: PhoneNumbers {
            national: national_phone_number,
            international: international_phone_number,
        },
        amenities: AmenityFlags {
            allows_dogs: Some(allows_dogs.unwrap_or(false)),
            good_for_children: Some(good_for_children.unwrap_or(false)),
            good_for_groups: Some(good_for_groups.unwrap_or(false)),
        },
    }
}

/// Normalizes a single raw place under the detail policy.
#[must_use]
pub fn normalize_place_detail(raw: RawPlace) -> PlaceDetail {
    let RawPlace {
        id,
        display_name,
        location,
        types,
        photos,
        accessibility_options,
        current_opening_hours,
        regular_opening_hours,
        price_level,
        price_range,
        rating,
        user_rating_count,
        national_phone_number,
        international_phone_number,
        allows_dogs,
        good_for_children,
        good_for_groups,
        formatted_address,
        editorial_summary,
        reviews,
    } = raw;

    PlaceDetail {
        id,
        display_name: localized(display_name),
        location: LatLng {
            latitude: location.latitude,
            longitude: location.longitude,
        },
        types,
        photos: photos_from_raw(photos),
        accessibility: accessibility_options.map(accessibility_from_raw),
        opening_hours: opening_hours_from_raw(current_opening_hours, regular_opening_hours),
        price_range: price_range.and_then(price_range_from_raw),
        price_level,
        rating,
        rating_count: user_rating_count,
        phone_numbers: PhoneNumbers {
            national: national_phone_number,
            international: international_phone_number,
        },
        amenities: AmenityFlags {
            allows_dogs,
            good_for_children,
            good_for_groups,
        },
        description: localized(editorial_summary),
        address: formatted_address,
        reviews: reviews_from_raw(reviews),
    }
}

/// Normalizes raw autocomplete suggestions, dropping entries without a
/// place prediction or a place ID.
#[must_use]
pub fn normalize_suggestions(values: Vec<serde_json::Value>) -> Vec<AutocompleteSuggestion> {
    values
        .into_iter()
        .filter_map(|value| {
            serde_json::from_value::<RawSuggestion>(value)
                .ok()
                .and_then(suggestion_from_raw)
        })
        .collect()
}

fn suggestion_from_raw(raw: RawSuggestion) -> Option<AutocompleteSuggestion> {
    let prediction = raw.place_prediction?;
    let (main_text, secondary_text) = match prediction.structured_format {
        Some(format) => (localized(format.main_text), localized(format.secondary_text)),
        None => (None, None),
    };
    Some(AutocompleteSuggestion {
        place_id: prediction.place_id,
        full_text: localized(prediction.text).unwrap_or_default(),
        main_text: main_text.unwrap_or_default(),
        secondary_text,
    })
}

/// Extracts the first geocoding result, or `None` when the upstream matched
/// nothing.
#[must_use]
pub fn normalize_geocode(response: GeocodeResponse) -> Option<GeocodedLocation> {
    let first = response.results.into_iter().next()?;
    Some(GeocodedLocation {
        latitude: first.geometry.location.lat,
        longitude: first.geometry.location.lng,
        place_id: first.place_id,
    })
}

/// Shapes a raw photo-media body, or `None` when the upstream produced no
/// servable URI.
#[must_use]
pub fn normalize_photo_media(raw: RawPhotoMedia) -> Option<PhotoMedia> {
    let uri = raw.photo_uri?;
    Some(PhotoMedia {
        name: raw.name.unwrap_or_else(|| "Unnamed Photo".to_string()),
        uri,
    })
}

fn localized(text: Option<LocalizedText>) -> Option<String> {
    text.and_then(|localized| localized.text)
}

fn photos_from_raw(photos: Vec<RawPhoto>) -> Vec<PhotoRef> {
    photos
        .into_iter()
        .filter(|photo| !photo.name.is_empty())
        .map(|photo| PhotoRef {
            name: photo.name,
            width_px: photo.width_px,
            height_px: photo.height_px,
            maps_uri: photo.google_maps_uri,
        })
        .collect()
}

fn accessibility_from_raw(raw: RawAccessibilityOptions) -> AccessibilityFlags {
    AccessibilityFlags {
        wheelchair_accessible_parking: raw.wheelchair_accessible_parking,
        wheelchair_accessible_entrance: raw.wheelchair_accessible_entrance,
        wheelchair_accessible_restroom: raw.wheelchair_accessible_restroom,
        wheelchair_accessible_seating: raw.wheelchair_accessible_seating,
    }
}

/// Builds opening hours, preferring the current week's hours and falling
/// back to the regular schedule. Absent hours stay absent. Periods without a
/// close time (24-hour places) are dropped rather than given an invented
/// close.
fn opening_hours_from_raw(
    current: Option<RawOpeningHours>,
    regular: Option<RawOpeningHours>,
) -> Option<OpeningHours> {
    let hours = current.or(regular)?;
    let periods = hours
        .periods
        .into_iter()
        .filter_map(|period| {
            let open = period.open?;
            let close = period.close?;
            Some(OpeningPeriod {
                open_day: open.day,
                open_hour: open.hour,
                open_minute: open.minute,
                close_day: close.day,
                close_hour: close.hour,
                close_minute: close.minute,
            })
        })
        .collect();
    Some(OpeningHours {
        open_now: hours.open_now,
        periods,
    })
}

/// Builds a bounded price range. An open-ended upstream range takes the
/// fixed sentinel end price, with the currency carried over from the start
/// price. A range without a usable start price normalizes to `None`.
fn price_range_from_raw(raw: RawPriceRange) -> Option<PriceRange> {
    let start = raw.start_price?;
    let start_price_units = money_units(&start)?;
    let currency_code = start.currency_code?;
    let end_price_units = raw
        .end_price
        .as_ref()
        .and_then(money_units)
        .unwrap_or(OPEN_ENDED_PRICE_UNITS);
    Some(PriceRange {
        currency_code,
        start_price_units,
        end_price_units,
    })
}

/// The API renders money units as a decimal string; accept a bare number
/// too.
fn money_units(money: &RawMoney) -> Option<i64> {
    match money.units.as_ref()? {
        serde_json::Value::Number(number) => number.as_i64(),
        serde_json::Value::String(text) => text.parse().ok(),
        _ => None,
    }
}

fn reviews_from_raw(reviews: Vec<RawReview>) -> Vec<Review> {
    reviews
        .into_iter()
        .map(|review| Review {
            author_name: review.author_attribution.and_then(|a| a.display_name),
            rating: review.rating,
            text: review.text.and_then(RawText::into_text),
            relative_time: review.relative_publish_time_description,
        })
        .collect()
}
