//! Cache key derivation.
//!
//! Every cacheable operation maps its parameters to a canonical key string:
//! the operation prefix first, then each parameter, colon-delimited. Type
//! sets render in sorted order (`BTreeSet` iteration) and comma-joined, so a
//! client listing the same filters in a different order hits the same entry.
//! Empty sets render as empty fields rather than being omitted, keeping key
//! arity constant per operation.

use std::collections::BTreeSet;

use crate::params::{
    AutocompleteParams, GeocodeParams, PhotoParams, SearchParams, TextSearchParams,
};

/// Key for a nearby search result set.
#[must_use]
pub fn nearby_search(params: &SearchParams) -> String {
    format!(
        "places:{}:{}:{}:{}:{}",
        params.latitude,
        params.longitude,
        params.radius_meters,
        join_types(&params.included_types),
        join_types(&params.excluded_types)
    )
}

/// Key for a text search result set.
#[must_use]
pub fn text_search(params: &TextSearchParams) -> String {
    format!(
        "text_search:{}:{}:{}:{}",
        params.query, params.latitude, params.longitude, params.radius_meters
    )
}

/// Key for an autocomplete suggestion list.
#[must_use]
pub fn autocomplete(params: &AutocompleteParams) -> String {
    format!("autocomplete:{}", params.input)
}

/// Key for a single place's detail record.
#[must_use]
pub fn place_detail(place_id: &str) -> String {
    format!("place_info:{place_id}")
}

/// Key for a resolved photo URI.
///
/// The requested dimensions are part of the key: the upstream media endpoint
/// scales to fit them, so different dimensions are different results.
#[must_use]
pub fn photo(params: &PhotoParams) -> String {
    format!(
        "photo:{}:{}:{}",
        params.photo_reference, params.max_width_px, params.max_height_px
    )
}

/// Key for a geocoded place name.
#[must_use]
pub fn geocode(params: &GeocodeParams) -> String {
    format!("coordinates:{}", params.place_name)
}

fn join_types(types: &BTreeSet<String>) -> String {
    types
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(",")
}
