//! Request parameter types accepted at the HTTP boundary.
//!
//! Each operation has its own parameter record, deserialized straight from
//! the request body. Validation that must hold before any network or cache
//! work happens lives here, on the parameter type itself.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A request rejected before touching the cache or the upstream API.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The same place type appears in both the included and excluded sets.
    #[error("a place type cannot be both included and excluded: {types}")]
    OverlappingTypeFilters { types: String },
}

/// Parameters for a nearby search around a coordinate.
///
/// Type filters are `BTreeSet`s so that iteration order (and therefore cache
/// key rendering) is independent of the order the client listed them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default = "default_nearby_radius")]
    pub radius_meters: u32,
    #[serde(default)]
    pub included_types: BTreeSet<String>,
    #[serde(default)]
    pub excluded_types: BTreeSet<String>,
}

impl SearchParams {
    /// Checks that the included and excluded type sets are disjoint.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::OverlappingTypeFilters`] naming the
    /// overlapping types when the sets intersect.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let overlap: Vec<&str> = self
            .included_types
            .intersection(&self.excluded_types)
            .map(String::as_str)
            .collect();
        if overlap.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::OverlappingTypeFilters {
                types: overlap.join(", "),
            })
        }
    }
}

/// Parameters for a free-text search biased around a coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSearchParams {
    pub query: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default = "default_text_radius")]
    pub radius_meters: u32,
}

/// Parameters for an autocomplete lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteParams {
    pub input: String,
}

/// Parameters for resolving a photo reference to a servable URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoParams {
    pub photo_reference: String,
    #[serde(default = "default_photo_dimension")]
    pub max_width_px: u32,
    #[serde(default = "default_photo_dimension")]
    pub max_height_px: u32,
}

/// Parameters for geocoding a place name to coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodeParams {
    pub place_name: String,
}

fn default_nearby_radius() -> u32 {
    10_000
}

fn default_text_radius() -> u32 {
    5_000
}

fn default_photo_dimension() -> u32 {
    300
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_params(included: &[&str], excluded: &[&str]) -> SearchParams {
        SearchParams {
            latitude: 40.0,
            longitude: -75.0,
            radius_meters: 1_000,
            included_types: included.iter().map(ToString::to_string).collect(),
            excluded_types: excluded.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn validate_accepts_disjoint_type_sets() {
        let params = search_params(&["restaurant", "cafe"], &["bar"]);
        assert_eq!(params.validate(), Ok(()));
    }

    #[test]
    fn validate_accepts_empty_type_sets() {
        let params = search_params(&[], &[]);
        assert_eq!(params.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_overlapping_type_sets() {
        let params = search_params(&["restaurant", "cafe"], &["cafe", "bar"]);
        let err = params.validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::OverlappingTypeFilters {
                types: "cafe".to_string()
            }
        );
    }

    #[test]
    fn search_params_deserialize_applies_defaults() {
        let params: SearchParams =
            serde_json::from_str(r#"{"latitude": 40.0, "longitude": -75.0}"#).unwrap();
        assert_eq!(params.radius_meters, 10_000);
        assert!(params.included_types.is_empty());
        assert!(params.excluded_types.is_empty());
    }

    #[test]
    fn text_search_params_default_radius() {
        let params: TextSearchParams = serde_json::from_str(
            r#"{"query": "pizza", "latitude": 40.7128, "longitude": -74.006}"#,
        )
        .unwrap();
        assert_eq!(params.radius_meters, 5_000);
    }

    #[test]
    fn photo_params_default_dimensions() {
        let params: PhotoParams =
            serde_json::from_str(r#"{"photoReference": "places/abc/photos/def"}"#).unwrap();
        assert_eq!(params.max_width_px, 300);
        assert_eq!(params.max_height_px, 300);
    }
}
