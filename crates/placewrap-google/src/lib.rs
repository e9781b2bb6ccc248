pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::GoogleClient;
pub use error::GoogleError;
pub use normalize::{
    normalize_geocode, normalize_photo_media, normalize_place_detail, normalize_search_places,
    normalize_suggestions,
};
