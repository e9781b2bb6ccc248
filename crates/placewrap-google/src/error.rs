use thiserror::Error;

/// Errors returned by the Google Places / Geocoding client.
#[derive(Debug, Error)]
pub enum GoogleError {
    /// Network or TLS failure, or a non-2xx HTTP status from the upstream.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The upstream returned a 2xx body that signals an API-level failure
    /// (e.g. a geocoding status other than `OK`/`ZERO_RESULTS`).
    #[error("Google API error: {0}")]
    Api(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
