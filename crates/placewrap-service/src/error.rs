use thiserror::Error;

use placewrap_core::ValidationError;
use placewrap_google::GoogleError;

/// Errors surfaced by the request handlers.
///
/// Cache failures are deliberately absent: an unavailable cache store
/// degrades to miss semantics inside the handler and never reaches callers.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request was rejected before touching the cache or the upstream.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The upstream matched nothing for the given query.
    #[error("no results found for \"{query}\"")]
    NotFound { query: String },

    /// The upstream photo media body carried no servable URI.
    #[error("upstream photo response did not include a photo URI")]
    MissingPhotoUri,

    /// The upstream call failed; nothing was cached.
    #[error(transparent)]
    Upstream(#[from] GoogleError),
}
