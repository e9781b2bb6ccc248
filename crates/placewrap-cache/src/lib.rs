//! Cache store contract and the in-process implementation.
//!
//! Handlers treat the store as an external, already-concurrency-safe
//! service: a miss is `Ok(None)`, never an error, and a failing store is a
//! degraded mode the caller continues through, not a request failure.

pub mod memory;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub use memory::MemoryCache;

/// Errors surfaced by a cache store backend.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The backing store could not be reached or refused the operation.
    #[error("cache store unavailable: {0}")]
    Unavailable(String),
}

/// Key/value store with per-entry TTL.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Looks up `key`. A miss (or an expired entry) is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] only when the store itself is unavailable.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    /// Stores `value` under `key`, expiring `ttl` from now.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] when the store itself is unavailable.
    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), CacheError>;
}
