//! In-process TTL cache backed by a `HashMap`.
//!
//! Entries expire lazily: an expired entry is treated as a miss on read and
//! overwritten on the next write to the same key. There is no background
//! sweeper and no size bound — TTL is the only eviction.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{Cache, CacheError};

#[derive(Debug, Clone)]
struct Entry {
    value: Vec<u8>,
    expires_at: Instant,
}

/// Thread-safe in-memory cache with per-entry TTL.
#[derive(Debug, Default)]
pub struct MemoryCache {
    store: RwLock<HashMap<String, Entry>>,
}

impl MemoryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let store = self.store.read().await;
        Ok(store
            .get(key)
            .filter(|entry| entry.expires_at > Instant::now())
            .map(|entry| entry.value.clone()))
    }

    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), CacheError> {
        let entry = Entry {
            value,
            expires_at: Instant::now() + ttl,
        };
        let mut store = self.store.write().await;
        store.insert(key.to_owned(), entry);
        Ok(())
    }
}
