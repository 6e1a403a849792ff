//! Time-bounded memoization of resolved definitions documents.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use crate::domain::Definitions;

#[derive(Debug, Clone)]
struct CacheEntry {
    definitions: Definitions,
    fetched_at: Instant,
}

/// Shared cache keyed by the exact source locator string.
///
/// Entries carry their fetch instant; freshness is judged against the TTL
/// the caller supplies at read time, so call sites can hold the same entry
/// to different staleness bounds. Entries are overwritten on successful
/// reload and evicted explicitly through [`clear`](DefinitionsCache::clear).
#[derive(Debug, Clone, Default)]
pub struct DefinitionsCache {
    inner: Arc<RwLock<HashMap<String, CacheEntry>>>,
}

impl DefinitionsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached document for `key` if its age is below `ttl`.
    pub async fn get_fresh(&self, key: &str, ttl: Duration) -> Option<Definitions> {
        let map = self.inner.read().await;
        map.get(key).and_then(|entry| {
            if entry.fetched_at.elapsed() < ttl {
                Some(entry.definitions.clone())
            } else {
                None
            }
        })
    }

    /// Insert or overwrite the entry for `key` with a fresh timestamp.
    pub async fn put(&self, key: impl Into<String>, definitions: Definitions) {
        let mut map = self.inner.write().await;
        map.insert(
            key.into(),
            CacheEntry {
                definitions,
                fetched_at: Instant::now(),
            },
        );
    }

    /// Evict one key, or everything when no key is given.
    pub async fn clear(&self, key: Option<&str>) {
        let mut map = self.inner.write().await;
        match key {
            Some(key) => {
                map.remove(key);
            }
            None => map.clear(),
        }
    }

    /// Number of entries, fresh or stale.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
