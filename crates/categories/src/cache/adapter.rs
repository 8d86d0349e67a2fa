//! Soft-failure cache port.
//!
//! Every backend failure, unreachable server or undecodable payload is
//! logged and reported as a miss (`None`) or as `false`. Nothing here returns
//! an error.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use categories_core::cache::Cache;

/// JSON cache port over a raw [`Cache`] backend.
pub struct CacheAdapter<C: Cache> {
    cache: Arc<C>,
}

impl<C: Cache> Clone for CacheAdapter<C> {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
        }
    }
}

impl<C: Cache> CacheAdapter<C> {
    pub fn new(cache: Arc<C>) -> Self {
        Self { cache }
    }

    /// Reads and decodes a JSON value. Any failure reads as absence.
    pub async fn get(&self, key: &str) -> Option<Value> {
        let bytes = match self.cache.get(key).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(cache_key = %key, error = %err, "Cache read failed");
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(cache_key = %key, error = %err, "Discarding undecodable cache payload");
                None
            }
        }
    }

    /// Stores a JSON value with the given expiry. Returns whether it was written.
    pub async fn set(&self, key: &str, value: &Value, ttl: Duration) -> bool {
        let bytes = match serde_json::to_vec(value) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(cache_key = %key, error = %err, "Failed to encode cache value");
                return false;
            }
        };

        match self.cache.set(key, &bytes, Some(ttl)).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(cache_key = %key, error = %err, "Cache write failed");
                false
            }
        }
    }

    /// Invalidates a key. Returns whether the backend removed something.
    pub async fn delete(&self, key: &str) -> bool {
        match self.cache.delete(key).await {
            Ok(removed) => removed,
            Err(err) => {
                tracing::warn!(cache_key = %key, error = %err, "Cache invalidation failed");
                false
            }
        }
    }

    #[allow(dead_code)]
    pub async fn exists(&self, key: &str) -> bool {
        match self.cache.exists(key).await {
            Ok(exists) => exists,
            Err(err) => {
                tracing::warn!(cache_key = %key, error = %err, "Cache existence check failed");
                false
            }
        }
    }
}
