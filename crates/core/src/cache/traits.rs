use std::time::Duration;

use async_trait::async_trait;

use super::Result;

/// Raw key/value cache backend.
///
/// Backends report their failures; absorbing them into misses is the job of
/// the caller-facing adapter, not of the backend.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a value from the cache by key.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Sets a value in the cache with an optional TTL.
    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()>;

    /// Deletes a value, returning whether a live key was removed.
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Checks whether a live value is stored under the key.
    async fn exists(&self, key: &str) -> Result<bool>;
}
