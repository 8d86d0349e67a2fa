//! Cached category repository decorator.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use categories_core::cache::{
    category_key, deserialize_categories, deserialize_category, serialize_categories,
    serialize_category, Cache, ALL_CATEGORIES_KEY,
};
use categories_core::category::{Category, CategoryId};
use categories_core::storage::{CategoryRepository, Result};

use crate::cache::CacheAdapter;

/// Cached category repository decorator.
///
/// - `create` invalidates `all_categories`
/// - `update` and a successful `delete` invalidate `category_<id>` and
///   `all_categories`
/// - a `delete` that removed nothing leaves the cache untouched
///
/// Repository errors propagate unchanged and leave the cache untouched.
///
/// # Type Parameters
///
/// * `R` - The underlying repository implementation
/// * `C` - The cache backend
pub struct CachedCategoryRepository<R, C>
where
    R: CategoryRepository + ?Sized,
    C: Cache,
{
    repository: Arc<R>,
    cache: Option<CacheAdapter<C>>,
    ttl: Duration,
}

impl<R, C> CachedCategoryRepository<R, C>
where
    R: CategoryRepository + ?Sized,
    C: Cache,
{
    /// Creates a new cached category repository.
    ///
    /// # Arguments
    ///
    /// * `repository` - The underlying repository to cache
    /// * `cache` - The cache backend, or `None` to run uncached
    /// * `ttl` - Time-to-live for cached values
    pub fn new(repository: Arc<R>, cache: Option<Arc<C>>, ttl: Duration) -> Self {
        Self {
            repository,
            cache: cache.map(CacheAdapter::new),
            ttl,
        }
    }

    async fn cached(&self, key: &str) -> Option<Value> {
        match &self.cache {
            Some(cache) => cache.get(key).await,
            None => None,
        }
    }

    async fn store(&self, key: &str, value: &Value) {
        if let Some(cache) = &self.cache {
            if !cache.set(key, value, self.ttl).await {
                tracing::debug!(cache_key = %key, "Cache population skipped");
            }
        }
    }

    async fn invalidate(&self, key: &str) {
        if let Some(cache) = &self.cache {
            cache.delete(key).await;
        }
    }
}

#[async_trait]
impl<R, C> CategoryRepository for CachedCategoryRepository<R, C>
where
    R: CategoryRepository + ?Sized + 'static,
    C: Cache + 'static,
{
    async fn create(&self, category: &Category) -> Result<Category> {
        // 1. Persist to storage
        let created = self.repository.create(category).await?;

        // 2. Invalidate the list; the single key is populated lazily
        self.invalidate(ALL_CATEGORIES_KEY).await;

        tracing::debug!(category_id = ?created.id(), name = %created.name(), "Category created");
        Ok(created)
    }

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>> {
        let cache_key = category_key(id);

        if let Some(value) = self.cached(&cache_key).await {
            if let Some(category) = deserialize_category(&value) {
                tracing::trace!(category_id = %id, "Cache hit for category");
                return Ok(Some(category));
            }
            tracing::warn!(category_id = %id, "Malformed cached category, treating as miss");
        }

        tracing::trace!(category_id = %id, "Cache miss for category");
        let category = self.repository.find_by_id(id).await?;

        // Absent categories are not cached
        if let Some(value) = category.as_ref().and_then(serialize_category) {
            self.store(&cache_key, &value).await;
        }

        Ok(category)
    }

    async fn find_all(&self) -> Result<Vec<Category>> {
        if let Some(value) = self.cached(ALL_CATEGORIES_KEY).await {
            if let Some(categories) = deserialize_categories(&value) {
                tracing::trace!(count = categories.len(), "Cache hit for category list");
                return Ok(categories);
            }
            tracing::warn!("Malformed cached category list, treating as miss");
        }

        tracing::trace!("Cache miss for category list");
        let categories = self.repository.find_all().await?;
        self.store(ALL_CATEGORIES_KEY, &serialize_categories(&categories))
            .await;

        Ok(categories)
    }

    async fn update(&self, category: &Category) -> Result<Category> {
        // 1. Persist to storage
        let updated = self.repository.update(category).await?;

        // 2. Invalidate the entity and the list that holds a copy of it
        if let Some(id) = updated.id() {
            self.invalidate(&category_key(id)).await;
        }
        self.invalidate(ALL_CATEGORIES_KEY).await;

        tracing::debug!(category_id = ?updated.id(), name = %updated.name(), "Category updated");
        Ok(updated)
    }

    async fn delete(&self, id: &CategoryId) -> Result<bool> {
        // 1. Persist deletion to storage
        let deleted = self.repository.delete(id).await?;

        // 2. Invalidate only when something was removed
        if deleted {
            self.invalidate(&category_key(id)).await;
            self.invalidate(ALL_CATEGORIES_KEY).await;
            tracing::debug!(category_id = %id, "Category deleted");
        }

        Ok(deleted)
    }
}
