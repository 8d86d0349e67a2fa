//! Application state and composition root.
//!
//! The storage backend, cache backend and event publisher are chosen by
//! feature flags. Whatever the combination, handlers only see the
//! [`CategoryUseCase`] sitting on top of a cached repository.

use std::sync::Arc;

use categories_core::cache::Cache;
use categories_core::events::CategoryEventPublisher;
use categories_core::storage::CategoryRepository;

use crate::config::Config;
use crate::storage::cached::CachedCategoryRepository;
use crate::use_cases::CategoryUseCase;

/// Shared application state.
///
/// Cloned for each request handler; every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Category use cases over the cached repository.
    pub categories: CategoryUseCase,
}

impl AppState {
    /// Wraps `repository` with the cache-aside decorator and wires the use cases.
    fn build<R, C>(
        repository: Arc<R>,
        cache: Option<Arc<C>>,
        publisher: Arc<dyn CategoryEventPublisher>,
        config: &Config,
    ) -> Self
    where
        R: CategoryRepository + 'static,
        C: Cache + 'static,
    {
        let cached_repo: Arc<dyn CategoryRepository> = Arc::new(CachedCategoryRepository::new(
            repository,
            cache,
            config.cache_ttl(),
        ));

        Self {
            categories: CategoryUseCase::new(cached_repo, publisher),
        }
    }

    /// Creates the state for the backends selected at compile time.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let repository = storage_backend::open(config).await?;
        let cache = cache_backend::open_cache(config).await;
        let publisher = cache_backend::open_publisher(config).await?;

        Ok(Self::build(repository, cache, publisher, config))
    }
}

// ============================================================================
// Backend factories
// ============================================================================

#[cfg(feature = "inmemory")]
mod storage_backend {
    use super::*;
    use crate::storage::inmemory::InMemoryRepository;

    pub async fn open(_config: &Config) -> Result<Arc<InMemoryRepository>, anyhow::Error> {
        tracing::info!("Using in-memory storage");
        Ok(Arc::new(InMemoryRepository::new()))
    }
}

#[cfg(feature = "sqlite")]
mod storage_backend {
    use super::*;
    use crate::storage::sqlite::SqliteRepository;

    pub async fn open(config: &Config) -> Result<Arc<SqliteRepository>, anyhow::Error> {
        tracing::info!(path = %config.sqlite_path, "Using SQLite storage");
        Ok(Arc::new(SqliteRepository::new(&config.sqlite_path).await?))
    }
}

#[cfg(feature = "memory")]
mod cache_backend {
    use super::*;
    use crate::cache::memory::MemoryCache;
    use crate::events::memory::BroadcastEventPublisher;

    pub async fn open_cache(config: &Config) -> Option<Arc<MemoryCache>> {
        if !config.cache_enabled {
            tracing::info!("Cache disabled");
            return None;
        }

        tracing::info!(
            max_entries = config.cache_max_entries,
            ttl_seconds = config.cache_ttl_seconds,
            "Using in-memory cache"
        );
        Some(Arc::new(MemoryCache::new(config.cache_max_entries)))
    }

    pub async fn open_publisher(
        config: &Config,
    ) -> Result<Arc<dyn CategoryEventPublisher>, anyhow::Error> {
        Ok(Arc::new(BroadcastEventPublisher::new(
            config.event_channel_capacity,
        )))
    }
}

#[cfg(feature = "redis")]
mod cache_backend {
    use super::*;
    use crate::cache::redis_impl::RedisCache;
    use crate::events::redis_impl::RedisEventPublisher;

    pub async fn open_cache(config: &Config) -> Option<Arc<RedisCache>> {
        if !config.cache_enabled {
            tracing::info!("Cache disabled");
            return None;
        }

        match RedisCache::new(&config.redis_url).await {
            Ok(cache) => {
                tracing::info!(ttl_seconds = config.cache_ttl_seconds, "Using Redis cache");
                Some(Arc::new(cache))
            }
            Err(err) => {
                tracing::warn!(error = %err, "Redis cache unavailable, running without cache");
                None
            }
        }
    }

    pub async fn open_publisher(
        config: &Config,
    ) -> Result<Arc<dyn CategoryEventPublisher>, anyhow::Error> {
        let publisher =
            RedisEventPublisher::new(&config.redis_url, config.event_exchange.clone()).await?;
        tracing::info!(exchange = %config.event_exchange, "Publishing events to Redis");
        Ok(Arc::new(publisher))
    }
}

// ============================================================================
// Test support
// ============================================================================


#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(all(feature = "inmemory", feature = "memory"))]
    #[tokio::test]
    async fn test_new_with_default_backends() {
        let state = AppState::new(&Config::default()).await.unwrap();

        let created = state
            .categories
            .create_category("Books".to_string(), None)
            .await
            .unwrap();
        let id = created.id().unwrap().clone();

        let found = state.categories.get_category(&id).await.unwrap();
        assert_eq!(found.name(), "Books");
    }

    #[tokio::test]
    async fn test_default_state_starts_empty() {
        let state = AppState::default();

        let all = state.categories.get_all_categories().await.unwrap();
        assert!(all.is_empty());
    }
}
