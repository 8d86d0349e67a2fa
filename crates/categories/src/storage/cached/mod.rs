//! Cached repository decorator.
//!
//! Wraps a `CategoryRepository` with the cache-aside pattern:
//!
//! - **Reads**: check the cache first; on a miss (or a malformed cached value)
//!   fetch from the repository and populate the cache
//! - **Writes**: persist to the repository, then invalidate the affected keys
//!
//! The cache is optional and every cache failure degrades to a miss, so the
//! decorator behaves exactly like the inner repository when the cache is
//! absent or broken.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let repo = Arc::new(SqliteRepository::new("categories.db").await?);
//! let cache = Arc::new(MemoryCache::new(10_000));
//!
//! let cached_repo = CachedCategoryRepository::new(repo, Some(cache), Duration::from_secs(300));
//! ```

mod category;

pub use category::CachedCategoryRepository;
