//! Cache backends and the soft-failure adapter placed in front of them.
//!
//! The backends implement `categories_core::cache::Cache` and report their
//! errors. [`CacheAdapter`] absorbs those errors so that callers only ever
//! see a miss or a failed write.
//!
//! # Feature Flags
//!
//! - `memory` (default): in-process LRU cache with lazy TTL expiry
//! - `redis`: Redis cache shared between instances
//!
//! These features are mutually exclusive.

#[cfg(all(feature = "memory", feature = "redis"))]
compile_error!(
    "Features 'memory' and 'redis' are mutually exclusive. \
    Enable only one cache backend at a time."
);

#[cfg(not(any(feature = "memory", feature = "redis")))]
compile_error!(
    "No cache backend selected. Enable 'memory' or 'redis' feature. \
    Example: cargo build -p categories --features memory"
);

mod adapter;

#[cfg(any(test, feature = "memory"))]
pub mod memory;

#[cfg(feature = "redis")]
pub mod redis_impl;

pub use adapter::CacheAdapter;
