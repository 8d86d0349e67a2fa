//! Category event publishers.
//!
//! The publisher follows the cache backend: the `memory` build broadcasts
//! events in-process, the `redis` build publishes them on Redis channels.

#[cfg(any(test, feature = "memory"))]
pub mod memory;

#[cfg(feature = "redis")]
pub mod redis_impl;
