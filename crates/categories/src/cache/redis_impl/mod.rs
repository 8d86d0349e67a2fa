//! Redis cache backend shared between service instances.

mod cache;
mod error;

pub use cache::RedisCache;
pub(crate) use error::map_redis_error;
