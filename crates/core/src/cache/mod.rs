mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{category_key, ALL_CATEGORIES_KEY, DEFAULT_CACHE_TTL};
pub use serialization::{
    deserialize_categories, deserialize_category, serialize_categories, serialize_category,
    CategoryRecord,
};
pub use traits::Cache;
