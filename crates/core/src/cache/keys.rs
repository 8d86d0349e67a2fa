use std::time::Duration;

use crate::category::CategoryId;

/// Cache key holding the serialized list of every category.
pub const ALL_CATEGORIES_KEY: &str = "all_categories";

/// Expiry applied to every cached category entry.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

/// Returns the cache key for a single category.
pub fn category_key(id: &CategoryId) -> String {
    format!("category_{}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_key() {
        let id = CategoryId::new("550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert_eq!(
            category_key(&id),
            "category_550e8400-e29b-41d4-a716-446655440000"
        );
    }

    #[test]
    fn test_all_categories_key() {
        assert_eq!(ALL_CATEGORIES_KEY, "all_categories");
    }

    #[test]
    fn test_default_ttl_is_five_minutes() {
        assert_eq!(DEFAULT_CACHE_TTL.as_secs(), 300);
    }
}
