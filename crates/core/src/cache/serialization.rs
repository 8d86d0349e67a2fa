//! Pure functions mapping categories to and from their cached JSON shape.
//!
//! Cached values are schema-less, so reconstruction validates every field and
//! reports anything unexpected as `None`. A `None` is treated as a cache miss
//! by callers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::category::{Category, CategoryId};

/// Cached representation of a single category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl CategoryRecord {
    /// Builds a record from a persisted category. Returns `None` without an id.
    pub fn from_category(category: &Category) -> Option<Self> {
        Some(Self {
            id: category.id()?.to_string(),
            name: category.name().to_string(),
            description: category.description().map(str::to_string),
        })
    }

    /// Rebuilds the category, re-running id and name validation.
    pub fn into_category(self) -> Option<Category> {
        let id = CategoryId::new(self.id).ok()?;
        Category::new(self.name, self.description)
            .ok()
            .map(|category| category.with_id(id))
    }
}

/// Serializes a persisted category to its cached JSON object.
pub fn serialize_category(category: &Category) -> Option<Value> {
    let record = CategoryRecord::from_category(category)?;
    serde_json::to_value(record).ok()
}

/// Serializes a list of categories to a JSON array, preserving order.
///
/// Categories without an id cannot be cached and are skipped.
pub fn serialize_categories(categories: &[Category]) -> Value {
    Value::Array(categories.iter().filter_map(serialize_category).collect())
}

/// Reconstructs a category from a cached value.
///
/// Returns `None` unless the value is an object with a non-empty string `id`,
/// a non-blank string `name` and a string or null `description`.
pub fn deserialize_category(value: &Value) -> Option<Category> {
    // serde would also accept a positional array for a struct
    if !value.is_object() {
        return None;
    }
    CategoryRecord::deserialize(value).ok()?.into_category()
}

/// Reconstructs a list of categories from a cached value.
///
/// Returns `None` unless the value is an array. Malformed elements are
/// dropped individually.
pub fn deserialize_categories(value: &Value) -> Option<Vec<Category>> {
    let items = value.as_array()?;
    Some(items.iter().filter_map(deserialize_category).collect())
}
