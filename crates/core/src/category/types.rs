use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::CategoryError;

/// Opaque category identifier. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryId(String);

impl CategoryId {
    /// Wraps an existing identifier, rejecting the empty string.
    pub fn new(value: impl Into<String>) -> Result<Self, CategoryError> {
        let value = value.into();
        if value.is_empty() {
            return Err(CategoryError::EmptyId);
        }
        Ok(Self(value))
    }

    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CategoryId {
    type Error = CategoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CategoryId> for String {
    fn from(id: CategoryId) -> Self {
        id.0
    }
}

/// A category of the catalog.
///
/// The name is validated on construction and the value is never mutated in
/// place: an update builds a new `Category` carrying the same id. The id is
/// `None` until a repository persists the category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    id: Option<CategoryId>,
    name: String,
    description: Option<String>,
}

impl Category {
    /// Creates an unpersisted category.
    ///
    /// Fails with [`CategoryError::EmptyName`] when the name is blank after
    /// trimming. The name itself is stored as given.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self, CategoryError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CategoryError::EmptyName);
        }
        Ok(Self {
            id: None,
            name,
            description,
        })
    }

    /// Returns the same category carrying the given id.
    pub fn with_id(mut self, id: CategoryId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn id(&self) -> Option<&CategoryId> {
        self.id.as_ref()
    }

    /// Returns the id, failing for categories that were never persisted.
    pub fn require_id(&self) -> Result<&CategoryId, CategoryError> {
        self.id.as_ref().ok_or(CategoryError::MissingId)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_id_rejects_empty() {
        assert_eq!(CategoryId::new(""), Err(CategoryError::EmptyId));
        assert_eq!(CategoryId::new("a").unwrap().as_str(), "a");
    }

    #[test]
    fn test_generated_ids_are_unique_uuids() {
        let first = CategoryId::generate();
        let second = CategoryId::generate();

        assert_ne!(first, second);
        assert!(Uuid::parse_str(first.as_str()).is_ok());
    }

    #[test]
    fn test_category_id_serde_is_a_plain_string() {
        let id = CategoryId::new("cat-1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"cat-1\"");

        let parsed: CategoryId = serde_json::from_str("\"cat-1\"").unwrap();
        assert_eq!(parsed, id);

        assert!(serde_json::from_str::<CategoryId>("\"\"").is_err());
    }

    #[test]
    fn test_new_category_validates_name() {
        assert_eq!(Category::new("", None), Err(CategoryError::EmptyName));
        assert_eq!(Category::new("   \t", None), Err(CategoryError::EmptyName));

        let category = Category::new(" Books ", Some("Paper".to_string())).unwrap();
        assert_eq!(category.name(), " Books ");
        assert_eq!(category.description(), Some("Paper"));
        assert!(category.id().is_none());
    }

    #[test]
    fn test_with_id_and_require_id() {
        let category = Category::new("Books", None).unwrap();
        assert_eq!(category.require_id(), Err(CategoryError::MissingId));

        let id = CategoryId::new("cat-1").unwrap();
        let category = category.with_id(id.clone());
        assert_eq!(category.require_id(), Ok(&id));
    }

    #[test]
    fn test_category_serializes_public_shape() {
        let category = Category::new("Books", None)
            .unwrap()
            .with_id(CategoryId::new("cat-1").unwrap());

        let json = serde_json::to_value(&category).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "cat-1", "name": "Books", "description": null})
        );
    }
}
