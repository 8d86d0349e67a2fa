//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use categories_core::category::{Category, CategoryId};
use categories_core::storage::{CategoryRepository, RepositoryError, Result};

/// HashMap-backed category storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    categories: Arc<RwLock<HashMap<CategoryId, Category>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryRepository {
    async fn create(&self, category: &Category) -> Result<Category> {
        let mut categories = self.categories.write().await;

        let id = match category.id() {
            Some(id) if categories.contains_key(id) => {
                return Err(RepositoryError::AlreadyExists {
                    entity_type: "Category",
                    id: id.to_string(),
                });
            }
            Some(id) => id.clone(),
            None => CategoryId::generate(),
        };

        let stored = category.clone().with_id(id.clone());
        categories.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>> {
        let categories = self.categories.read().await;
        Ok(categories.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Category>> {
        let categories = self.categories.read().await;
        Ok(categories.values().cloned().collect())
    }

    async fn update(&self, category: &Category) -> Result<Category> {
        let id = category
            .id()
            .ok_or_else(|| RepositoryError::InvalidData("Category ID is required".to_string()))?;

        let mut categories = self.categories.write().await;
        match categories.get_mut(id) {
            Some(stored) => {
                *stored = category.clone();
                Ok(category.clone())
            }
            None => Err(RepositoryError::NotFound {
                entity_type: "Category",
                id: id.to_string(),
            }),
        }
    }

    async fn delete(&self, id: &CategoryId) -> Result<bool> {
        let mut categories = self.categories.write().await;
        Ok(categories.remove(id).is_some())
    }
}
