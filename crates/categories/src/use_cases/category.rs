use std::sync::Arc;

use categories_core::category::{
    calculate_statistics, Category, CategoryId, CategoryStatistics, ServiceError,
};
use categories_core::events::CategoryEventPublisher;
use categories_core::storage::CategoryRepository;

/// Result type for category use cases.
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Category use cases over a repository and an event publisher.
///
/// Events are fire-and-forget: a failed publish is logged and never fails
/// the operation that triggered it.
#[derive(Clone)]
pub struct CategoryUseCase {
    repository: Arc<dyn CategoryRepository>,
    publisher: Arc<dyn CategoryEventPublisher>,
}

impl CategoryUseCase {
    pub fn new(
        repository: Arc<dyn CategoryRepository>,
        publisher: Arc<dyn CategoryEventPublisher>,
    ) -> Self {
        Self {
            repository,
            publisher,
        }
    }

    /// Validates and persists a new category, then announces it.
    pub async fn create_category(
        &self,
        name: String,
        description: Option<String>,
    ) -> Result<Category> {
        let category = Category::new(name, description)?;
        let created = self.repository.create(&category).await?;

        if let Err(err) = self.publisher.publish_created(&created).await {
            tracing::warn!(category_id = ?created.id(), error = %err, "Failed to publish category created event");
        }

        Ok(created)
    }

    pub async fn get_category(&self, id: &CategoryId) -> Result<Category> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(id.clone()))
    }

    pub async fn get_all_categories(&self) -> Result<Vec<Category>> {
        Ok(self.repository.find_all().await?)
    }

    /// Replaces an existing category's name and description.
    ///
    /// Existence is checked before the new values are validated.
    pub async fn update_category(
        &self,
        id: &CategoryId,
        name: String,
        description: Option<String>,
    ) -> Result<Category> {
        self.get_category(id).await?;

        let category = Category::new(name, description)?.with_id(id.clone());
        let updated = self.repository.update(&category).await?;

        if let Err(err) = self.publisher.publish_updated(&updated).await {
            tracing::warn!(category_id = %id, error = %err, "Failed to publish category updated event");
        }

        Ok(updated)
    }

    /// Deletes an existing category, returning whether a record was removed.
    ///
    /// The deleted event is only published when something was removed.
    pub async fn delete_category(&self, id: &CategoryId) -> Result<bool> {
        self.get_category(id).await?;

        let deleted = self.repository.delete(id).await?;

        if deleted {
            if let Err(err) = self.publisher.publish_deleted(id).await {
                tracing::warn!(category_id = %id, error = %err, "Failed to publish category deleted event");
            }
        } else {
            tracing::warn!(category_id = %id, "Category vanished before it could be deleted");
        }

        Ok(deleted)
    }

    pub async fn get_category_statistics(&self) -> Result<CategoryStatistics> {
        let categories = self.get_all_categories().await?;
        Ok(calculate_statistics(&categories))
    }
}
