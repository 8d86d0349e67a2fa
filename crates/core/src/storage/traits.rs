use async_trait::async_trait;

use crate::category::{Category, CategoryId};

use super::Result;

/// Persistence port for categories.
///
/// Absence is never an error on the read and delete paths: `find_by_id`
/// returns `None` and `delete` returns `false` for unknown ids.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Persists a new category, generating an id when it has none.
    ///
    /// Fails with [`RepositoryError::AlreadyExists`](super::RepositoryError::AlreadyExists)
    /// when an explicit id is already stored.
    async fn create(&self, category: &Category) -> Result<Category>;

    /// Gets a category by its id.
    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>>;

    /// Gets every stored category, in no particular order.
    async fn find_all(&self) -> Result<Vec<Category>>;

    /// Replaces all fields of an existing category.
    ///
    /// Fails with `InvalidData` when the category has no id and with
    /// `NotFound` when nothing is stored under it.
    async fn update(&self, category: &Category) -> Result<Category>;

    /// Deletes a category, returning whether a record was removed.
    async fn delete(&self, id: &CategoryId) -> Result<bool>;
}
