//! SQLite repository implementation.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use categories_core::category::{Category, CategoryId};
use categories_core::storage::{CategoryRepository, RepositoryError, Result};

use super::conversions::row_to_category;
use super::error::map_tokio_rusqlite_error;
use super::schema;

const ENTITY: &str = "Category";

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-backed category storage.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens (or creates) a file-based database and ensures the schema exists.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a repository over an in-memory database.
    ///
    /// Data is lost when the connection is dropped.
    #[allow(dead_code)]
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl CategoryRepository for SqliteRepository {
    async fn create(&self, category: &Category) -> Result<Category> {
        let id = category.id().cloned().unwrap_or_else(CategoryId::generate);
        let stored = category.clone().with_id(id.clone());

        let id_str = id.to_string();
        let name = stored.name().to_string();
        let description = stored.description().map(str::to_string);

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_CATEGORY,
                    rusqlite::params![id_str, name, description],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY, id.to_string()))?;

        Ok(stored)
    }

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_CATEGORY_BY_ID)
                    .map_err(wrap_err)?;
                match stmt.query_row([&id_str], row_to_category) {
                    Ok(category) => Ok(Some(category)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY, id.to_string()))
    }

    async fn find_all(&self) -> Result<Vec<Category>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_ALL_CATEGORIES)
                    .map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_category).map_err(wrap_err)?;

                let mut categories = Vec::new();
                for row_result in rows {
                    categories.push(row_result.map_err(wrap_err)?);
                }
                Ok(categories)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY, "unknown"))
    }

    async fn update(&self, category: &Category) -> Result<Category> {
        let id = category
            .id()
            .ok_or_else(|| RepositoryError::InvalidData("Category ID is required".to_string()))?;

        let id_str = id.to_string();
        let name = category.name().to_string();
        let description = category.description().map(str::to_string);

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_CATEGORY,
                        rusqlite::params![name, description, id_str],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY, id.to_string()))?;

        Ok(category.clone())
    }

    async fn delete(&self, id: &CategoryId) -> Result<bool> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_CATEGORY, [&id_str])
                    .map_err(wrap_err)?;
                Ok(rows > 0)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY, id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn repo() -> SqliteRepository {
        SqliteRepository::new_in_memory()
            .await
            .expect("in-memory database opens")
    }

    fn category(name: &str) -> Category {
        Category::new(name, None).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = repo().await;

        let created = repo
            .create(&Category::new("Books", Some("Paper".to_string())).unwrap())
            .await
            .unwrap();
        let id = created.id().expect("id assigned on create").clone();

        let found = repo.find_by_id(&id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_create_duplicate_id_fails() {
        let repo = repo().await;
        let id = CategoryId::new("books").unwrap();

        repo.create(&category("Books").with_id(id.clone()))
            .await
            .unwrap();
        let result = repo.create(&category("Other").with_id(id)).await;

        assert_eq!(
            result,
            Err(RepositoryError::AlreadyExists {
                entity_type: "Category",
                id: "books".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_find_all_in_insertion_order() {
        let repo = repo().await;
        for name in ["Electronics", "Books", "Clothing"] {
            repo.create(&category(name)).await.unwrap();
        }

        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        assert_eq!(names, vec!["Electronics", "Books", "Clothing"]);
    }

    #[tokio::test]
    async fn test_update_existing_and_missing() {
        let repo = repo().await;
        let created = repo
            .create(&Category::new("Books", Some("Paper".to_string())).unwrap())
            .await
            .unwrap();
        let id = created.id().unwrap().clone();

        let replacement = category("Novels").with_id(id.clone());
        assert_eq!(repo.update(&replacement).await.unwrap(), replacement);
        assert_eq!(repo.find_by_id(&id).await.unwrap(), Some(replacement));

        let unknown = category("Toys").with_id(CategoryId::new("missing").unwrap());
        assert!(matches!(
            repo.update(&unknown).await,
            Err(RepositoryError::NotFound { .. })
        ));
        assert!(matches!(
            repo.update(&category("Toys")).await,
            Err(RepositoryError::InvalidData(_))
        ));
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = repo().await;
        let created = repo.create(&category("Books")).await.unwrap();
        let id = created.id().unwrap().clone();

        assert!(repo.delete(&id).await.unwrap());
        assert!(!repo.delete(&id).await.unwrap());
        assert_eq!(repo.find_by_id(&id).await.unwrap(), None);
    }
}
