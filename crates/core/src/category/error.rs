use thiserror::Error;

use crate::storage::RepositoryError;

use super::types::CategoryId;

/// Errors raised while constructing or validating categories.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CategoryError {
    #[error("Category name cannot be empty")]
    EmptyName,
    #[error("Category ID cannot be empty")]
    EmptyId,
    #[error("Category has not been assigned an ID")]
    MissingId,
}

/// Errors surfaced by the category use cases.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error(transparent)]
    Invalid(#[from] CategoryError),
    #[error("Category with id {0} not found")]
    NotFound(CategoryId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
