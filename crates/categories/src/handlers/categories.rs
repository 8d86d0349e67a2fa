use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use categories_core::category::{
    Category, CategoryId, CategoryStatistics, CreateCategoryRequest, UpdateCategoryRequest,
};

use crate::{handlers::AppError, state::AppState};

/// List all categories (GET /categories).
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, AppError> {
    let categories = state.categories.get_all_categories().await?;

    Ok(Json(categories))
}

/// Create a new category (POST /categories).
pub async fn create_category(
    State(state): State<AppState>,
    Json(payload): Json<CreateCategoryRequest>,
) -> Result<Json<Category>, AppError> {
    let category = state
        .categories
        .create_category(payload.name, payload.description)
        .await?;

    tracing::info!(category_id = ?category.id(), name = %category.name(), "Created category");

    Ok(Json(category))
}

/// Category statistics (GET /categories/statistics).
pub async fn category_statistics(
    State(state): State<AppState>,
) -> Result<Json<CategoryStatistics>, AppError> {
    Ok(Json(state.categories.get_category_statistics().await?))
}

/// Get a single category by ID (GET /categories/{id}).
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
) -> Result<Json<Category>, AppError> {
    Ok(Json(state.categories.get_category(&id).await?))
}

/// Replace a category's name and description (PUT /categories/{id}).
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> Result<Json<Category>, AppError> {
    let category = state
        .categories
        .update_category(&id, payload.name, payload.description)
        .await?;

    tracing::info!(category_id = %id, "Updated category");

    Ok(Json(category))
}

/// Delete a category by ID (DELETE /categories/{id}).
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
) -> Result<Json<Value>, AppError> {
    if !state.categories.delete_category(&id).await? {
        return Err(AppError::internal("Failed to delete category"));
    }

    tracing::info!(category_id = %id, "Deleted category");

    Ok(Json(json!({ "message": "Category deleted successfully" })))
}
