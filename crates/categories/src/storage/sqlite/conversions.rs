//! SQLite row conversion functions.
//!
//! Rows are re-validated on the way out; a stored row that no longer forms
//! a valid category surfaces as a conversion failure.

use rusqlite::Row;

use categories_core::category::{Category, CategoryError, CategoryId};

/// Convert a SQLite row to a Category.
///
/// Expected columns: id, name, description
pub fn row_to_category(row: &Row) -> rusqlite::Result<Category> {
    let id: String = row.get(0)?;
    let name: String = row.get(1)?;
    let description: Option<String> = row.get(2)?;

    let id = CategoryId::new(id).map_err(|e| conversion_failure(0, e))?;
    let category = Category::new(name, description).map_err(|e| conversion_failure(1, e))?;
    Ok(category.with_id(id))
}

fn conversion_failure(column: usize, err: CategoryError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(err))
}
