//! SQLite schema definitions and SQL query constants.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS categories (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    description TEXT
);
"#;

pub const INSERT_CATEGORY: &str = r#"
INSERT INTO categories (id, name, description)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_CATEGORY_BY_ID: &str = r#"
SELECT id, name, description
FROM categories
WHERE id = ?1
"#;

/// Insertion order via the implicit rowid.
pub const SELECT_ALL_CATEGORIES: &str = r#"
SELECT id, name, description
FROM categories
ORDER BY rowid
"#;

pub const UPDATE_CATEGORY: &str = r#"
UPDATE categories
SET name = ?1, description = ?2
WHERE id = ?3
"#;

pub const DELETE_CATEGORY: &str = r#"
DELETE FROM categories
WHERE id = ?1
"#;
