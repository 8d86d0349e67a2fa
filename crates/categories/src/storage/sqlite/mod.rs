//! SQLite storage backend.
//!
//! Uses `rusqlite` for synchronous access, wrapped by `tokio-rusqlite` so
//! every query runs on the connection's dedicated thread.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
