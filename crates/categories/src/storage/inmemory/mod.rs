//! In-memory storage backend.
//!
//! Stores categories in a HashMap wrapped in `Arc<RwLock<_>>`. Nothing is
//! persisted across restarts.
//!
//! # Example
//!
//! ```rust,ignore
//! use categories::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! ```

mod repository;

pub use repository::InMemoryRepository;
