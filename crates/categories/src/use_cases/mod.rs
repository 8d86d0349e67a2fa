//! Application use cases for categories.
//!
//! Validation, repository calls and event publication. Handlers talk to
//! [`CategoryUseCase`] only.

mod category;

pub use category::CategoryUseCase;
