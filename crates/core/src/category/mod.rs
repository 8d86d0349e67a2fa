mod error;
mod requests;
mod statistics;
mod types;

pub use error::{CategoryError, ServiceError};
pub use requests::{CreateCategoryRequest, UpdateCategoryRequest};
pub use statistics::{calculate_statistics, CategoryStatistics};
pub use types::{Category, CategoryId};
