pub mod categories;
pub mod error;
pub mod health;

pub use error::AppError;
