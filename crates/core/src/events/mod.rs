mod error;
mod traits;
mod types;

pub use error::{EventError, Result};
pub use traits::CategoryEventPublisher;
pub use types::{CategoryEvent, DEFAULT_EXCHANGE};
