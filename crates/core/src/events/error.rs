use thiserror::Error;

use crate::category::CategoryError;

/// Errors that can occur while publishing category events.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("Invalid event: {0}")]
    InvalidEvent(#[from] CategoryError),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Publish failed: {0}")]
    PublishFailed(String),
    #[error("Event broker connection failed: {0}")]
    ConnectionFailed(String),
}

/// Result type for event publishing.
pub type Result<T> = std::result::Result<T, EventError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_event_display() {
        let error: EventError = CategoryError::MissingId.into();
        assert_eq!(
            error.to_string(),
            "Invalid event: Category has not been assigned an ID"
        );
    }

    #[test]
    fn test_publish_failed_display() {
        let error = EventError::PublishFailed("channel closed".to_string());
        assert_eq!(error.to_string(), "Publish failed: channel closed");
    }
}
