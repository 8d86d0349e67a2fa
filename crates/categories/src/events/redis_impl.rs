//! Redis event publisher.
//!
//! Events are published as JSON on `<exchange>:<routing key>` channels, for
//! example `category_events:category.created`, so subscribers can pattern
//! subscribe to `category_events:*`.

use async_trait::async_trait;
use redis::AsyncCommands;

use categories_core::events::{CategoryEvent, CategoryEventPublisher, EventError, Result};

/// Publishes category events through Redis pub/sub.
pub struct RedisEventPublisher {
    client: redis::Client,
    exchange: String,
}

fn map_redis_error(err: redis::RedisError) -> EventError {
    if err.is_connection_refusal() || err.is_timeout() || err.is_connection_dropped() {
        EventError::ConnectionFailed(err.to_string())
    } else {
        EventError::PublishFailed(err.to_string())
    }
}

/// Returns the channel an event is published on.
pub fn event_channel(exchange: &str, event: &CategoryEvent) -> String {
    format!("{}:{}", exchange, event.routing_key())
}

impl RedisEventPublisher {
    /// Connects to Redis at `url` and verifies the connection.
    pub async fn new(url: &str, exchange: impl Into<String>) -> Result<Self> {
        let client = redis::Client::open(url).map_err(map_redis_error)?;

        let _ = client
            .get_multiplexed_async_connection()
            .await
            .map_err(map_redis_error)?;

        Ok(Self {
            client,
            exchange: exchange.into(),
        })
    }
}

#[async_trait]
impl CategoryEventPublisher for RedisEventPublisher {
    async fn publish(&self, event: &CategoryEvent) -> Result<()> {
        let channel = event_channel(&self.exchange, event);
        let payload =
            serde_json::to_string(event).map_err(|e| EventError::Serialization(e.to_string()))?;

        let mut conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(map_redis_error)?;

        conn.publish::<_, _, ()>(&channel, &payload)
            .await
            .map_err(map_redis_error)?;

        tracing::debug!(
            category_id = %event.category_id(),
            channel = %channel,
            "Category event published"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use categories_core::category::{Category, CategoryId};
    use categories_core::events::DEFAULT_EXCHANGE;
    use chrono::Utc;

    #[test]
    fn test_event_channel_uses_routing_key() {
        let category = Category::new("Books", None)
            .unwrap()
            .with_id(CategoryId::new("cat-1").unwrap());
        let event = CategoryEvent::updated(&category, Utc::now()).unwrap();

        assert_eq!(
            event_channel(DEFAULT_EXCHANGE, &event),
            "category_events:category.updated"
        );
    }

    #[tokio::test]
    async fn test_publish_when_redis_available() {
        let url =
            std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string());
        let Ok(publisher) = RedisEventPublisher::new(&url, DEFAULT_EXCHANGE).await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };

        let id = CategoryId::generate();
        assert!(publisher.publish_deleted(&id).await.is_ok());
    }
}
