//! In-process event publisher backed by a tokio broadcast channel.

use async_trait::async_trait;
use tokio::sync::broadcast;

use categories_core::events::{CategoryEvent, CategoryEventPublisher, Result};

/// Default number of buffered events per subscriber.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Broadcasts category events to in-process subscribers.
///
/// Publishing with no subscriber attached is not an error; the event is
/// simply dropped.
#[derive(Debug, Clone)]
pub struct BroadcastEventPublisher {
    sender: broadcast::Sender<CategoryEvent>,
}

impl Default for BroadcastEventPublisher {
    fn default() -> Self {
        Self::new(DEFAULT_CHANNEL_CAPACITY)
    }
}

impl BroadcastEventPublisher {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Subscribes to every event published after this call.
    #[allow(dead_code)]
    pub fn subscribe(&self) -> broadcast::Receiver<CategoryEvent> {
        self.sender.subscribe()
    }
}

#[async_trait]
impl CategoryEventPublisher for BroadcastEventPublisher {
    async fn publish(&self, event: &CategoryEvent) -> Result<()> {
        let receivers = self.sender.send(event.clone()).unwrap_or(0);
        tracing::debug!(
            category_id = %event.category_id(),
            routing_key = event.routing_key(),
            receivers,
            "Category event published"
        );
        Ok(())
    }
}
