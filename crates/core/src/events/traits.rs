use async_trait::async_trait;
use chrono::Utc;

use crate::category::{Category, CategoryId};

use super::{CategoryEvent, Result};

/// Outbound port announcing category mutations.
///
/// Implementors only provide [`publish`](Self::publish); the typed helpers
/// stamp the event with the current time.
#[async_trait]
pub trait CategoryEventPublisher: Send + Sync {
    /// Publishes an event to subscribers.
    async fn publish(&self, event: &CategoryEvent) -> Result<()>;

    async fn publish_created(&self, category: &Category) -> Result<()> {
        let event = CategoryEvent::created(category, Utc::now())?;
        self.publish(&event).await
    }

    async fn publish_updated(&self, category: &Category) -> Result<()> {
        let event = CategoryEvent::updated(category, Utc::now())?;
        self.publish(&event).await
    }

    async fn publish_deleted(&self, id: &CategoryId) -> Result<()> {
        let event = CategoryEvent::deleted(id.clone(), Utc::now());
        self.publish(&event).await
    }
}
