use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::{Category, CategoryError, CategoryId};

/// Default name of the exchange category events are published on.
pub const DEFAULT_EXCHANGE: &str = "category_events";

/// Domain event announcing a category mutation.
///
/// Serializes as a flat JSON object tagged by `event_type`
/// (`category_created`, `category_updated`, `category_deleted`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum CategoryEvent {
    CategoryCreated {
        category_id: CategoryId,
        name: String,
        description: Option<String>,
        timestamp: DateTime<Utc>,
    },
    CategoryUpdated {
        category_id: CategoryId,
        name: String,
        description: Option<String>,
        timestamp: DateTime<Utc>,
    },
    CategoryDeleted {
        category_id: CategoryId,
        timestamp: DateTime<Utc>,
    },
}

impl CategoryEvent {
    /// Builds a "created" event. The category must already be persisted.
    pub fn created(category: &Category, timestamp: DateTime<Utc>) -> Result<Self, CategoryError> {
        Ok(Self::CategoryCreated {
            category_id: category.require_id()?.clone(),
            name: category.name().to_string(),
            description: category.description().map(str::to_string),
            timestamp,
        })
    }

    /// Builds an "updated" event. The category must already be persisted.
    pub fn updated(category: &Category, timestamp: DateTime<Utc>) -> Result<Self, CategoryError> {
        Ok(Self::CategoryUpdated {
            category_id: category.require_id()?.clone(),
            name: category.name().to_string(),
            description: category.description().map(str::to_string),
            timestamp,
        })
    }

    pub fn deleted(category_id: CategoryId, timestamp: DateTime<Utc>) -> Self {
        Self::CategoryDeleted {
            category_id,
            timestamp,
        }
    }

    pub fn category_id(&self) -> &CategoryId {
        match self {
            Self::CategoryCreated { category_id, .. }
            | Self::CategoryUpdated { category_id, .. }
            | Self::CategoryDeleted { category_id, .. } => category_id,
        }
    }

    /// Routing key used when publishing to a topic exchange.
    pub fn routing_key(&self) -> &'static str {
        match self {
            Self::CategoryCreated { .. } => "category.created",
            Self::CategoryUpdated { .. } => "category.updated",
            Self::CategoryDeleted { .. } => "category.deleted",
        }
    }
}
