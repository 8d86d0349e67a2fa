use std::{env, time::Duration};

use categories_core::cache::DEFAULT_CACHE_TTL;
use categories_core::events::DEFAULT_EXCHANGE;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Whether the cache sits in front of the repository (default: true)
    pub cache_enabled: bool,
    /// Cache TTL in seconds (default: 300)
    pub cache_ttl_seconds: u64,
    /// Maximum number of in-memory cache entries (default: 10,000)
    #[allow(dead_code)]
    pub cache_max_entries: usize,
    /// Path to SQLite database file (default: "categories.db")
    #[allow(dead_code)]
    pub sqlite_path: String,
    /// Redis connection URL (default: "redis://localhost:6379")
    #[allow(dead_code)]
    pub redis_url: String,
    /// Exchange prefix for published events (default: "category_events")
    #[allow(dead_code)]
    pub event_exchange: String,
    /// Buffered events per in-process subscriber (default: 100)
    #[allow(dead_code)]
    pub event_channel_capacity: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_ENABLED` - Enable the cache (default: true)
    /// - `CACHE_TTL_SECONDS` - Cache TTL in seconds (default: 300)
    /// - `CACHE_MAX_ENTRIES` - Maximum in-memory cache entries (default: 10,000)
    /// - `SQLITE_PATH` - SQLite database path (default: "categories.db")
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    /// - `EVENT_EXCHANGE` - Event channel prefix (default: "category_events")
    /// - `EVENT_CHANNEL_CAPACITY` - In-process event buffer (default: 100)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            cache_enabled: lookup("CACHE_ENABLED")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(true),
            cache_ttl_seconds: lookup("CACHE_TTL_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CACHE_TTL.as_secs()),
            cache_max_entries: lookup("CACHE_MAX_ENTRIES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
            sqlite_path: lookup("SQLITE_PATH").unwrap_or_else(|| "categories.db".to_string()),
            redis_url: lookup("REDIS_URL")
                .unwrap_or_else(|| "redis://localhost:6379".to_string()),
            event_exchange: lookup("EVENT_EXCHANGE")
                .unwrap_or_else(|| DEFAULT_EXCHANGE.to_string()),
            event_channel_capacity: lookup("EVENT_CHANNEL_CAPACITY")
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
        }
    }

    /// Get cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
