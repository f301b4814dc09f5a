//! Response cache shared by every fetch path.
//!
//! A `CacheStore` maps a canonical endpoint string to the payload last fetched
//! for it, together with the time it was stored. Freshness is decided lazily
//! by the reader; stores never expire entries on their own.

pub mod file;
pub mod memory;

pub use file::FileCacheStore;
pub use memory::MemoryCacheStore;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::errors::AppResult;

/// A cached payload with the time it was stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub payload: Value,
    pub stored_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn new(payload: Value) -> Self {
        Self {
            payload,
            stored_at: Utc::now(),
        }
    }

    /// An entry is fresh strictly inside the TTL window: at exactly
    /// `stored_at + ttl` it is already stale.
    pub fn is_fresh(&self, ttl: Duration, at: DateTime<Utc>) -> bool {
        at.signed_duration_since(self.stored_at) < ttl
    }
}

/// Key-value store for upstream responses.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Look up an entry. Never fails: unreadable or corrupt storage reads as
    /// absent, which triggers a refetch upstream.
    async fn get(&self, key: &str) -> Option<CacheEntry>;

    /// Record a payload under `key` with the current timestamp, overwriting
    /// any prior entry. Persistence is best-effort; callers log and continue
    /// on failure.
    async fn put(&self, key: &str, payload: Value) -> AppResult<()>;
}
