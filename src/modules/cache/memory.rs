use async_trait::async_trait;
use dashmap::DashMap;
use log::debug;
use serde_json::Value;

use super::{CacheEntry, CacheStore};
use crate::shared::errors::AppResult;

/// Process-local cache backed by a concurrent map.
///
/// Entry replacement is a single map insert, so a reader never observes a
/// half-written entry. Entries live for the process lifetime; expired ones
/// stay in the map until overwritten.
#[derive(Debug, Default)]
pub struct MemoryCacheStore {
    entries: DashMap<String, CacheEntry>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn get(&self, key: &str) -> Option<CacheEntry> {
        let entry = self.entries.get(key).map(|e| e.value().clone());
        match entry {
            Some(_) => debug!("cache read for key: {}", key),
            None => debug!("cache miss for key: {}", key),
        }
        entry
    }

    async fn put(&self, key: &str, payload: Value) -> AppResult<()> {
        self.entries.insert(key.to_string(), CacheEntry::new(payload));
        debug!("cached payload for key: {}", key);
        Ok(())
    }
}
