use async_trait::async_trait;
use log::{debug, warn};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

use super::{CacheEntry, CacheStore};
use crate::shared::errors::{AppError, AppResult};

/// Disk-backed cache: one JSON file per key, surviving process restarts.
///
/// Keys are canonical endpoint strings containing `/` and `?`, so file names
/// are the hex digest of the key instead. Each file holds a serialized
/// [`CacheEntry`]. Nothing is ever deleted; growth is bounded only by the
/// number of distinct endpoints requested.
#[derive(Debug, Clone)]
pub struct FileCacheStore {
    cache_dir: PathBuf,
}

impl FileCacheStore {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    fn cache_path(&self, key: &str) -> PathBuf {
        let digest = Sha256::digest(key.as_bytes());
        let mut name = String::with_capacity(digest.len() * 2 + 5);
        for byte in digest {
            name.push_str(&format!("{:02x}", byte));
        }
        name.push_str(".json");
        self.cache_dir.join(name)
    }

    async fn ensure_dir(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.cache_dir).await
    }
}

#[async_trait]
impl CacheStore for FileCacheStore {
    async fn get(&self, key: &str) -> Option<CacheEntry> {
        let path = self.cache_path(key);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(_) => {
                debug!("cache miss for key: {}", key);
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(entry) => {
                debug!("cache read for key: {}", key);
                Some(entry)
            }
            Err(e) => {
                // Corrupt file reads as absent and will be overwritten by the
                // next successful fetch.
                warn!("unreadable cache file {}: {}", path.display(), e);
                None
            }
        }
    }

    async fn put(&self, key: &str, payload: Value) -> AppResult<()> {
        self.ensure_dir()
            .await
            .map_err(|e| AppError::CacheError(format!("failed to create cache dir: {}", e)))?;

        let entry = CacheEntry::new(payload);
        let json = serde_json::to_string(&entry)
            .map_err(|e| AppError::CacheError(format!("failed to serialize entry: {}", e)))?;

        let path = self.cache_path(key);
        tokio::fs::write(&path, json)
            .await
            .map_err(|e| AppError::CacheError(format!("failed to write {}: {}", path.display(), e)))?;

        debug!("cached payload for key: {}", key);
        Ok(())
    }
}
