use chrono::{Duration, Utc};
use log::{debug, info, warn};
use serde_json::Value;
use std::sync::Arc;

use super::news;
use super::query::Query;
use super::transport::UpstreamTransport;
use crate::modules::cache::CacheStore;
use crate::shared::errors::AppResult;

pub const DEFAULT_BASE_URL: &str = "https://api.jikan.moe/v4";
pub const DEFAULT_TTL_SECS: u64 = 300;

/// Mediates between callers and the upstream API.
///
/// Per call: validate, check the cache, fetch upstream on miss or expiry,
/// write back, return. No retries, and no state survives across calls; a
/// failed fetch never evicts whatever stale entry the key already had.
pub struct FetchCoordinator {
    transport: Arc<dyn UpstreamTransport>,
    cache: Arc<dyn CacheStore>,
    base_url: String,
    ttl: Duration,
}

impl FetchCoordinator {
    pub fn new(
        transport: Arc<dyn UpstreamTransport>,
        cache: Arc<dyn CacheStore>,
        base_url: impl Into<String>,
        ttl_secs: u64,
    ) -> Self {
        Self {
            transport,
            cache,
            base_url: base_url.into(),
            ttl: Duration::seconds(ttl_secs as i64),
        }
    }

    /// Resolve a logical query to its JSON payload.
    pub async fn resolve(&self, query: &Query) -> AppResult<Value> {
        query.validate()?;

        let endpoint = query.canonical_endpoint();

        if let Some(entry) = self.cache.get(&endpoint).await {
            if entry.is_fresh(self.ttl, Utc::now()) {
                debug!("cache hit for {}", endpoint);
                return Ok(entry.payload);
            }
            debug!("cache entry for {} expired", endpoint);
        }

        let url = format!("{}{}", self.base_url, endpoint);
        info!("fetching {}", url);
        let payload = self.transport.get_json(&url).await?;

        let payload = match query {
            Query::News { .. } => news::from_top_anime(&payload),
            _ => payload,
        };

        // A failed write only costs persistence; the caller still gets the
        // fresh payload.
        if let Err(e) = self.cache.put(&endpoint, payload.clone()).await {
            warn!("cache write failed for {}: {}", endpoint, e);
        }

        Ok(payload)
    }
}
