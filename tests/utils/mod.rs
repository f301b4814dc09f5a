#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use anihour::modules::provider::UpstreamTransport;
use anihour::shared::errors::{AppError, AppResult};

/// Scripted stand-in for the upstream API: pops one queued response per call
/// and records how it was called.
pub struct StubTransport {
    calls: AtomicUsize,
    responses: Mutex<VecDeque<AppResult<Value>>>,
    last_url: Mutex<Option<String>>,
}

impl StubTransport {
    pub fn new(responses: Vec<AppResult<Value>>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            responses: Mutex::new(responses.into()),
            last_url: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_url(&self) -> Option<String> {
        self.last_url.lock().unwrap().clone()
    }
}

#[async_trait]
impl UpstreamTransport for StubTransport {
    async fn get_json(&self, url: &str) -> AppResult<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_url.lock().unwrap() = Some(url.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::UpstreamError("stub exhausted".to_string())))
    }
}

/// A list payload shaped like a Jikan `/top/anime` response.
pub fn listing(count: usize) -> Value {
    let items: Vec<Value> = (1..=count)
        .map(|i| {
            serde_json::json!({
                "mal_id": i,
                "title": format!("Anime {}", i),
                "url": format!("https://myanimelist.net/anime/{}", i),
            })
        })
        .collect();
    serde_json::json!({ "data": items })
}
