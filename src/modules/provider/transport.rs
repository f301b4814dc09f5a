//! HTTP transport for upstream calls.
//!
//! The coordinator is parameterized by this trait so tests can substitute a
//! stub; the production implementation wraps `reqwest` with a bounded timeout
//! and a client-side rate limiter sized to Jikan's published limits.

use async_trait::async_trait;
use governor::{Quota, RateLimiter as GovernorRateLimiter};
use reqwest::Client;
use serde_json::Value;
use std::num::NonZeroU32;
use std::time::Duration;

use crate::shared::errors::{AppError, AppResult};

/// Hard upper bound for a single upstream call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = "Anihour/1.0";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UpstreamTransport: Send + Sync {
    /// Perform one GET and parse the body as JSON. No automatic retries:
    /// transport failure, timeout, and non-2xx status all surface to the
    /// caller directly.
    async fn get_json(&self, url: &str) -> AppResult<Value>;
}

type DirectRateLimiter = GovernorRateLimiter<
    governor::state::direct::NotKeyed,
    governor::state::InMemoryState,
    governor::clock::DefaultClock,
    governor::middleware::NoOpMiddleware,
>;

/// Rate-limited `reqwest` client for the Jikan API.
pub struct JikanTransport {
    client: Client,
    rate_limiter: DirectRateLimiter,
}

impl JikanTransport {
    pub fn new() -> AppResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::ConfigError(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            // Jikan v4: ~60 req/min = 1.0 req/sec average with 3 req/sec burst capability
            rate_limiter: Self::create_rate_limiter(1.0, 3),
        })
    }

    /// Create a rate limiter with specified requests per second and burst capacity
    fn create_rate_limiter(requests_per_second: f64, burst_size: u32) -> DirectRateLimiter {
        let period = Duration::from_secs_f64(1.0 / requests_per_second);
        let burst = NonZeroU32::new(burst_size.max(1)).unwrap();
        let quota = Quota::with_period(period).unwrap().allow_burst(burst);

        GovernorRateLimiter::direct(quota)
    }

    /// Check if a request can be made immediately (for testing and monitoring)
    pub fn can_make_request_now(&self) -> bool {
        self.rate_limiter.check().is_ok()
    }
}

#[async_trait]
impl UpstreamTransport for JikanTransport {
    async fn get_json(&self, url: &str) -> AppResult<Value> {
        // Wait for rate limiter before dispatching
        self.rate_limiter.until_ready().await;

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::UpstreamError(format!(
                "Jikan API returned error: {}",
                status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::UpstreamError(format!("failed to read Jikan response: {}", e)))?;

        serde_json::from_str(&body).map_err(|e| {
            let snippet: String = body.chars().take(200).collect();
            AppError::MalformedResponse(format!(
                "failed to parse Jikan response: {}. Response: {}",
                e, snippet
            ))
        })
    }
}
