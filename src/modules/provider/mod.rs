pub mod coordinator;
pub mod news;
pub mod query;
pub mod transport;

// Re-exports for easy external access
pub use coordinator::{FetchCoordinator, DEFAULT_BASE_URL, DEFAULT_TTL_SECS};
pub use query::Query;
pub use transport::{JikanTransport, UpstreamTransport};
