use directories::ProjectDirs;
use std::env;
use std::path::PathBuf;

use crate::modules::provider::{DEFAULT_BASE_URL, DEFAULT_TTL_SECS};
use crate::shared::errors::{AppError, AppResult};

/// Runtime configuration, read once at startup. A `.env` file is honored via
/// dotenvy; every variable has a default.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind: String,
    pub port: u16,
    pub upstream_url: String,
    pub cache_ttl_secs: u64,
    /// Where responses persist across restarts. `None` means no usable cache
    /// directory was found and the server falls back to in-memory caching.
    pub cache_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        let bind = env::var("ANIHOUR_BIND").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = parse_var("ANIHOUR_PORT", 5000)?;
        let upstream_url =
            env::var("ANIHOUR_UPSTREAM_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let cache_ttl_secs = parse_var("ANIHOUR_CACHE_TTL_SECS", DEFAULT_TTL_SECS)?;

        let cache_dir = match env::var("ANIHOUR_CACHE_DIR") {
            Ok(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
            _ => ProjectDirs::from("", "", "anihour").map(|dirs| dirs.cache_dir().to_path_buf()),
        };

        Ok(Self {
            bind,
            port,
            upstream_url,
            cache_ttl_secs,
            cache_dir,
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> AppResult<T> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| AppError::ConfigError(format!("invalid value for {}: {}", name, raw))),
        Err(_) => Ok(default),
    }
}
