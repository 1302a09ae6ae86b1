//! Key/value cache primitive and the generation-gated page cache built on it.
//!
//! Every backend is best-effort: callers treat any [`CacheError`] as a miss
//! (on reads) or log and move on (on writes).

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::{CacheBackend, CacheConfig};

pub mod memory;
pub mod redis_cache;
pub mod version;

pub use memory::MemoryCache;
pub use redis_cache::RedisCache;
pub use version::{CachedPage, MOVIES_NAMESPACE, VersionCache};

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache backend error: {0}")]
    Backend(String),

    #[error("Cache operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("Cache payload could not be encoded or decoded: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Minimal get/set-with-TTL cache. Entries are never deleted explicitly.
#[async_trait]
pub trait KeyValueCache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Stores `value` under `key`. `None` means the entry never expires.
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), CacheError>;
}

/// Builds the configured cache backend and reports which backend is in use.
///
/// An unreachable Redis at startup falls back to an in-process cache.
pub async fn connect(config: &CacheConfig) -> (Arc<dyn KeyValueCache>, CacheBackend) {
    match config.backend {
        CacheBackend::Memory => {
            info!("Using in-process listing cache");
            (Arc::new(MemoryCache::new()), CacheBackend::Memory)
        }
        CacheBackend::Redis => {
            let timeout = Duration::from_millis(config.operation_timeout_ms);
            match RedisCache::connect(&config.redis_url, timeout).await {
                Ok(cache) => {
                    info!("Connected to Redis listing cache at {}", config.redis_url);
                    (Arc::new(cache), CacheBackend::Redis)
                }
                Err(e) => {
                    warn!(
                        error = %e,
                        "Redis unavailable at {}, falling back to in-process cache",
                        config.redis_url
                    );
                    (Arc::new(MemoryCache::new()), CacheBackend::Memory)
                }
            }
        }
    }
}
