//! Generation-gated listing cache.
//!
//! Each namespace owns one generation value stored under
//! `{namespace}:cache:version`. Listing pages are stored under keys that embed
//! the generation that was current when they were read, so changing the
//! generation makes every older page unaddressable. Nothing is ever deleted;
//! orphaned pages simply expire.
//!
//! The generation is only required to *change* on a bump. It is random, may
//! repeat with negligible probability, and carries no ordering.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{CacheError, KeyValueCache};
use crate::models::Movie;

pub const MOVIES_NAMESPACE: &str = "movies";

/// Generation assumed when the key is absent or the cache is unreachable.
pub const INITIAL_GENERATION: i64 = 1;

const ALL_SENTINEL: &str = "all";

/// One cached listing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedPage {
    pub items: Vec<Movie>,
    pub total: u64,
}

#[derive(Clone)]
pub struct VersionCache {
    cache: Arc<dyn KeyValueCache>,
}

impl VersionCache {
    #[must_use]
    pub fn new(cache: Arc<dyn KeyValueCache>) -> Self {
        Self { cache }
    }

    #[must_use]
    pub fn generation_key(namespace: &str) -> String {
        format!("{namespace}:cache:version")
    }

    #[must_use]
    pub fn page_key(
        namespace: &str,
        generation: i64,
        page: u64,
        size: u64,
        search: Option<&str>,
    ) -> String {
        format!(
            "{namespace}:v{generation}:page:{page}:size:{size}:search:{}",
            normalize_search(search)
        )
    }

    /// Reads the namespace generation, initializing it when absent.
    ///
    /// Never fails: an unreachable cache yields [`INITIAL_GENERATION`] without
    /// persisting anything.
    pub async fn current_generation(&self, namespace: &str) -> i64 {
        let key = Self::generation_key(namespace);

        let stored = match self.cache.get(&key).await {
            Ok(value) => value,
            Err(e) => {
                record_failure("read_generation", &e);
                return INITIAL_GENERATION;
            }
        };

        if let Some(generation) = stored.as_deref().and_then(|v| v.trim().parse::<i64>().ok()) {
            return generation;
        }

        if let Err(e) = self
            .cache
            .set(&key, &INITIAL_GENERATION.to_string(), None)
            .await
        {
            record_failure("init_generation", &e);
        }
        INITIAL_GENERATION
    }

    /// Replaces the namespace generation with a fresh random value.
    ///
    /// Returns whether the write landed. A failed write is logged and
    /// otherwise swallowed.
    pub async fn bump_generation(&self, namespace: &str) -> bool {
        let next: i64 = rand::random();
        let key = Self::generation_key(namespace);

        match self.cache.set(&key, &next.to_string(), None).await {
            Ok(()) => {
                metrics::counter!("catalog_cache_generation_bumps_total").increment(1);
                debug!(namespace, generation = next, "Cache generation bumped");
                true
            }
            Err(e) => {
                record_failure("bump_generation", &e);
                false
            }
        }
    }

    /// Looks up a page. Backend and decoding failures both read as a miss.
    pub async fn get_page(
        &self,
        namespace: &str,
        generation: i64,
        page: u64,
        size: u64,
        search: Option<&str>,
    ) -> Option<CachedPage> {
        let key = Self::page_key(namespace, generation, page, size, search);

        let raw = match self.cache.get(&key).await {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) => {
                metrics::counter!("catalog_cache_misses_total").increment(1);
                return None;
            }
            Err(e) => {
                record_failure("read_page", &e);
                return None;
            }
        };

        match serde_json::from_str::<CachedPage>(&raw) {
            Ok(cached) => {
                metrics::counter!("catalog_cache_hits_total").increment(1);
                debug!(key = %key, "Listing served from cache");
                Some(cached)
            }
            Err(e) => {
                record_failure("decode_page", &CacheError::from(e));
                None
            }
        }
    }

    /// Stores a page under the given generation with a fixed TTL.
    #[allow(clippy::too_many_arguments)]
    pub async fn put_page(
        &self,
        namespace: &str,
        generation: i64,
        page: u64,
        size: u64,
        search: Option<&str>,
        entry: &CachedPage,
        ttl: Duration,
    ) {
        let key = Self::page_key(namespace, generation, page, size, search);

        let payload = match serde_json::to_string(entry) {
            Ok(payload) => payload,
            Err(e) => {
                record_failure("encode_page", &CacheError::from(e));
                return;
            }
        };

        if let Err(e) = self.cache.set(&key, &payload, Some(ttl)).await {
            record_failure("write_page", &e);
        }
    }
}

/// Lower-cases the search text; absent or blank text maps to `all`.
#[must_use]
pub fn normalize_search(search: Option<&str>) -> String {
    match search {
        Some(text) if !text.trim().is_empty() => text.to_lowercase(),
        _ => ALL_SENTINEL.to_string(),
    }
}

fn record_failure(operation: &'static str, err: &CacheError) {
    metrics::counter!("catalog_cache_errors_total", "operation" => operation).increment(1);
    warn!(operation, error = %err, "Listing cache degraded; continuing without it");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCache;
    use async_trait::async_trait;
    use chrono::NaiveDate;

    struct BrokenCache;

    #[async_trait]
    impl KeyValueCache for BrokenCache {
        async fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
            Err(CacheError::Backend("connection refused".to_string()))
        }

        async fn set(
            &self,
            _key: &str,
            _value: &str,
            _ttl: Option<Duration>,
        ) -> Result<(), CacheError> {
            Err(CacheError::Backend("connection refused".to_string()))
        }
    }

    fn sample_page() -> CachedPage {
        CachedPage {
            items: vec![Movie {
                id: "m1".to_string(),
                title: "The Matrix".to_string(),
                description: None,
                release_date: NaiveDate::from_ymd_opt(1999, 3, 31).unwrap(),
                genre: "Action".to_string(),
                rating: 8.7,
                imdb_id: "tt0133093".to_string(),
                director_id: "d1".to_string(),
            }],
            total: 1,
        }
    }

    #[test]
    fn test_key_formats() {
        assert_eq!(VersionCache::generation_key("movies"), "movies:cache:version");
        assert_eq!(
            VersionCache::page_key("movies", 1, 2, 20, None),
            "movies:v1:page:2:size:20:search:all"
        );
        assert_eq!(
            VersionCache::page_key("movies", -42, 1, 10, Some("MaTrix")),
            "movies:v-42:page:1:size:10:search:matrix"
        );
        assert_eq!(
            VersionCache::page_key("movies", 7, 1, 10, Some("   ")),
            "movies:v7:page:1:size:10:search:all"
        );
    }

    #[tokio::test]
    async fn test_generation_initialized_once() {
        let backend = Arc::new(MemoryCache::new());
        let cache = VersionCache::new(backend.clone());

        assert_eq!(cache.current_generation(MOVIES_NAMESPACE).await, 1);
        assert_eq!(
            backend.get("movies:cache:version").await.unwrap().as_deref(),
            Some("1")
        );
    }

    #[tokio::test]
    async fn test_bump_changes_generation() {
        let cache = VersionCache::new(Arc::new(MemoryCache::new()));
        let mut seen = vec![cache.current_generation(MOVIES_NAMESPACE).await];

        for _ in 0..5 {
            assert!(cache.bump_generation(MOVIES_NAMESPACE).await);
            let next = cache.current_generation(MOVIES_NAMESPACE).await;
            assert!(!seen.contains(&next));
            seen.push(next);
        }
    }

    #[tokio::test]
    async fn test_page_is_unaddressable_after_bump() {
        let cache = VersionCache::new(Arc::new(MemoryCache::new()));
        let generation = cache.current_generation(MOVIES_NAMESPACE).await;
        let page = sample_page();

        cache
            .put_page(
                MOVIES_NAMESPACE,
                generation,
                1,
                20,
                None,
                &page,
                Duration::from_secs(60),
            )
            .await;
        assert_eq!(
            cache
                .get_page(MOVIES_NAMESPACE, generation, 1, 20, None)
                .await,
            Some(page)
        );

        cache.bump_generation(MOVIES_NAMESPACE).await;
        let next = cache.current_generation(MOVIES_NAMESPACE).await;
        assert_eq!(
            cache.get_page(MOVIES_NAMESPACE, next, 1, 20, None).await,
            None
        );
    }

    #[tokio::test]
    async fn test_undecodable_page_is_a_miss() {
        let backend = Arc::new(MemoryCache::new());
        backend
            .set("movies:v1:page:1:size:20:search:all", "{not json", None)
            .await
            .unwrap();

        let cache = VersionCache::new(backend);
        assert_eq!(cache.get_page(MOVIES_NAMESPACE, 1, 1, 20, None).await, None);
    }

    #[tokio::test]
    async fn test_broken_backend_fails_open() {
        let cache = VersionCache::new(Arc::new(BrokenCache));

        assert_eq!(cache.current_generation(MOVIES_NAMESPACE).await, 1);
        assert!(!cache.bump_generation(MOVIES_NAMESPACE).await);
        cache
            .put_page(
                MOVIES_NAMESPACE,
                1,
                1,
                20,
                None,
                &sample_page(),
                Duration::from_secs(60),
            )
            .await;
        assert_eq!(cache.get_page(MOVIES_NAMESPACE, 1, 1, 20, None).await, None);
    }
}
