use std::sync::Arc;

use crate::cache::{self, KeyValueCache, VersionCache};
use crate::config::{CacheBackend, Config};
use crate::db::Store;
use crate::services::{CachedMovieService, DirectorService, MovieService, SeaOrmDirectorService};

/// Long-lived service graph shared by every request.
#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,

    pub cache: Arc<dyn KeyValueCache>,

    /// Backend actually serving `cache`, which differs from the configured
    /// one after a startup fallback.
    pub cache_backend: CacheBackend,

    pub movie_service: Arc<dyn MovieService>,

    pub director_service: Arc<dyn DirectorService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        let (cache, cache_backend) = cache::connect(&config.cache).await;

        Ok(Self {
            cache_backend,
            ..Self::from_parts(config, store, cache)
        })
    }

    /// Wires the services over an existing store and cache backend.
    ///
    /// `cache_backend` is taken from the config.
    #[must_use]
    pub fn from_parts(config: Config, store: Store, cache: Arc<dyn KeyValueCache>) -> Self {
        let movie_service = Arc::new(CachedMovieService::new(
            store.clone(),
            VersionCache::new(cache.clone()),
            config.page_ttl(),
        ));
        let director_service = Arc::new(SeaOrmDirectorService::new(store.clone()));

        Self {
            cache_backend: config.cache.backend,
            config: Arc::new(config),
            store,
            cache,
            movie_service,
            director_service,
        }
    }
}
