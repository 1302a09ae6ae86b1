//! Cache-aside implementation of [`MovieService`].
//!
//! Mutations persist first and bump the listing generation second. Listings
//! read the generation once, then the page keyed by it, then fall back to
//! the store and repopulate under that same generation.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::cache::{CachedPage, MOVIES_NAMESPACE, VersionCache};
use crate::db::Store;
use crate::models::{Movie, MovieInput};
use crate::services::CatalogError;
use crate::services::movie_service::{MoviePage, MovieService, PageQuery};

pub struct CachedMovieService {
    store: Store,
    cache: VersionCache,
    page_ttl: Duration,
}

impl CachedMovieService {
    #[must_use]
    pub const fn new(store: Store, cache: VersionCache, page_ttl: Duration) -> Self {
        Self {
            store,
            cache,
            page_ttl,
        }
    }

    async fn invalidate_listings(&self, operation: &str) {
        if self.cache.bump_generation(MOVIES_NAMESPACE).await {
            info!("Movies cache invalidated after {}", operation);
        }
    }

    async fn require_movie(&self, id: &str) -> Result<Movie, CatalogError> {
        self.store.get_movie(id).await?.ok_or_else(|| {
            warn!(movie_id = id, "Movie not found");
            CatalogError::NotFound(format!("Movie {id} not found"))
        })
    }
}

#[async_trait::async_trait]
impl MovieService for CachedMovieService {
    async fn create(&self, input: MovieInput) -> Result<Movie, CatalogError> {
        if self.store.get_director(&input.director_id).await?.is_none() {
            return Err(CatalogError::InvalidReference(format!(
                "Director {} not found",
                input.director_id
            )));
        }

        if self
            .store
            .get_movie_by_imdb_id(&input.imdb_id)
            .await?
            .is_some()
        {
            return Err(CatalogError::Conflict(format!(
                "Movie with IMDb ID {} already exists",
                input.imdb_id
            )));
        }

        let movie = self.store.add_movie(input).await?;
        info!(movie_id = %movie.id, imdb_id = %movie.imdb_id, "Created movie");

        self.invalidate_listings("create").await;
        Ok(movie)
    }

    async fn update(&self, id: &str, input: MovieInput) -> Result<Movie, CatalogError> {
        let mut movie = self.require_movie(id).await?;
        movie.apply(input);

        self.store.update_movie(&movie).await?;
        info!(movie_id = id, "Updated movie");

        self.invalidate_listings("update").await;
        Ok(movie)
    }

    async fn delete(&self, id: &str) -> Result<(), CatalogError> {
        self.require_movie(id).await?;

        self.store.delete_movie(id).await?;
        info!(movie_id = id, "Deleted movie");

        self.invalidate_listings("delete").await;
        Ok(())
    }

    async fn get_paged(&self, query: PageQuery) -> Result<MoviePage, CatalogError> {
        let PageQuery { page, size, search } = query;
        let search = search.as_deref();

        let generation = self.cache.current_generation(MOVIES_NAMESPACE).await;
        debug!(
            key = %VersionCache::page_key(MOVIES_NAMESPACE, generation, page, size, search),
            "Listing cache lookup"
        );

        if let Some(cached) = self
            .cache
            .get_page(MOVIES_NAMESPACE, generation, page, size, search)
            .await
        {
            return Ok(cached.into());
        }

        let (items, total) = self.store.list_movies(page, size, search).await?;
        let entry = CachedPage { items, total };

        // A bump landing after the generation read orphans this entry; it is
        // never read and expires on its TTL.
        self.cache
            .put_page(
                MOVIES_NAMESPACE,
                generation,
                page,
                size,
                search,
                &entry,
                self.page_ttl,
            )
            .await;

        Ok(entry.into())
    }
}
