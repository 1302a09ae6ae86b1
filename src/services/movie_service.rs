//! Domain service for the movie catalog.

use serde::{Deserialize, Serialize};

use crate::cache::CachedPage;
use crate::models::{Movie, MovieInput};
use crate::services::CatalogError;

/// Listing parameters. `page` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u64,
    pub size: u64,
    pub search: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoviePage {
    pub items: Vec<Movie>,
    /// Number of matches across all pages.
    pub total: u64,
}

impl From<CachedPage> for MoviePage {
    fn from(page: CachedPage) -> Self {
        Self {
            items: page.items,
            total: page.total,
        }
    }
}

/// Domain service trait for movies.
#[async_trait::async_trait]
pub trait MovieService: Send + Sync {
    /// Creates a movie after checking its director exists and its IMDb id is unused.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::InvalidReference`] if the director does not exist
    /// - [`CatalogError::Conflict`] if the IMDb id is taken
    async fn create(&self, input: MovieInput) -> Result<Movie, CatalogError>;

    /// Overwrites every mutable field of an existing movie.
    ///
    /// The new director and IMDb id are not re-validated here.
    async fn update(&self, id: &str, input: MovieInput) -> Result<Movie, CatalogError>;

    async fn delete(&self, id: &str) -> Result<(), CatalogError>;

    /// Lists one page of movies, served from the listing cache when possible.
    async fn get_paged(&self, query: PageQuery) -> Result<MoviePage, CatalogError>;
}
