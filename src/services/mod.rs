pub mod error;
pub use error::CatalogError;

pub mod integrity;
pub use integrity::ReferentialGuard;

pub mod movie_service;
pub mod movie_service_impl;
pub use movie_service::{MoviePage, MovieService, PageQuery};
pub use movie_service_impl::CachedMovieService;

pub mod director_service;
pub mod director_service_impl;
pub use director_service::DirectorService;
pub use director_service_impl::SeaOrmDirectorService;
