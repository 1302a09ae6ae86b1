use crate::models::{Director, DirectorInput, Movie, MovieInput};
use anyhow::Result;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, SqlErr, Statement,
};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

pub mod migrator;
pub mod repositories;

/// Errors raised by the document store adapter.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique index rejected the write.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl StoreError {
    pub(crate) fn from_write(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => Self::Conflict(detail),
            _ => Self::Database(err),
        }
    }
}

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.contains(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite:").trim_start_matches("//");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn movie_repo(&self) -> repositories::movie::MovieRepository {
        repositories::movie::MovieRepository::new(self.conn.clone())
    }

    fn director_repo(&self) -> repositories::director::DirectorRepository {
        repositories::director::DirectorRepository::new(self.conn.clone())
    }

    pub async fn get_movie(&self, id: &str) -> Result<Option<Movie>, StoreError> {
        self.movie_repo().get(id).await
    }

    pub async fn get_movie_by_imdb_id(&self, imdb_id: &str) -> Result<Option<Movie>, StoreError> {
        self.movie_repo().get_by_imdb_id(imdb_id).await
    }

    pub async fn list_movies(
        &self,
        page: u64,
        size: u64,
        search: Option<&str>,
    ) -> Result<(Vec<Movie>, u64), StoreError> {
        self.movie_repo().list_paged(page, size, search).await
    }

    /// Persists a new movie under a freshly assigned identifier.
    pub async fn add_movie(&self, input: MovieInput) -> Result<Movie, StoreError> {
        let movie = Movie::from_input(Uuid::new_v4().to_string(), input);
        self.movie_repo().add(&movie).await?;
        Ok(movie)
    }

    pub async fn update_movie(&self, movie: &Movie) -> Result<(), StoreError> {
        self.movie_repo().update(movie).await
    }

    pub async fn delete_movie(&self, id: &str) -> Result<bool, StoreError> {
        self.movie_repo().delete(id).await
    }

    pub async fn movie_exists_for_director(&self, director_id: &str) -> Result<bool, StoreError> {
        self.movie_repo().exists_by_director_id(director_id).await
    }

    pub async fn get_director(&self, id: &str) -> Result<Option<Director>, StoreError> {
        self.director_repo().get(id).await
    }

    pub async fn add_director(&self, input: DirectorInput) -> Result<Director, StoreError> {
        let director = Director::from_input(Uuid::new_v4().to_string(), input);
        self.director_repo().add(&director).await?;
        Ok(director)
    }

    pub async fn delete_director(&self, id: &str) -> Result<bool, StoreError> {
        self.director_repo().delete(id).await
    }
}
