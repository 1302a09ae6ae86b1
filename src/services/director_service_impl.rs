//! `SeaORM` implementation of the `DirectorService` trait.

use tracing::{info, warn};

use crate::db::Store;
use crate::models::{Director, DirectorInput};
use crate::services::CatalogError;
use crate::services::director_service::DirectorService;
use crate::services::integrity::ReferentialGuard;

pub struct SeaOrmDirectorService {
    store: Store,
    guard: ReferentialGuard,
}

impl SeaOrmDirectorService {
    #[must_use]
    pub fn new(store: Store) -> Self {
        let guard = ReferentialGuard::new(store.clone());
        Self { store, guard }
    }
}

#[async_trait::async_trait]
impl DirectorService for SeaOrmDirectorService {
    async fn create(&self, input: DirectorInput) -> Result<Director, CatalogError> {
        let director = self.store.add_director(input).await?;
        info!(
            "Created new director {} ({} {})",
            director.id, director.first_name, director.second_name
        );
        Ok(director)
    }

    async fn delete(&self, id: &str) -> Result<(), CatalogError> {
        info!(director_id = id, "Attempting to delete director");
        self.guard.ensure_director_unreferenced(id).await?;

        if self.store.get_director(id).await?.is_none() {
            warn!(director_id = id, "Director not found");
            return Err(CatalogError::NotFound(format!("Director {id} not found")));
        }

        self.store.delete_director(id).await?;
        info!(director_id = id, "Deleted director");
        Ok(())
    }
}
