use tracing::warn;

use crate::db::Store;
use crate::services::CatalogError;

/// Pre-deletion check that keeps movies from pointing at a missing director.
#[derive(Clone)]
pub struct ReferentialGuard {
    store: Store,
}

impl ReferentialGuard {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn director_has_movies(&self, director_id: &str) -> Result<bool, CatalogError> {
        Ok(self.store.movie_exists_for_director(director_id).await?)
    }

    /// Fails with [`CatalogError::Conflict`] while any movie references the director.
    ///
    /// Runs before the director lookup, so a referenced id reports Conflict
    /// even if the director row itself is gone.
    pub async fn ensure_director_unreferenced(&self, director_id: &str) -> Result<(), CatalogError> {
        if self.director_has_movies(director_id).await? {
            warn!(director_id, "Cannot delete director because movies exist");
            return Err(CatalogError::Conflict(
                "Cannot delete director with existing movies".to_string(),
            ));
        }
        Ok(())
    }
}
