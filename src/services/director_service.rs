use crate::models::{Director, DirectorInput};
use crate::services::CatalogError;

/// Domain service trait for directors.
#[async_trait::async_trait]
pub trait DirectorService: Send + Sync {
    async fn create(&self, input: DirectorInput) -> Result<Director, CatalogError>;

    /// Deletes a director that no movie references.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Conflict`] if any movie references the director (checked first)
    /// - [`CatalogError::NotFound`] if the director does not exist
    async fn delete(&self, id: &str) -> Result<(), CatalogError>;
}
