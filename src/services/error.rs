use thiserror::Error;

use crate::db::StoreError;

/// Failure kinds surfaced by the catalog services.
///
/// Cache failures never appear here; they are absorbed by the listing cache.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The entity the request targets does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A uniqueness or referential invariant would be violated.
    #[error("{0}")]
    Conflict(String),

    /// The request names a related entity that does not exist.
    #[error("{0}")]
    InvalidReference(String),

    #[error("Store failure: {0}")]
    Store(String),
}

impl From<StoreError> for CatalogError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict(msg) => Self::Conflict(msg),
            StoreError::NotFound(msg) => Self::NotFound(msg),
            StoreError::Database(e) => Self::Store(e.to_string()),
        }
    }
}
