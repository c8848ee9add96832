use crate::database::errors::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("Store query failed: {0}")]
    StoreQueryFailed(#[from] StoreError),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl CatalogError {
    pub fn not_found(entity: &'static str, id: &str) -> CatalogError {
        CatalogError::NotFound { entity, id: id.to_string() }
    }
}
