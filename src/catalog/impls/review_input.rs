use crate::catalog::errors::CatalogError;
use crate::catalog::helpers::validate_id;
use crate::catalog::structs::review_input::ReviewInput;

impl ReviewInput {
    pub fn validate(&self) -> Result<(), CatalogError> {
        validate_id("productId", &self.product_id)?;
        if !(1..=5).contains(&self.rating) {
            return Err(CatalogError::ValidationFailed("rating must be between 1 and 5".to_string()));
        }
        Ok(())
    }
}
