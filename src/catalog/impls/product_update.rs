use crate::catalog::errors::CatalogError;
use crate::catalog::helpers::{validate_id, validate_name, validate_price, validate_stock};
use crate::catalog::structs::product_update::ProductUpdate;

impl ProductUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.stock.is_none()
            && self.category_id.is_none()
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.is_empty() {
            return Err(CatalogError::ValidationFailed("update contains no fields".to_string()));
        }
        if let Some(name) = &self.name {
            validate_name("name", name)?;
        }
        if let Some(price) = self.price {
            validate_price("price", price)?;
        }
        if let Some(stock) = self.stock {
            validate_stock(stock)?;
        }
        if let Some(category_id) = &self.category_id {
            validate_id("categoryId", category_id)?;
        }
        Ok(())
    }
}
