use crate::catalog::errors::CatalogError;
use crate::catalog::helpers::{validate_id, validate_name, validate_price, validate_stock};
use crate::catalog::structs::product_input::ProductInput;

impl ProductInput {
    pub fn validate(&self) -> Result<(), CatalogError> {
        validate_name("name", &self.name)?;
        validate_price("price", self.price)?;
        validate_stock(self.stock)?;
        validate_id("categoryId", &self.category_id)?;
        for variant in &self.variants {
            variant.validate()?;
        }
        Ok(())
    }
}
