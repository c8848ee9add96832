use crate::catalog::errors::CatalogError;
use crate::catalog::helpers::{validate_name, validate_price, validate_stock};
use crate::catalog::structs::variant_input::VariantInput;

impl VariantInput {
    pub fn validate(&self) -> Result<(), CatalogError> {
        validate_name("variant name", &self.name)?;
        if let Some(sku) = &self.sku {
            validate_name("sku", sku)?;
        }
        if let Some(price) = self.price {
            validate_price("variant price", price)?;
        }
        validate_stock(self.stock)
    }
}
