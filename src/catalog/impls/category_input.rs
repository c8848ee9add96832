use crate::catalog::errors::CatalogError;
use crate::catalog::helpers::validate_name;
use crate::catalog::structs::category_input::CategoryInput;

impl CategoryInput {
    pub fn validate(&self) -> Result<(), CatalogError> {
        validate_name("name", &self.name)
    }
}
