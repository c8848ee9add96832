use crate::catalog::structs::variant_input::VariantInput;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub stock: i64,
    pub category_id: String,
    /// Variants created in the same transaction as the product.
    #[serde(default)]
    pub variants: Vec<VariantInput>,
}
